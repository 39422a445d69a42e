use budget_planning_core::formulas::{
    budget_variance_pct, compound_future_value, debt_to_income_ratio, emergency_fund_target,
    goal_progress_pct, goal_status, loan_payment, net_worth, payoff_months, savings_rate_pct,
    savings_timeline_months, Horizon, StatusLevel, DEFAULT_COMPOUNDING_PER_YEAR,
};

fn close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn thirty_year_mortgage_payment() {
    close(loan_payment(200_000.0, 6.0, 30.0), 1199.10, 0.01);
    close(loan_payment(12_000.0, 0.0, 1.0), 1000.0, 1e-9);
    assert_eq!(loan_payment(12_000.0, 5.0, 0.0), 0.0);
}

#[test]
fn payment_and_payoff_agree() {
    let payment = loan_payment(20_000.0, 7.0, 5.0) + 0.01;
    assert_eq!(payoff_months(20_000.0, payment, 7.0), Horizon::Months(60));
}

#[test]
fn payoff_never_finishes_below_interest() {
    // 1% a month on 10k is 100 of interest.
    assert_eq!(payoff_months(10_000.0, 100.0, 12.0), Horizon::Unreachable);
    assert_eq!(payoff_months(10_000.0, 0.0, 12.0), Horizon::Months(0));
}

#[test]
fn compounding_monthly_versus_never() {
    close(
        compound_future_value(1000.0, 12.0, 1.0, DEFAULT_COMPOUNDING_PER_YEAR),
        1126.825,
        0.001,
    );
    assert_eq!(compound_future_value(1000.0, 12.0, 1.0, 0), 1000.0);
}

#[test]
fn savings_timeline_edges() {
    assert_eq!(savings_timeline_months(0.0, 6000.0, 500.0, 0.0), Horizon::Months(12));
    assert_eq!(savings_timeline_months(7000.0, 6000.0, 500.0, 0.0), Horizon::Months(0));
    assert_eq!(savings_timeline_months(0.0, 6000.0, 0.0, 5.0), Horizon::Unreachable);
    let with_interest = savings_timeline_months(0.0, 6000.0, 500.0, 6.0);
    assert!(with_interest.months().unwrap() <= 12);
}

#[test]
fn ratios_guard_zero_denominators() {
    close(debt_to_income_ratio(1500.0, 5000.0), 30.0, 1e-9);
    assert_eq!(debt_to_income_ratio(1500.0, 0.0), 0.0);
    assert_eq!(savings_rate_pct(500.0, 0.0), 0.0);
    assert_eq!(savings_rate_pct(500.0, 5000.0), 10.0);
    assert_eq!(budget_variance_pct(0.0, 10.0), 0.0);
    assert_eq!(budget_variance_pct(200.0, 250.0), 25.0);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(goal_progress_pct(150.0, 100.0), 100.0);
    assert_eq!(goal_progress_pct(-10.0, 100.0), 0.0);
    assert_eq!(goal_progress_pct(10.0, 0.0), 0.0);
}

#[test]
fn totals() {
    assert_eq!(emergency_fund_target(2500.0, 6), 15_000.0);
    assert_eq!(net_worth(&[10_000.0, 2500.0], &[4000.0]), 8500.0);
    assert_eq!(net_worth(&[], &[]), 0.0);
}

#[test]
fn status_bands_differ_by_goal_class() {
    let debt = goal_status(50.0, "debt_free");
    let savings = goal_status(50.0, "savings");
    assert_eq!(debt.status, StatusLevel::Good);
    assert_eq!(debt.label, "Good Progress");
    assert_eq!(savings.label, "Halfway There");
    assert_eq!(goal_status(100.0, "car").label, "Complete!");
}

#[test]
fn horizon_serializes_tagged() {
    let json = serde_json::to_value(Horizon::Months(14)).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "months", "months": 14}));
    let json = serde_json::to_value(Horizon::Unreachable).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "unreachable"}));
}

#[test]
fn reference_values() {
    assert_eq!(loan_payment(1200.0, 0.0, 1.0), 100.0);
    assert_eq!(payoff_months(1000.0, 10.0, 0.0), Horizon::Months(100));
    assert_eq!(payoff_months(1000.0, 5.0, 12.0), Horizon::Unreachable);
    assert_eq!(goal_progress_pct(50.0, 100.0), 50.0);
    assert_eq!(savings_timeline_months(0.0, 1200.0, 100.0, 0.0), Horizon::Months(12));
}

#[test]
fn collapsing_rates_never_report_completion() {
    assert_eq!(savings_timeline_months(0.0, 50.0, 100.0, -1200.0), Horizon::Unreachable);
    assert_eq!(savings_timeline_months(0.0, 50.0, 100.0, -2400.0), Horizon::Unreachable);
    assert_eq!(payoff_months(1000.0, 100.0, -1200.0), Horizon::Unreachable);
    // Already reached stays complete whatever the rate.
    assert_eq!(savings_timeline_months(60.0, 50.0, 100.0, -1200.0), Horizon::Months(0));
}
