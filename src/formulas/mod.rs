//! Pure financial formulas: amortization, compounding, goal timelines and ratios.
//!
//! Every function is total. Degenerate inputs resolve to `0`, to
//! [`Horizon::Unreachable`], or to `None` before any division or logarithm is
//! evaluated, so no `NaN` leaves this module.

mod status;

use serde::{Deserialize, Serialize};

pub use status::{goal_status, GoalClass, GoalStatus, StatusBand, StatusLevel};

/// Compounding frequency used when the caller has no preference.
pub const DEFAULT_COMPOUNDING_PER_YEAR: u32 = 12;

/// Number of months until a balance is cleared or a target is reached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum Horizon {
    Months(u32),
    /// The target is never reached at the current rate.
    Unreachable,
}

impl Horizon {
    pub fn months(self) -> Option<u32> {
        match self {
            Horizon::Months(months) => Some(months),
            Horizon::Unreachable => None,
        }
    }

    pub fn is_unreachable(self) -> bool {
        matches!(self, Horizon::Unreachable)
    }

    /// Rounds a raw month estimate up to whole months.
    ///
    /// Non-finite estimates and estimates beyond `u32::MAX` are unreachable;
    /// anything at or below zero is already complete.
    pub fn from_estimate(raw: f64) -> Self {
        if !raw.is_finite() {
            return Horizon::Unreachable;
        }
        let months = raw.ceil();
        if months <= 0.0 {
            Horizon::Months(0)
        } else if months > u32::MAX as f64 {
            Horizon::Unreachable
        } else {
            Horizon::Months(months as u32)
        }
    }
}

fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Amortized monthly payment (PMT) for a fixed-rate loan.
pub fn loan_payment(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    let payments = years * 12.0;
    if payments <= 0.0 || !payments.is_finite() {
        return 0.0;
    }
    if annual_rate_pct == 0.0 {
        return principal / payments;
    }
    let rate = monthly_rate(annual_rate_pct);
    let growth = (1.0 + rate).powf(payments);
    let denominator = growth - 1.0;
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    principal * rate * growth / denominator
}

/// Months needed to clear `principal` with a fixed monthly payment.
pub fn payoff_months(principal: f64, monthly_payment: f64, annual_rate_pct: f64) -> Horizon {
    if monthly_payment <= 0.0 || monthly_payment.is_nan() {
        return Horizon::Months(0);
    }
    if annual_rate_pct == 0.0 {
        return Horizon::from_estimate(principal / monthly_payment);
    }
    let rate = monthly_rate(annual_rate_pct);
    if 1.0 + rate <= 0.0 {
        return Horizon::Unreachable;
    }
    // The payment has to outrun the interest accruing each month.
    if monthly_payment <= principal * rate {
        return Horizon::Unreachable;
    }
    let estimate = -(1.0 - principal * rate / monthly_payment).ln() / (1.0 + rate).ln();
    Horizon::from_estimate(estimate)
}

/// Future value of `principal` compounded `compounding_per_year` times a year.
pub fn compound_future_value(
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
    compounding_per_year: u32,
) -> f64 {
    if compounding_per_year == 0 {
        return principal;
    }
    let periods = f64::from(compounding_per_year);
    let rate = annual_rate_pct / 100.0;
    principal * (1.0 + rate / periods).powf(periods * years)
}

/// Months of contributions needed to grow `current` into `target`.
pub fn savings_timeline_months(
    current: f64,
    target: f64,
    monthly_contribution: f64,
    annual_rate_pct: f64,
) -> Horizon {
    let remaining = target - current;
    if remaining <= 0.0 {
        return Horizon::Months(0);
    }
    if monthly_contribution <= 0.0 || monthly_contribution.is_nan() {
        return Horizon::Unreachable;
    }
    if annual_rate_pct == 0.0 {
        return Horizon::from_estimate(remaining / monthly_contribution);
    }
    let rate = monthly_rate(annual_rate_pct);
    // A rate of -1200% a year or lower has no logarithm to grow along.
    if 1.0 + rate <= 0.0 {
        return Horizon::Unreachable;
    }
    let estimate = (1.0 + remaining * rate / monthly_contribution).ln() / (1.0 + rate).ln();
    Horizon::from_estimate(estimate)
}

/// Share of monthly income consumed by debt payments, in percent.
pub fn debt_to_income_ratio(monthly_debt: f64, monthly_income: f64) -> f64 {
    if monthly_income <= 0.0 || monthly_income.is_nan() {
        return 0.0;
    }
    monthly_debt / monthly_income * 100.0
}

/// Progress toward `target`, clamped to `0..=100`.
pub fn goal_progress_pct(current: f64, target: f64) -> f64 {
    if target <= 0.0 || target.is_nan() {
        return 0.0;
    }
    let pct = current / target * 100.0;
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

pub fn emergency_fund_target(monthly_expenses: f64, months: u32) -> f64 {
    monthly_expenses * f64::from(months)
}

/// Overspend (positive) or underspend (negative) relative to the budgeted amount, in percent.
pub fn budget_variance_pct(budgeted: f64, actual: f64) -> f64 {
    if budgeted == 0.0 || budgeted.is_nan() {
        return 0.0;
    }
    (actual - budgeted) / budgeted * 100.0
}

pub fn savings_rate_pct(savings: f64, income: f64) -> f64 {
    if income <= 0.0 || income.is_nan() {
        return 0.0;
    }
    savings / income * 100.0
}

pub fn net_worth(assets: &[f64], liabilities: &[f64]) -> f64 {
    assets.iter().sum::<f64>() - liabilities.iter().sum::<f64>()
}
