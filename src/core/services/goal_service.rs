use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::domain::goal::{Goal, GoalKind};
use crate::formulas::{
    goal_progress_pct, goal_status, payoff_months, savings_timeline_months, GoalStatus, Horizon,
};

pub struct GoalService;

impl GoalService {
    /// Months until `goal` is reached when `monthly_contribution` goes toward it every month.
    ///
    /// `None` when there is no goal or nothing is contributed. Savings goals
    /// ignore their interest rate here even when one is recorded. Other goals
    /// use `ceil(ln(remaining / contribution) / ln(1 + monthly_rate / 100))`
    /// and are unreachable whenever that is not a finite positive count.
    pub fn project_timeframe(goal: Option<&Goal>, monthly_contribution: f64) -> Option<Horizon> {
        let goal = goal?;
        if monthly_contribution <= 0.0 || monthly_contribution.is_nan() {
            return None;
        }
        if goal.kind == GoalKind::Savings {
            return Some(savings_timeline_months(
                goal.current_progress,
                goal.target_amount,
                monthly_contribution,
                0.0,
            ));
        }

        let remaining = goal.remaining();
        if remaining <= 0.0 {
            return Some(Horizon::Months(0));
        }
        let monthly_rate = goal.monthly_rate_pct();
        let months =
            ((remaining / monthly_contribution).ln() / (1.0 + monthly_rate / 100.0).ln()).ceil();
        if months.is_finite() && months > 0.0 && months <= u32::MAX as f64 {
            Some(Horizon::Months(months as u32))
        } else {
            debug!(
                goal = %goal.name,
                remaining,
                monthly_contribution,
                monthly_rate,
                "goal timeframe has no finite estimate"
            );
            Some(Horizon::Unreachable)
        }
    }

    /// Amortized payoff estimate shown on the goals dashboard.
    ///
    /// Interest accrues on the remaining balance of non-savings goals, so a
    /// contribution that does not cover a month's interest never finishes.
    pub fn project_payoff(goal: Option<&Goal>, monthly_contribution: f64) -> Option<Horizon> {
        let goal = goal?;
        if monthly_contribution <= 0.0 || monthly_contribution.is_nan() {
            return None;
        }
        let remaining = goal.remaining();
        if remaining <= 0.0 {
            return Some(Horizon::Months(0));
        }
        let horizon = if goal.kind == GoalKind::Savings {
            savings_timeline_months(0.0, remaining, monthly_contribution, 0.0)
        } else {
            payoff_months(remaining, monthly_contribution, goal.annual_rate_pct())
        };
        Some(horizon)
    }

    pub fn progress(goal: &Goal) -> f64 {
        goal_progress_pct(goal.current_progress, goal.target_amount)
    }

    pub fn status(goal: &Goal) -> GoalStatus {
        goal_status(Self::progress(goal), goal.kind.as_str())
    }

    /// Calendar date `horizon` months after `start`; `None` when unreachable or out of range.
    pub fn completion_date(start: NaiveDate, horizon: Horizon) -> Option<NaiveDate> {
        let months = horizon.months()?;
        start.checked_add_months(Months::new(months))
    }
}
