//! Financial goals: the canonical shape consumed by projections, and the
//! upstream record shapes it is normalized from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;
use crate::formulas::GoalClass;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalKind {
    Savings,
    DebtFree,
    /// Any other interest-bearing goal type, kept verbatim.
    Other(String),
}

impl GoalKind {
    pub fn as_str(&self) -> &str {
        match self {
            GoalKind::Savings => "savings",
            GoalKind::DebtFree => "debt_free",
            GoalKind::Other(raw) => raw,
        }
    }

    pub fn class(&self) -> GoalClass {
        GoalClass::of(self.as_str())
    }
}

impl From<String> for GoalKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "savings" => GoalKind::Savings,
            "debt_free" => GoalKind::DebtFree,
            _ => GoalKind::Other(raw),
        }
    }
}

impl From<&str> for GoalKind {
    fn from(raw: &str) -> Self {
        GoalKind::from(raw.to_string())
    }
}

impl From<GoalKind> for String {
    fn from(kind: GoalKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterestPeriod {
    #[default]
    Yearly,
    Monthly,
}

impl InterestPeriod {
    /// Reads an upstream period label; absent means yearly, anything but `yearly` is monthly.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None | Some("yearly") => InterestPeriod::Yearly,
            Some(_) => InterestPeriod::Monthly,
        }
    }
}

/// Canonical goal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub kind: GoalKind,
    pub target_amount: f64,
    pub current_progress: f64,
    /// Percent per `interest_period`.
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub interest_period: InterestPeriod,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<GoalKind>,
        target_amount: f64,
        current_progress: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            target_amount,
            current_progress,
            interest_rate: 0.0,
            interest_period: InterestPeriod::Yearly,
        }
    }

    pub fn with_interest(mut self, rate: f64, period: InterestPeriod) -> Self {
        self.interest_rate = rate;
        self.interest_period = period;
        self
    }

    pub fn remaining(&self) -> f64 {
        self.target_amount - self.current_progress
    }

    /// Interest rate per month, in percent.
    pub fn monthly_rate_pct(&self) -> f64 {
        match self.interest_period {
            InterestPeriod::Yearly => self.interest_rate / 12.0,
            InterestPeriod::Monthly => self.interest_rate,
        }
    }

    /// Interest rate per year, in percent.
    pub fn annual_rate_pct(&self) -> f64 {
        match self.interest_period {
            InterestPeriod::Yearly => self.interest_rate,
            InterestPeriod::Monthly => self.interest_rate * 12.0,
        }
    }
}

impl NamedEntity for Goal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Goal {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Savings-style goal as stored upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalRecord {
    pub goal_name: String,
    pub goal_type: String,
    pub target_amount: f64,
    #[serde(default)]
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ir: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate_period: Option<String>,
}

/// Debt goal as stored upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtGoalRecord {
    pub goal_name: String,
    pub goal_type: String,
    pub target_amount: f64,
    #[serde(default)]
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_type: Option<String>,
}

/// Upstream goal in either of its stored shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGoalRecord", untagged)]
pub enum GoalRecord {
    Savings(SavingsGoalRecord),
    Debt(DebtGoalRecord),
}

/// Union of every upstream field, used only to pick a [`GoalRecord`] variant.
#[derive(Debug, Deserialize)]
struct RawGoalRecord {
    goal_name: String,
    goal_type: String,
    target_amount: f64,
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default)]
    ir: Option<f64>,
    #[serde(default)]
    interest_rate_period: Option<String>,
    #[serde(default)]
    interest_rate: Option<f64>,
    #[serde(default)]
    interest_type: Option<String>,
}

impl From<RawGoalRecord> for GoalRecord {
    fn from(raw: RawGoalRecord) -> Self {
        let progress = raw.progress.unwrap_or_default();
        let is_debt = raw.interest_rate.is_some()
            || raw.interest_type.is_some()
            || raw.goal_type == "debt_free";
        if is_debt {
            GoalRecord::Debt(DebtGoalRecord {
                goal_name: raw.goal_name,
                goal_type: raw.goal_type,
                target_amount: raw.target_amount,
                progress,
                interest_rate: raw.interest_rate.or(raw.ir),
                interest_type: raw.interest_type.or(raw.interest_rate_period),
            })
        } else {
            GoalRecord::Savings(SavingsGoalRecord {
                goal_name: raw.goal_name,
                goal_type: raw.goal_type,
                target_amount: raw.target_amount,
                progress,
                ir: raw.ir,
                interest_rate_period: raw.interest_rate_period,
            })
        }
    }
}

impl GoalRecord {
    /// Produces the canonical goal: missing rates are zero, missing periods yearly.
    pub fn normalize(self) -> Goal {
        match self {
            GoalRecord::Savings(record) => Goal {
                name: record.goal_name,
                kind: GoalKind::from(record.goal_type),
                target_amount: record.target_amount,
                current_progress: record.progress,
                interest_rate: record.ir.unwrap_or_default(),
                interest_period: InterestPeriod::from_label(record.interest_rate_period.as_deref()),
            },
            GoalRecord::Debt(record) => Goal {
                name: record.goal_name,
                kind: GoalKind::from(record.goal_type),
                target_amount: record.target_amount,
                current_progress: record.progress,
                interest_rate: record.interest_rate.unwrap_or_default(),
                interest_period: InterestPeriod::from_label(record.interest_type.as_deref()),
            },
        }
    }
}

impl From<GoalRecord> for Goal {
    fn from(record: GoalRecord) -> Self {
        record.normalize()
    }
}
