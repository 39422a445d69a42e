use serde::{Deserialize, Serialize};

/// Which label set a goal uses when its progress is classified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalClass {
    Debt,
    Savings,
}

impl GoalClass {
    /// Only `debt_free` goals read as debt; every other type shares the savings labels.
    pub fn of(goal_type: &str) -> Self {
        if goal_type == "debt_free" {
            GoalClass::Debt
        } else {
            GoalClass::Savings
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusBand {
    Complete,
    SeventyFive,
    Fifty,
    TwentyFive,
    Started,
}

impl StatusBand {
    pub fn for_progress(progress_pct: f64) -> Self {
        if progress_pct >= 100.0 {
            StatusBand::Complete
        } else if progress_pct >= 75.0 {
            StatusBand::SeventyFive
        } else if progress_pct >= 50.0 {
            StatusBand::Fifty
        } else if progress_pct >= 25.0 {
            StatusBand::TwentyFive
        } else {
            StatusBand::Started
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Complete,
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Display classification of a goal's progress.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GoalStatus {
    pub status: StatusLevel,
    pub color: &'static str,
    pub label: &'static str,
}

const fn entry(status: StatusLevel, color: &'static str, label: &'static str) -> GoalStatus {
    GoalStatus {
        status,
        color,
        label,
    }
}

const STATUS_TABLE: [(GoalClass, StatusBand, GoalStatus); 10] = [
    (
        GoalClass::Debt,
        StatusBand::Complete,
        entry(StatusLevel::Complete, "green", "Complete!"),
    ),
    (
        GoalClass::Debt,
        StatusBand::SeventyFive,
        entry(StatusLevel::Excellent, "green", "Almost Done"),
    ),
    (
        GoalClass::Debt,
        StatusBand::Fifty,
        entry(StatusLevel::Good, "yellow", "Good Progress"),
    ),
    (
        GoalClass::Debt,
        StatusBand::TwentyFive,
        entry(StatusLevel::Fair, "orange", "Making Progress"),
    ),
    (
        GoalClass::Debt,
        StatusBand::Started,
        entry(StatusLevel::Poor, "red", "Just Started"),
    ),
    (
        GoalClass::Savings,
        StatusBand::Complete,
        entry(StatusLevel::Complete, "green", "Complete!"),
    ),
    (
        GoalClass::Savings,
        StatusBand::SeventyFive,
        entry(StatusLevel::Excellent, "green", "Nearly There"),
    ),
    (
        GoalClass::Savings,
        StatusBand::Fifty,
        entry(StatusLevel::Good, "blue", "Halfway There"),
    ),
    (
        GoalClass::Savings,
        StatusBand::TwentyFive,
        entry(StatusLevel::Fair, "yellow", "Getting Started"),
    ),
    (
        GoalClass::Savings,
        StatusBand::Started,
        entry(StatusLevel::Poor, "gray", "Just Started"),
    ),
];

/// Classifies a progress percentage for the given goal type.
pub fn goal_status(progress_pct: f64, goal_type: &str) -> GoalStatus {
    let class = GoalClass::of(goal_type);
    let band = StatusBand::for_progress(progress_pct);
    STATUS_TABLE
        .iter()
        .find(|(c, b, _)| *c == class && *b == band)
        .map(|(_, _, status)| *status)
        // The table covers every (class, band) pair.
        .unwrap_or(entry(StatusLevel::Poor, "gray", "Just Started"))
}
