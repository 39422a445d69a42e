#![allow(dead_code)]

use std::sync::Mutex;

use budget_planning_core::{
    config::ConfigManager,
    domain::budget::{Budget, BudgetLineItem, DetailedAllocation},
    domain::goal::{Goal, InterestPeriod},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager backed by a unique directory for each test.
pub fn setup_config_env() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

/// A budget that passes every submission check.
pub fn household_budget() -> Budget {
    Budget::new(5000.0)
        .with_fixed(BudgetLineItem::new("Rent and Utilities", 1800.0))
        .with_fixed(BudgetLineItem::new("Loan Payments", "350"))
        .with_variable(
            BudgetLineItem::new("Food and Drink", 600.0)
                .with_allocation(DetailedAllocation::new("Food and Drink - Groceries", 450.0))
                .with_allocation(DetailedAllocation::new("Food and Drink - Restaurant", "150")),
        )
        .with_variable(BudgetLineItem::new("Transportation", 250.0))
}

pub fn credit_card_debt() -> Goal {
    Goal::new("Credit Card", "debt_free", 10_000.0, 0.0).with_interest(18.0, InterestPeriod::Yearly)
}

pub fn emergency_fund() -> Goal {
    Goal::new("Emergency Fund", "savings", 6000.0, 0.0)
}
