#![doc(test(attr(deny(warnings))))]

//! Budget Planning Core holds the calculation side of a personal budgeting
//! and goal tracking product: financial formulas, the standard spending
//! category taxonomy, budget validation and goal timeframe projections.
//!
//! ```
//! use budget_planning_core::domain::budget::{Budget, BudgetLineItem};
//! use budget_planning_core::BudgetService;
//!
//! let budget = Budget::new(5000.0)
//!     .with_fixed(BudgetLineItem::new("Rent and Utilities", 1500.0))
//!     .with_variable(BudgetLineItem::new("Food and Drink", "400"));
//! assert!(BudgetService::validate(&budget).is_ok());
//! assert_eq!(BudgetService::remaining(&budget), 3100.0);
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod formulas;
pub mod taxonomy;
pub mod utils;

pub use crate::core::services::{BudgetService, GoalService};
pub use errors::{PlanningError, ValidationError, ValidationErrorKind};
pub use formulas::Horizon;
pub use taxonomy::CategoryTaxonomy;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Planning Core tracing initialized.");
    });
}
