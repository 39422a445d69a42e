pub mod budget_service;
pub mod goal_service;

pub use budget_service::{AllocationShare, BudgetService, CategoryIssue};
pub use goal_service::GoalService;
