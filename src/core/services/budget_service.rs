use serde::Serialize;
use strsim::levenshtein;
use tracing::warn;

use crate::domain::budget::{
    AllocationPayload, Budget, BudgetLineItem, BudgetPayload, BudgetSection, LineItemPayload,
};
use crate::errors::{ValidationError, ValidationErrorKind};
use crate::taxonomy::CategoryTaxonomy;

const SUGGESTION_MAX_DISTANCE: usize = 3;

/// A line item or allocation whose name is not part of the category taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryIssue {
    pub section: BudgetSection,
    pub line_item: String,
    /// Set when the unknown name belongs to a detailed allocation.
    pub allocation: Option<String>,
    pub suggestion: Option<String>,
}

/// A line item's share of income.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationShare {
    pub section: BudgetSection,
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
}

pub struct BudgetService;

impl BudgetService {
    /// Sum of line item limits; non-numeric or empty limits count as zero.
    pub fn compute_total_allocated(items: &[BudgetLineItem]) -> f64 {
        items.iter().map(|item| item.limit.value()).sum()
    }

    pub fn compute_remaining(income: f64, total_allocated: f64, monthly_contribution: f64) -> f64 {
        income - total_allocated - monthly_contribution
    }

    pub fn total_allocated(budget: &Budget) -> f64 {
        Self::compute_total_allocated(&budget.fixed_costs)
            + Self::compute_total_allocated(&budget.variable_expenses)
    }

    /// Income left after every limit and the goal contribution.
    pub fn remaining(budget: &Budget) -> f64 {
        Self::compute_remaining(
            budget.income,
            Self::total_allocated(budget),
            budget.monthly_contribution.value(),
        )
    }

    /// Checks a budget before submission, reporting the first failure only.
    pub fn validate(budget: &Budget) -> Result<(), ValidationError> {
        let result = Self::first_failure(budget);
        if let Err(err) = &result {
            warn!(kind = %err.kind, item = ?err.item, "budget failed validation");
        }
        result
    }

    fn first_failure(budget: &Budget) -> Result<(), ValidationError> {
        if budget.fixed_costs.is_empty() {
            return Err(ValidationErrorKind::EmptyFixed.into());
        }
        if budget.variable_expenses.is_empty() {
            return Err(ValidationErrorKind::EmptyVariable.into());
        }
        if let Some((_, item)) = budget
            .line_items()
            .find(|(_, item)| item.limit.value() <= 0.0)
        {
            return Err(ValidationError::for_item(
                ValidationErrorKind::NonpositiveLimit,
                item.name.clone(),
            ));
        }
        if let Some(goal) = budget.selected_goal() {
            if budget.monthly_contribution.value() <= 0.0 {
                return Err(ValidationError::for_item(
                    ValidationErrorKind::MissingContribution,
                    goal,
                ));
            }
        }
        Ok(())
    }

    /// Builds the payload handed to the external store.
    ///
    /// Incomplete detailed allocations are dropped and limits become plain
    /// numbers. Without a selected goal the contribution is recorded as zero.
    pub fn to_persistable_payload(budget: &Budget) -> BudgetPayload {
        let goal_name = budget.selected_goal().map(str::to_string);
        let monthly_contribution = if goal_name.is_some() {
            budget.monthly_contribution.value()
        } else {
            0.0
        };
        BudgetPayload {
            id: budget.id.clone(),
            income: budget.income,
            goal_name,
            monthly_contribution,
            fixed_costs: budget.fixed_costs.iter().map(line_item_payload).collect(),
            variable_expenses: budget
                .variable_expenses
                .iter()
                .map(line_item_payload)
                .collect(),
        }
    }

    /// Reports names that do not match the taxonomy. Never rejects the budget.
    ///
    /// Line item names are checked against primary categories; allocations of
    /// a known primary are checked against its detailed categories, by full or
    /// short name.
    pub fn check_categories(budget: &Budget, taxonomy: &CategoryTaxonomy) -> Vec<CategoryIssue> {
        let primaries = taxonomy.primary_categories();
        let mut issues = Vec::new();
        for (section, item) in budget.line_items() {
            if !taxonomy.is_primary(&item.name) {
                issues.push(CategoryIssue {
                    section,
                    line_item: item.name.clone(),
                    allocation: None,
                    suggestion: closest(&item.name, primaries.iter().copied()),
                });
                continue;
            }
            let details = taxonomy.detailed_categories(&item.name);
            for allocation in &item.detailed_allocations {
                let known = details.iter().any(|entry| {
                    entry.full_name == allocation.name || entry.detailed_name == allocation.name
                });
                if !known {
                    issues.push(CategoryIssue {
                        section,
                        line_item: item.name.clone(),
                        allocation: Some(allocation.name.clone()),
                        suggestion: closest(
                            &allocation.name,
                            details.iter().map(|entry| entry.full_name.as_str()),
                        ),
                    });
                }
            }
        }
        issues
    }

    /// Each line item's limit as a percentage of income; empty without income.
    pub fn allocation_shares(budget: &Budget) -> Vec<AllocationShare> {
        if budget.income <= 0.0 || budget.income.is_nan() {
            return Vec::new();
        }
        budget
            .line_items()
            .map(|(section, item)| {
                let amount = item.limit.value();
                AllocationShare {
                    section,
                    name: item.name.clone(),
                    amount,
                    percentage: amount / budget.income * 100.0,
                }
            })
            .collect()
    }
}

fn line_item_payload(item: &BudgetLineItem) -> LineItemPayload {
    LineItemPayload {
        name: item.name.clone(),
        limit: item.limit.value(),
        detailed_categories: item
            .detailed_allocations
            .iter()
            .filter(|allocation| !allocation.name.is_empty() && allocation.limit.is_filled())
            .map(|allocation| AllocationPayload {
                name: allocation.name.clone(),
                limit: allocation.limit.value(),
            })
            .collect(),
    }
}

fn closest<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let lowered = name.to_lowercase();
    candidates
        .map(|candidate| (levenshtein(&lowered, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}
