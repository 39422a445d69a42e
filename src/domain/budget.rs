//! Budget composition as entered by the user, and the payload handed to persistence.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::*;

/// A form amount: a number, free text, or nothing at all.
///
/// Text is read like a form field: the longest numeric prefix counts
/// (`"12.5 dollars"` is 12.5) and anything else has no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    #[default]
    Blank,
}

impl AmountInput {
    pub fn parsed(&self) -> Option<f64> {
        match self {
            AmountInput::Number(value) if value.is_finite() => Some(*value),
            AmountInput::Number(_) | AmountInput::Blank => None,
            AmountInput::Text(text) => leading_number(text),
        }
    }

    /// Numeric reading with non-numeric or empty input counting as zero.
    pub fn value(&self) -> f64 {
        self.parsed().unwrap_or(0.0)
    }

    /// Whether the field was filled in: non-empty text or a non-zero number.
    pub fn is_filled(&self) -> bool {
        match self {
            AmountInput::Number(value) => *value != 0.0 && !value.is_nan(),
            AmountInput::Text(text) => !text.is_empty(),
            AmountInput::Blank => false,
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            digits += 1;
        }
        end = frac;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits_start {
            end = exp;
        }
    }
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Informal breakdown of a line item into detailed categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DetailedAllocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub limit: AmountInput,
}

impl DetailedAllocation {
    pub fn new(name: impl Into<String>, limit: impl Into<AmountInput>) -> Self {
        Self {
            name: name.into(),
            limit: limit.into(),
        }
    }
}

/// One budgeted category with its spending limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BudgetLineItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub limit: AmountInput,
    #[serde(
        default,
        rename = "detailed_categories",
        deserialize_with = "null_as_default"
    )]
    pub detailed_allocations: Vec<DetailedAllocation>,
    /// Editor toggle; accepted on input, never written out.
    #[serde(default, rename = "showDetailed", skip_serializing)]
    pub show_detailed: bool,
}

impl BudgetLineItem {
    pub fn new(name: impl Into<String>, limit: impl Into<AmountInput>) -> Self {
        Self {
            name: name.into(),
            limit: limit.into(),
            ..Self::default()
        }
    }

    pub fn with_allocation(mut self, allocation: DetailedAllocation) -> Self {
        self.detailed_allocations.push(allocation);
        self
    }
}

impl NamedEntity for BudgetLineItem {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BudgetSection {
    FixedCosts,
    VariableExpenses,
}

impl fmt::Display for BudgetSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetSection::FixedCosts => "Fixed costs",
            BudgetSection::VariableExpenses => "Variable expenses",
        };
        f.write_str(label)
    }
}

/// A monthly budget as edited by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Budget {
    /// Present when an existing budget is being edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub income: f64,
    #[serde(default)]
    pub goal_name: Option<String>,
    #[serde(default)]
    pub monthly_contribution: AmountInput,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixed_costs: Vec<BudgetLineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variable_expenses: Vec<BudgetLineItem>,
}

impl Budget {
    pub fn new(income: f64) -> Self {
        Self {
            income,
            ..Self::default()
        }
    }

    pub fn with_goal(mut self, name: impl Into<String>, contribution: impl Into<AmountInput>) -> Self {
        self.goal_name = Some(name.into());
        self.monthly_contribution = contribution.into();
        self
    }

    pub fn with_fixed(mut self, item: BudgetLineItem) -> Self {
        self.fixed_costs.push(item);
        self
    }

    pub fn with_variable(mut self, item: BudgetLineItem) -> Self {
        self.variable_expenses.push(item);
        self
    }

    /// The selected goal; an empty name means none was picked.
    pub fn selected_goal(&self) -> Option<&str> {
        self.goal_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Fixed costs followed by variable expenses, tagged with their section.
    pub fn line_items(&self) -> impl Iterator<Item = (BudgetSection, &BudgetLineItem)> + '_ {
        self.fixed_costs
            .iter()
            .map(|item| (BudgetSection::FixedCosts, item))
            .chain(
                self.variable_expenses
                    .iter()
                    .map(|item| (BudgetSection::VariableExpenses, item)),
            )
    }
}

/// Serialized form of a budget handed to the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub income: f64,
    pub goal_name: Option<String>,
    pub monthly_contribution: f64,
    pub fixed_costs: Vec<LineItemPayload>,
    pub variable_expenses: Vec<LineItemPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemPayload {
    pub name: String,
    pub limit: f64,
    pub detailed_categories: Vec<AllocationPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPayload {
    pub name: String,
    pub limit: f64,
}
