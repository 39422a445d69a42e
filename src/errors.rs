use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for the configuration layer, the only part of the crate that touches disk.
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Discriminates why a budget cannot be submitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    EmptyFixed,
    EmptyVariable,
    NonpositiveLimit,
    MissingContribution,
}

impl ValidationErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyFixed => "Please add at least one fixed cost.",
            ValidationErrorKind::EmptyVariable => "Please add at least one variable expense.",
            ValidationErrorKind::NonpositiveLimit => {
                "Please set a valid limit for all categories (greater than 0)."
            }
            ValidationErrorKind::MissingContribution => {
                "Please enter a valid monthly contribution (greater than 0) for the selected goal."
            }
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ValidationErrorKind::EmptyFixed => "EMPTY_FIXED",
            ValidationErrorKind::EmptyVariable => "EMPTY_VARIABLE",
            ValidationErrorKind::NonpositiveLimit => "NONPOSITIVE_LIMIT",
            ValidationErrorKind::MissingContribution => "MISSING_CONTRIBUTION",
        };
        f.write_str(code)
    }
}

/// A budget failed its submission checks. Surfaced to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", kind.message())]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// Name of the offending line item, when the failure is tied to one.
    pub item: Option<String>,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self { kind, item: None }
    }

    pub fn for_item(kind: ValidationErrorKind, item: impl Into<String>) -> Self {
        Self {
            kind,
            item: Some(item.into()),
        }
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}
