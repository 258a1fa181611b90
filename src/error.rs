use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form fields a calculation request is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Principal,
    DownPayment,
    TermMonths,
    AnnualRatePercent,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Principal => "principal",
            Field::DownPayment => "down_payment",
            Field::TermMonths => "term_months",
            Field::AnnualRatePercent => "annual_rate_percent",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when raw input cannot be turned into a calculator input.
///
/// No calculation is attempted once this is returned; the field tells the
/// caller which input to highlight.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Invalid input: {field} — {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
