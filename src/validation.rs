//! Turns raw form values into validated calculator inputs.

use serde::{Deserialize, Serialize};

use crate::error::{Field, ValidationError, ValidationResult};
use crate::model::{DepositInput, LoanInput, Money, MortgageInput};

/// Longest accepted term: 100 years of monthly periods.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// A value as it arrives from a form or a request file: either the text the
/// user typed or an already-parsed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl RawValue {
    /// `None` for blank text, `Some(Err)` for text that is not a finite number.
    fn parse(&self, field: Field) -> Option<ValidationResult<f64>> {
        let number = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                match text.parse::<f64>() {
                    Ok(n) => n,
                    Err(_) => {
                        return Some(Err(ValidationError::new(
                            field,
                            format!("'{text}' is not a number"),
                        )));
                    }
                }
            }
        };
        if !number.is_finite() {
            return Some(Err(ValidationError::new(field, "must be a finite number")));
        }
        Some(Ok(number))
    }
}

/// Raw loan or deposit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLoanForm {
    pub principal: RawValue,
    pub term_months: RawValue,
    pub annual_rate_percent: RawValue,
}

/// Raw mortgage form. A missing down payment counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMortgageForm {
    pub principal: RawValue,
    #[serde(default)]
    pub down_payment: Option<RawValue>,
    pub term_months: RawValue,
    pub annual_rate_percent: RawValue,
}

fn required(value: &RawValue, field: Field) -> ValidationResult<f64> {
    value
        .parse(field)
        .unwrap_or_else(|| Err(ValidationError::new(field, "is required")))
}

fn positive_amount(value: &RawValue, field: Field) -> ValidationResult<Money> {
    let amount = required(value, field)?;
    if amount <= 0.0 {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }
    Ok(amount)
}

fn term(value: &RawValue) -> ValidationResult<u32> {
    let months = positive_amount(value, Field::TermMonths)?;
    if months.fract() != 0.0 {
        return Err(ValidationError::new(
            Field::TermMonths,
            "must be a whole number of months",
        ));
    }
    if months > f64::from(MAX_TERM_MONTHS) {
        return Err(ValidationError::new(
            Field::TermMonths,
            format!("is too large (at most {MAX_TERM_MONTHS} months)"),
        ));
    }
    Ok(months as u32)
}

fn rate(value: &RawValue) -> ValidationResult<f64> {
    let rate = required(value, Field::AnnualRatePercent)?;
    if rate < 0.0 {
        return Err(ValidationError::new(
            Field::AnnualRatePercent,
            "must not be negative",
        ));
    }
    Ok(rate)
}

fn down_payment(value: Option<&RawValue>, principal: Money) -> ValidationResult<Money> {
    let down = match value.and_then(|v| v.parse(Field::DownPayment)) {
        None => 0.0,
        Some(parsed) => parsed?,
    };
    if down < 0.0 {
        return Err(ValidationError::new(Field::DownPayment, "must not be negative"));
    }
    if down >= principal {
        return Err(ValidationError::new(
            Field::DownPayment,
            "must be less than the principal",
        ));
    }
    Ok(down)
}

/// Validates a loan form. Fields are checked in form order and the first
/// failure is returned.
pub fn validate_loan(form: &RawLoanForm) -> ValidationResult<LoanInput> {
    Ok(LoanInput {
        principal: positive_amount(&form.principal, Field::Principal)?,
        term_months: term(&form.term_months)?,
        annual_rate_percent: rate(&form.annual_rate_percent)?,
    })
}

/// Validates a mortgage form; the financed amount (`principal - down_payment`)
/// is guaranteed positive on success.
pub fn validate_mortgage(form: &RawMortgageForm) -> ValidationResult<MortgageInput> {
    let principal = positive_amount(&form.principal, Field::Principal)?;
    let down_payment = down_payment(form.down_payment.as_ref(), principal)?;
    Ok(MortgageInput {
        principal,
        down_payment,
        term_months: term(&form.term_months)?,
        annual_rate_percent: rate(&form.annual_rate_percent)?,
    })
}

pub fn validate_deposit(form: &RawLoanForm) -> ValidationResult<DepositInput> {
    Ok(DepositInput {
        principal: positive_amount(&form.principal, Field::Principal)?,
        term_months: term(&form.term_months)?,
        annual_rate_percent: rate(&form.annual_rate_percent)?,
    })
}

/// Checks an already-typed loan input, for callers that skip the raw form.
pub fn check_loan(input: &LoanInput) -> ValidationResult<()> {
    validate_loan(&RawLoanForm {
        principal: input.principal.into(),
        term_months: input.term_months.into(),
        annual_rate_percent: input.annual_rate_percent.into(),
    })
    .map(|_| ())
}

pub fn check_mortgage(input: &MortgageInput) -> ValidationResult<()> {
    validate_mortgage(&RawMortgageForm {
        principal: input.principal.into(),
        down_payment: Some(input.down_payment.into()),
        term_months: input.term_months.into(),
        annual_rate_percent: input.annual_rate_percent.into(),
    })
    .map(|_| ())
}

pub fn check_deposit(input: &DepositInput) -> ValidationResult<()> {
    validate_deposit(&RawLoanForm {
        principal: input.principal.into(),
        term_months: input.term_months.into(),
        annual_rate_percent: input.annual_rate_percent.into(),
    })
    .map(|_| ())
}
