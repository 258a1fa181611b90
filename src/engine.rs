//! The calculator operations: validation, summary and schedule in one call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annuity::{loan_summary, mortgage_summary};
use crate::deposit::deposit_summary;
use crate::error::ValidationResult;
use crate::model::{CalculationResult, CalculatorKind, DepositInput, LoanInput, MortgageInput};
use crate::schedule::{deposit_schedule, loan_schedule, mortgage_schedule};
use crate::validation::{
    check_deposit, check_loan, check_mortgage, validate_deposit, validate_loan,
    validate_mortgage, RawLoanForm, RawMortgageForm,
};

/// A raw request for whichever calculator is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationRequest {
    Loan(RawLoanForm),
    Mortgage(RawMortgageForm),
    Deposit(RawLoanForm),
}

impl CalculationRequest {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationRequest::Loan(_) => CalculatorKind::Loan,
            CalculationRequest::Mortgage(_) => CalculatorKind::Mortgage,
            CalculationRequest::Deposit(_) => CalculatorKind::Deposit,
        }
    }
}

/// Calculates payment, totals and amortization schedule for a loan.
///
/// # Errors
///
/// Returns a `ValidationError` if the principal or term is not positive or
/// the rate is negative.
pub fn compute_loan(input: &LoanInput) -> ValidationResult<CalculationResult> {
    check_loan(input)?;
    Ok(CalculationResult {
        kind: CalculatorKind::Loan,
        summary: loan_summary(input),
        schedule: loan_schedule(input),
    })
}

/// Calculates a mortgage on the price minus the down payment.
///
/// # Errors
///
/// As [`compute_loan`], plus a down payment that is negative or not below
/// the principal.
pub fn compute_mortgage(input: &MortgageInput) -> ValidationResult<CalculationResult> {
    check_mortgage(input)?;
    Ok(CalculationResult {
        kind: CalculatorKind::Mortgage,
        summary: mortgage_summary(input),
        schedule: mortgage_schedule(input),
    })
}

/// Calculates final value, profit and monthly growth of a deposit.
///
/// # Errors
///
/// Same conditions as [`compute_loan`].
pub fn compute_deposit(input: &DepositInput) -> ValidationResult<CalculationResult> {
    check_deposit(input)?;
    Ok(CalculationResult {
        kind: CalculatorKind::Deposit,
        summary: deposit_summary(input),
        schedule: deposit_schedule(input),
    })
}

pub fn calculate_loan(form: &RawLoanForm) -> ValidationResult<CalculationResult> {
    compute_loan(&validate_loan(form)?)
}

pub fn calculate_mortgage(form: &RawMortgageForm) -> ValidationResult<CalculationResult> {
    compute_mortgage(&validate_mortgage(form)?)
}

pub fn calculate_deposit(form: &RawLoanForm) -> ValidationResult<CalculationResult> {
    compute_deposit(&validate_deposit(form)?)
}

/// Validates and runs a raw request for its calculator.
pub fn compute(request: &CalculationRequest) -> ValidationResult<CalculationResult> {
    debug!(kind = ?request.kind(), "dispatching calculation");
    match request {
        CalculationRequest::Loan(form) => calculate_loan(form),
        CalculationRequest::Mortgage(form) => calculate_mortgage(form),
        CalculationRequest::Deposit(form) => calculate_deposit(form),
    }
}
