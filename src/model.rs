//! Value types passed in and out of the calculators.
//!
//! Every type here is a plain value: created for one request, owned by the
//! caller, and discarded once rendered.

use serde::{Deserialize, Serialize};

/// Monetary amounts. Kept at full `f64` precision inside the engine.
pub type Money = f64;

/// Which calculator a request or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    Loan,
    Mortgage,
    Deposit,
}

/// Validated input for an installment loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: Money,
    /// Number of monthly payments.
    pub term_months: u32,
    /// Nominal annual rate as a percentage (e.g., 12 for 12%).
    pub annual_rate_percent: f64,
}

/// Validated input for a mortgage: a loan on the price minus the down payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Property price.
    pub principal: Money,
    /// Paid upfront, always below `principal`.
    pub down_payment: Money,
    pub term_months: u32,
    pub annual_rate_percent: f64,
}

impl MortgageInput {
    /// The amount actually financed.
    pub fn effective_principal(&self) -> Money {
        self.principal - self.down_payment
    }

    /// The equivalent loan on the financed amount.
    pub fn as_loan(&self) -> LoanInput {
        LoanInput {
            principal: self.effective_principal(),
            term_months: self.term_months,
            annual_rate_percent: self.annual_rate_percent,
        }
    }
}

/// Validated input for a monthly-compounded deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositInput {
    pub principal: Money,
    pub term_months: u32,
    pub annual_rate_percent: f64,
}

/// Headline figures for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryResult {
    /// Loan or mortgage.
    Installment {
        periodic_payment: Money,
        total_paid: Money,
        /// The overpay: `total_paid` minus the financed principal.
        total_interest: Money,
    },
    Deposit { final_value: Money, profit: Money },
}

/// One row of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleEntry {
    Installment {
        period: u32,
        /// Balance left after this period's payment.
        remaining_principal: Money,
        interest_portion: Money,
        payment_amount: Money,
    },
    Deposit { period: u32, accumulated_value: Money },
}

impl ScheduleEntry {
    pub fn period(&self) -> u32 {
        match self {
            ScheduleEntry::Installment { period, .. } | ScheduleEntry::Deposit { period, .. } => {
                *period
            }
        }
    }
}

/// Summary plus the full schedule, as returned by the `compute_*` operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub kind: CalculatorKind,
    pub summary: SummaryResult,
    pub schedule: Vec<ScheduleEntry>,
}

/// Converts an annual percentage into the nominal monthly rate (`a / 100 / 12`).
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        assert!((monthly_rate(12.0) - 0.01).abs() < 1e-15);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_effective_principal() {
        let input = MortgageInput {
            principal: 300_000.0,
            down_payment: 60_000.0,
            term_months: 240,
            annual_rate_percent: 9.0,
        };
        assert_eq!(input.effective_principal(), 240_000.0);
        assert_eq!(input.as_loan().principal, 240_000.0);
    }

    #[test]
    fn test_summary_is_tagged() {
        let summary = SummaryResult::Deposit {
            final_value: 110.0,
            profit: 10.0,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["kind"], "deposit");
        assert_eq!(value["profit"], 10.0);
    }
}
