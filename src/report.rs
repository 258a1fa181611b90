//! Rounding for display.
//!
//! The engine returns full `f64` precision; everything shown to a user goes
//! through here and is rounded to cents.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{CalculationResult, CalculatorKind, Money, ScheduleEntry, SummaryResult};

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// Values outside `Decimal`'s range (or non-finite ones) come back as zero.
pub fn to_cents(value: Money) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or(dec!(0))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A labelled, display-ready figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub rows: Vec<SummaryRow>,
}

impl From<&SummaryResult> for SummaryView {
    fn from(summary: &SummaryResult) -> Self {
        let rows = match summary {
            SummaryResult::Installment {
                periodic_payment,
                total_paid,
                total_interest,
            } => vec![
                ("Monthly payment", *periodic_payment),
                ("Total paid", *total_paid),
                ("Overpay", *total_interest),
            ],
            SummaryResult::Deposit {
                final_value,
                profit,
            } => vec![("Final value", *final_value), ("Profit", *profit)],
        };

        SummaryView {
            rows: rows
                .into_iter()
                .map(|(label, amount)| SummaryRow {
                    label: label.to_string(),
                    amount: to_cents(amount),
                })
                .collect(),
        }
    }
}

impl fmt::Display for SummaryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|row| row.label.len()).max().unwrap_or(0);
        for row in &self.rows {
            writeln!(f, "{:<width$}  {:>16.2}", row.label, row.amount)?;
        }
        Ok(())
    }
}

/// A schedule row rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleRow {
    Installment {
        period: u32,
        remaining_principal: Decimal,
        interest_portion: Decimal,
        payment_amount: Decimal,
    },
    Deposit {
        period: u32,
        accumulated_value: Decimal,
    },
}

impl From<&ScheduleEntry> for ScheduleRow {
    fn from(entry: &ScheduleEntry) -> Self {
        match entry {
            ScheduleEntry::Installment {
                period,
                remaining_principal,
                interest_portion,
                payment_amount,
            } => ScheduleRow::Installment {
                period: *period,
                remaining_principal: to_cents(*remaining_principal),
                interest_portion: to_cents(*interest_portion),
                payment_amount: to_cents(*payment_amount),
            },
            ScheduleEntry::Deposit {
                period,
                accumulated_value,
            } => ScheduleRow::Deposit {
                period: *period,
                accumulated_value: to_cents(*accumulated_value),
            },
        }
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleRow::Installment {
                period,
                remaining_principal,
                interest_portion,
                payment_amount,
            } => write!(
                f,
                "{period:>6}  {remaining_principal:>16.2}  {interest_portion:>14.2}  {payment_amount:>14.2}"
            ),
            ScheduleRow::Deposit {
                period,
                accumulated_value,
            } => write!(f, "{period:>6}  {accumulated_value:>16.2}"),
        }
    }
}

/// Column titles lined up with [`ScheduleRow`]'s `Display` output.
pub fn schedule_header(kind: CalculatorKind) -> String {
    match kind {
        CalculatorKind::Loan | CalculatorKind::Mortgage => format!(
            "{:>6}  {:>16}  {:>14}  {:>14}",
            "period", "remaining", "interest", "payment"
        ),
        CalculatorKind::Deposit => format!("{:>6}  {:>16}", "period", "accumulated"),
    }
}

/// Everything a renderer needs for one calculation, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub summary: SummaryView,
    pub schedule: Vec<ScheduleRow>,
}

impl From<&CalculationResult> for ReportView {
    fn from(result: &CalculationResult) -> Self {
        ReportView {
            summary: SummaryView::from(&result.summary),
            schedule: result.schedule.iter().map(ScheduleRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_cents_rounds_half_away_from_zero() {
        assert_eq!(to_cents(88_848.787_887), dec!(88848.79));
        assert_eq!(to_cents(0.125), dec!(0.13));
        assert_eq!(to_cents(-0.125), dec!(-0.13));
        assert_eq!(to_cents(f64::NAN), dec!(0));
    }

    #[test]
    fn test_installment_summary_rows() {
        let view = SummaryView::from(&SummaryResult::Installment {
            periodic_payment: 1062.7423,
            total_paid: 12752.9076,
            total_interest: 752.9076,
        });

        let labels: Vec<_> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Monthly payment", "Total paid", "Overpay"]);
        assert_eq!(view.rows[0].amount, dec!(1062.74));
        assert_eq!(view.rows[2].amount, dec!(752.91));
    }

    #[test]
    fn test_summary_display() {
        let view = SummaryView::from(&SummaryResult::Deposit {
            final_value: 110_471.306,
            profit: 10_471.306,
        });
        let text = view.to_string();

        assert!(text.contains("Final value"));
        assert!(text.contains("110471.31"));
        assert!(text.contains("10471.31"));
    }

    #[test]
    fn test_schedule_header_matches_row_width() {
        let header = schedule_header(CalculatorKind::Loan);
        let row = ScheduleRow::from(&ScheduleEntry::Installment {
            period: 1,
            remaining_principal: 900.0,
            interest_portion: 10.0,
            payment_amount: 110.0,
        });

        assert!(header.contains("period"));
        assert!(header.contains("payment"));
        assert_eq!(header.len(), row.to_string().len());
        assert!(schedule_header(CalculatorKind::Deposit).contains("accumulated"));
    }

    #[test]
    fn test_schedule_row_rounding() {
        let row = ScheduleRow::from(&ScheduleEntry::Installment {
            period: 3,
            remaining_principal: 1e-12,
            interest_portion: 9.999,
            payment_amount: 100.0,
        });
        assert_eq!(
            row,
            ScheduleRow::Installment {
                period: 3,
                remaining_principal: dec!(0.00),
                interest_portion: dec!(10.00),
                payment_amount: dec!(100.00),
            }
        );
    }
}
