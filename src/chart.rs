//! Reshapes schedules into a renderer-agnostic series format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{CalculatorKind, ScheduleEntry};

pub const REMAINING_PRINCIPAL: &str = "Remaining principal";
pub const INTEREST: &str = "Interest";
pub const PAYMENT: &str = "Payment";
pub const ACCUMULATED_SAVINGS: &str = "Accumulated savings";

/// How a renderer should draw one named stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLine {
    pub label: String,
    /// CSS hex colour.
    pub colour: String,
}

impl ChartLine {
    fn new(label: &str, colour: &str) -> Self {
        Self {
            label: label.to_string(),
            colour: colour.to_string(),
        }
    }
}

/// Values of every exposed stream at one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub period: u32,
    pub series_values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub lines: Vec<ChartLine>,
    pub points: Vec<ChartPoint>,
}

/// Default lines drawn for each calculator.
pub fn default_lines(kind: CalculatorKind) -> Vec<ChartLine> {
    match kind {
        CalculatorKind::Loan | CalculatorKind::Mortgage => vec![
            ChartLine::new(REMAINING_PRINCIPAL, "#10B981"),
            ChartLine::new(INTEREST, "#FACC15"),
            ChartLine::new(PAYMENT, "#3B82F6"),
        ],
        CalculatorKind::Deposit => vec![ChartLine::new(ACCUMULATED_SAVINGS, "#10B981")],
    }
}

fn values_of(entry: &ScheduleEntry) -> Vec<(&'static str, f64)> {
    match entry {
        ScheduleEntry::Installment {
            remaining_principal,
            interest_portion,
            payment_amount,
            ..
        } => vec![
            (REMAINING_PRINCIPAL, *remaining_principal),
            (INTEREST, *interest_portion),
            (PAYMENT, *payment_amount),
        ],
        ScheduleEntry::Deposit {
            accumulated_value, ..
        } => vec![(ACCUMULATED_SAVINGS, *accumulated_value)],
    }
}

/// Builds the series for `schedule` with the default lines of `kind`.
pub fn series_for(kind: CalculatorKind, schedule: &[ScheduleEntry]) -> ChartSeries {
    to_series(schedule, default_lines(kind))
}

/// Builds a series exposing only `lines`. Labels with no matching value in an
/// entry are left out of that point.
pub fn to_series(schedule: &[ScheduleEntry], lines: Vec<ChartLine>) -> ChartSeries {
    let points = schedule
        .iter()
        .map(|entry| ChartPoint {
            period: entry.period(),
            series_values: values_of(entry)
                .into_iter()
                .filter(|(label, _)| lines.iter().any(|line| line.label == *label))
                .map(|(label, value)| (label.to_string(), value))
                .collect(),
        })
        .collect();

    ChartSeries { lines, points }
}

impl ChartSeries {
    /// Keeps only the streams named in `labels`, in the order given.
    pub fn select(&self, labels: &[&str]) -> ChartSeries {
        let lines = labels
            .iter()
            .filter_map(|label| self.lines.iter().find(|line| line.label == *label))
            .cloned()
            .collect();
        let points = self
            .points
            .iter()
            .map(|point| ChartPoint {
                period: point.period,
                series_values: point
                    .series_values
                    .iter()
                    .filter(|(label, _)| labels.contains(&label.as_str()))
                    .map(|(label, value)| (label.clone(), *value))
                    .collect(),
            })
            .collect();

        ChartSeries { lines, points }
    }

    /// Values of one stream in period order.
    pub fn values(&self, label: &str) -> Vec<f64> {
        self.points
            .iter()
            .filter_map(|point| point.series_values.get(label).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installment(period: u32, remaining: f64) -> ScheduleEntry {
        ScheduleEntry::Installment {
            period,
            remaining_principal: remaining,
            interest_portion: 1.5,
            payment_amount: 10.0,
        }
    }

    #[test]
    fn test_loan_series_exposes_three_lines() {
        let schedule = vec![installment(1, 20.0), installment(2, 10.0), installment(3, 0.0)];
        let series = series_for(CalculatorKind::Loan, &schedule);

        let labels: Vec<_> = series.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec![REMAINING_PRINCIPAL, INTEREST, PAYMENT]);
        assert_eq!(
            series.points.iter().map(|p| p.period).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(series.values(REMAINING_PRINCIPAL), vec![20.0, 10.0, 0.0]);
        assert_eq!(series.values(PAYMENT), vec![10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_deposit_series() {
        let schedule = vec![
            ScheduleEntry::Deposit {
                period: 1,
                accumulated_value: 101.0,
            },
            ScheduleEntry::Deposit {
                period: 2,
                accumulated_value: 102.01,
            },
        ];
        let series = series_for(CalculatorKind::Deposit, &schedule);

        assert_eq!(series.lines, vec![ChartLine::new(ACCUMULATED_SAVINGS, "#10B981")]);
        assert_eq!(series.values(ACCUMULATED_SAVINGS), vec![101.0, 102.01]);
        assert!(series.values(INTEREST).is_empty());
    }

    #[test]
    fn test_select_keeps_requested_streams() {
        let schedule = vec![installment(1, 5.0)];
        let series = series_for(CalculatorKind::Mortgage, &schedule).select(&[REMAINING_PRINCIPAL]);

        assert_eq!(series.lines.len(), 1);
        assert_eq!(series.points[0].series_values.len(), 1);
        assert_eq!(series.values(REMAINING_PRINCIPAL), vec![5.0]);
    }

    #[test]
    fn test_empty_schedule() {
        let series = series_for(CalculatorKind::Loan, &[]);
        assert!(series.points.is_empty());
        assert_eq!(series.lines.len(), 3);
    }
}
