//! Deposits compounded monthly.

use tracing::debug;

use crate::model::{monthly_rate, DepositInput, Money, SummaryResult};

/// Value of `principal` after `term_months` of monthly compounding at `rate`.
///
/// Closed form, so the schedule never has to be materialized for the summary.
pub fn final_value(principal: Money, term_months: u32, rate: f64) -> Money {
    if rate == 0.0 {
        return principal;
    }
    principal * (1.0 + rate).powf(f64::from(term_months))
}

pub fn deposit_summary(input: &DepositInput) -> SummaryResult {
    let rate = monthly_rate(input.annual_rate_percent);
    let final_value = final_value(input.principal, input.term_months, rate);

    debug!(
        principal = input.principal,
        term_months = input.term_months,
        annual_rate_percent = input.annual_rate_percent,
        final_value,
        "computed deposit value"
    );

    SummaryResult::Deposit {
        final_value,
        profit: final_value - input.principal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScheduleEntry;
    use crate::schedule::deposit_schedule;
    use rstest::rstest;

    fn deposit(principal: f64, term_months: u32, annual_rate_percent: f64) -> DepositInput {
        DepositInput {
            principal,
            term_months,
            annual_rate_percent,
        }
    }

    fn last_accumulated(input: &DepositInput) -> f64 {
        match deposit_schedule(input).last() {
            Some(ScheduleEntry::Deposit {
                accumulated_value, ..
            }) => *accumulated_value,
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn test_deposit_summary_happy_path() {
        let SummaryResult::Deposit { final_value, profit } =
            deposit_summary(&deposit(100_000.0, 12, 10.0))
        else {
            panic!("expected deposit summary");
        };

        // (1 + 0.1 / 12)^12 = 1.10471...
        assert!((final_value - 110_471.31).abs() < 0.01, "final value was {final_value}");
        assert_eq!(profit, final_value - 100_000.0);
    }

    #[rstest]
    #[case(100_000.0, 12, 10.0)]
    #[case(2_500.0, 120, 4.75)]
    #[case(1.0, 1, 100.0)]
    fn test_closed_form_matches_schedule(
        #[case] principal: f64,
        #[case] term_months: u32,
        #[case] annual_rate_percent: f64,
    ) {
        let input = deposit(principal, term_months, annual_rate_percent);
        let SummaryResult::Deposit { final_value, .. } = deposit_summary(&input) else {
            panic!("expected deposit summary");
        };
        let iterative = last_accumulated(&input);

        assert!(
            ((final_value - iterative) / final_value).abs() < 1e-9,
            "closed form {final_value} vs schedule {iterative}"
        );
    }

    #[test]
    fn test_zero_rate_deposit() {
        let SummaryResult::Deposit { final_value, profit } =
            deposit_summary(&deposit(750.0, 36, 0.0))
        else {
            panic!("expected deposit summary");
        };

        assert_eq!(final_value, 750.0);
        assert_eq!(profit, 0.0);
    }
}
