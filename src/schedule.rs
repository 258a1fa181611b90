//! Period-by-period schedules.
//!
//! Both schedules are finite iterators over the period index. They own all of
//! their state, so cloning one (or calling the constructor again with the same
//! arguments) replays the exact same sequence.

use crate::annuity::periodic_payment;
use crate::model::{monthly_rate, DepositInput, LoanInput, Money, MortgageInput, ScheduleEntry};

/// Amortization schedule of a fixed-payment loan.
#[derive(Debug, Clone)]
pub struct InstallmentSchedule {
    rate: f64,
    payment: Money,
    term_months: u32,
    period: u32,
    balance: Money,
}

impl InstallmentSchedule {
    /// Builds the schedule for an already computed `payment`.
    ///
    /// # Arguments
    ///
    /// * `principal` - The financed amount (the balance before period 1).
    /// * `term_months` - The number of periods to emit.
    /// * `rate` - The monthly rate as a decimal (not percentage).
    /// * `payment` - The fixed payment made every period.
    pub fn new(principal: Money, term_months: u32, rate: f64, payment: Money) -> Self {
        Self {
            rate,
            payment,
            term_months,
            period: 0,
            balance: principal,
        }
    }

    pub fn for_loan(input: &LoanInput) -> Self {
        let rate = monthly_rate(input.annual_rate_percent);
        let payment = periodic_payment(input.principal, input.term_months, rate);
        Self::new(input.principal, input.term_months, rate, payment)
    }

    pub fn for_mortgage(input: &MortgageInput) -> Self {
        Self::for_loan(&input.as_loan())
    }
}

impl Iterator for InstallmentSchedule {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.period >= self.term_months {
            return None;
        }
        self.period += 1;

        let interest = self.balance * self.rate;
        let amortization = self.payment - interest;
        // Clamped every period; the last period absorbs whatever rounding is left.
        self.balance = if self.period == self.term_months {
            0.0
        } else {
            (self.balance - amortization).max(0.0)
        };

        Some(ScheduleEntry::Installment {
            period: self.period,
            remaining_principal: self.balance,
            interest_portion: interest,
            payment_amount: self.payment,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.term_months - self.period) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for InstallmentSchedule {}

/// Growth of a deposit compounded monthly.
#[derive(Debug, Clone)]
pub struct DepositSchedule {
    rate: f64,
    term_months: u32,
    period: u32,
    total: Money,
}

impl DepositSchedule {
    pub fn new(principal: Money, term_months: u32, rate: f64) -> Self {
        Self {
            rate,
            term_months,
            period: 0,
            total: principal,
        }
    }

    pub fn for_deposit(input: &DepositInput) -> Self {
        Self::new(
            input.principal,
            input.term_months,
            monthly_rate(input.annual_rate_percent),
        )
    }
}

impl Iterator for DepositSchedule {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.period >= self.term_months {
            return None;
        }
        self.period += 1;
        self.total *= 1.0 + self.rate;

        Some(ScheduleEntry::Deposit {
            period: self.period,
            accumulated_value: self.total,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.term_months - self.period) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DepositSchedule {}

pub fn loan_schedule(input: &LoanInput) -> Vec<ScheduleEntry> {
    InstallmentSchedule::for_loan(input).collect()
}

pub fn mortgage_schedule(input: &MortgageInput) -> Vec<ScheduleEntry> {
    InstallmentSchedule::for_mortgage(input).collect()
}

pub fn deposit_schedule(input: &DepositInput) -> Vec<ScheduleEntry> {
    DepositSchedule::for_deposit(input).collect()
}
