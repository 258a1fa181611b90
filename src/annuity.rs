//! Fixed-payment (annuity) loans and mortgages.

use tracing::{debug, trace};

use crate::model::{monthly_rate, LoanInput, Money, MortgageInput, SummaryResult};

/// Calculates the fixed monthly payment that fully amortizes `principal`.
///
/// The annuity formula is: PMT = P * r / [1 – (1 + r)^-n], the same as
/// P * [r(1 + r)^n] / [(1 + r)^n – 1] without the overflow of (1 + r)^n.
/// The denominator is taken as `-expm1(-n * ln_1p(r))` so tiny rates do not
/// cancel to zero.
///
/// A zero rate has no interest to spread, so the payment is simply `P / n`.
///
/// # Arguments
///
/// * `principal` - The financed amount.
/// * `term_months` - The number of payments, at least one.
/// * `rate` - The monthly rate as a decimal (not percentage).
pub fn periodic_payment(principal: Money, term_months: u32, rate: f64) -> Money {
    let n = f64::from(term_months);
    if rate == 0.0 {
        trace!(principal, term_months, "zero rate, spreading principal evenly");
        return principal / n;
    }

    let discounted = -(-n * rate.ln_1p()).exp_m1();
    if discounted == 0.0 {
        trace!(
            principal,
            term_months,
            rate,
            "rate below precision, spreading principal evenly"
        );
        return principal / n;
    }
    principal * rate / discounted
}

/// Payment, total paid and overpay for a fixed-rate loan.
pub fn loan_summary(input: &LoanInput) -> SummaryResult {
    let rate = monthly_rate(input.annual_rate_percent);
    let payment = periodic_payment(input.principal, input.term_months, rate);
    let total_paid = payment * f64::from(input.term_months);
    let total_interest = total_paid - input.principal;

    debug!(
        principal = input.principal,
        term_months = input.term_months,
        annual_rate_percent = input.annual_rate_percent,
        payment,
        "computed annuity payment"
    );

    SummaryResult::Installment {
        periodic_payment: payment,
        total_paid,
        total_interest,
    }
}

/// Same as [`loan_summary`] on the price minus the down payment.
pub fn mortgage_summary(input: &MortgageInput) -> SummaryResult {
    loan_summary(&input.as_loan())
}
