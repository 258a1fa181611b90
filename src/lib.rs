//! `savings_calc` is a Rust library for the loan, mortgage and deposit calculators of a
//! personal-finance dashboard.
//!
//! It provides three calculators sharing one engine:
//! - **Loan**: fixed monthly payment (annuity), total paid, overpay and the full
//!   amortization schedule.
//! - **Mortgage**: the same calculation on the property price minus the down payment.
//! - **Deposit**: monthly compound interest, with final value, profit and the
//!   month-by-month accumulated balance.
//!
//! Every function is pure: inputs are plain values, results are returned by value and
//! nothing is kept between calls. Amounts are `f64` at full precision; rounding to cents
//! only happens in [`report`].
//!
//! ## Usage
//!
//! Add `savings_calc` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! savings_calc = "0.1.0"
//! ```
//!
//! Then validate raw form input and run the matching calculator:
//!
//! ```rust
//! use savings_calc::{calculate_loan, RawLoanForm, SummaryResult};
//! use savings_calc::report::SummaryView;
//!
//! fn main() {
//!     let form = RawLoanForm {
//!         principal: "1000000".into(),
//!         term_months: "12".into(),
//!         annual_rate_percent: "12".into(),
//!     };
//!
//!     match calculate_loan(&form) {
//!         Ok(result) => {
//!             print!("{}", SummaryView::from(&result.summary));
//!             assert_eq!(result.schedule.len(), 12);
//!             assert!(matches!(result.summary, SummaryResult::Installment { .. }));
//!         }
//!         Err(e) => {
//!             eprintln!("Error calculating loan: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod annuity;
pub mod chart;
pub mod deposit;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod schedule;
pub mod validation;

pub use chart::{series_for, ChartLine, ChartPoint, ChartSeries};
pub use engine::{
    calculate_deposit, calculate_loan, calculate_mortgage, compute, compute_deposit,
    compute_loan, compute_mortgage, CalculationRequest,
};
pub use error::{Field, ValidationError, ValidationResult};
pub use model::{
    CalculationResult, CalculatorKind, DepositInput, LoanInput, Money, MortgageInput,
    ScheduleEntry, SummaryResult,
};
pub use validation::{RawLoanForm, RawMortgageForm, RawValue};
