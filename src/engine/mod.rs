//! The simulation engine: both acquisition paths and their comparison.
//!
//! Everything here is a pure function of [`SimulationInputs`](crate::core::inputs::SimulationInputs).
//! Degenerate inputs never error; they produce zero-term or flagged results.

pub mod credit_letter;
pub mod loan;
pub mod simulation;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Longest loan term a bank will accept, in months.
pub const MAX_LOAN_TERM_MONTHS: u64 = 420;

/// Number of whole months needed to pay `amount` at `installment` per month.
///
/// Any partial month counts as a full one. Saturates at `u64::MAX` when the
/// quotient leaves the representable range. `installment` must be positive.
pub(crate) fn ceil_months(amount: Decimal, installment: Decimal) -> u64 {
    amount
        .checked_div(installment)
        .map(|months| months.ceil())
        .and_then(|months| months.to_u64())
        .unwrap_or(u64::MAX)
}
