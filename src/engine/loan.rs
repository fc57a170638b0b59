use crate::core::inputs::SimulationInputs;
use crate::engine::{ceil_months, MAX_LOAN_TERM_MONTHS};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat stand-in for compound interest over the life of a bank loan.
///
/// The financed principal times this multiplier is the estimated amount the
/// borrower pays back. It is not an amortization formula.
pub const LOAN_PAYOFF_MULTIPLIER: Decimal = dec!(2.8);

/// Informational flag attached to a loan result.
///
/// A flag never stops the computation; every numeric field is still filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanFlag {
    /// The computed term is longer than [`MAX_LOAN_TERM_MONTHS`].
    TermExceedsLimit,
    /// Principal is outstanding but no positive installment was given.
    InstallmentNotSet,
}

impl LoanFlag {
    /// Message shown on printed proposals.
    pub fn proposal_message(self) -> &'static str {
        match self {
            LoanFlag::TermExceedsLimit => "Prazo excede limite bancário.",
            LoanFlag::InstallmentNotSet => "Defina uma parcela.",
        }
    }
}

impl fmt::Display for LoanFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanFlag::TermExceedsLimit => write!(f, "term exceeds limit"),
            LoanFlag::InstallmentNotSet => write!(f, "installment not set"),
        }
    }
}

/// Outcome of the traditional loan ("financiamento") path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Number of monthly installments; 0 when no installment applies.
    pub term_months: u64,
    /// Down payment plus every installment (down payment alone when flagged).
    pub total_cost: Decimal,
    /// `total_cost - credit_value`. Negative when the loan is cheaper than the asset.
    pub interest_paid: Decimal,
    /// `max(0, credit_value - down_payment)`.
    pub financed_principal: Decimal,
    /// `financed_principal * LOAN_PAYOFF_MULTIPLIER`.
    pub estimated_payoff: Decimal,
    pub error_flag: Option<LoanFlag>,
    pub down_payment: Decimal,
    pub installment: Decimal,
}

impl LoanResult {
    /// Run the loan path for the given inputs.
    pub fn compute(inputs: &SimulationInputs) -> Self {
        let down_payment = inputs.down_payment_loan;
        let installment = inputs.target_installment_loan;

        let financed_principal = inputs
            .credit_value
            .saturating_sub(down_payment)
            .max(Decimal::ZERO);
        let estimated_payoff = financed_principal.saturating_mul(LOAN_PAYOFF_MULTIPLIER);

        let mut term_months = 0;
        let mut error_flag = None;

        if financed_principal > Decimal::ZERO {
            if installment > Decimal::ZERO {
                term_months = ceil_months(estimated_payoff, installment);
                if term_months > MAX_LOAN_TERM_MONTHS {
                    error_flag = Some(LoanFlag::TermExceedsLimit);
                }
            } else {
                error_flag = Some(LoanFlag::InstallmentNotSet);
            }
        }

        let total_cost = if error_flag.is_none() && term_months > 0 {
            installment
                .saturating_mul(Decimal::from(term_months))
                .saturating_add(down_payment)
        } else {
            down_payment
        };
        let interest_paid = total_cost.saturating_sub(inputs.credit_value);

        Self {
            term_months,
            total_cost,
            interest_paid,
            financed_principal,
            estimated_payoff,
            error_flag,
            down_payment,
            installment,
        }
    }
}
