use crate::core::inputs::SimulationInputs;
use crate::engine::ceil_months;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of the pooled credit-letter ("consórcio") path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLetterResult {
    /// Number of monthly installments; 0 when no installment applies.
    pub term_months: u64,
    /// `financed_balance + contribution`.
    pub total_cost: Decimal,
    pub contribution: Decimal,
    pub installment: Decimal,
    /// Amount actually paid through installments (`installment * term_months`).
    pub financed_balance: Decimal,
    /// `credit_value * (1 + fixed_admin_rate_percent / 100)`.
    pub base_value_with_fee: Decimal,
    /// `max(0, base_value_with_fee - contribution)`.
    pub remaining_balance: Decimal,
}

impl CreditLetterResult {
    /// Run the credit-letter path for the given inputs.
    pub fn compute(inputs: &SimulationInputs) -> Self {
        let contribution = inputs.credit_letter_contribution;
        let installment = inputs.target_installment_credit_letter;

        let fee_factor = Decimal::ONE.saturating_add(
            inputs
                .fixed_admin_rate_percent
                .checked_div(Decimal::ONE_HUNDRED)
                .unwrap_or(Decimal::ZERO),
        );
        let base_value_with_fee = inputs.credit_value.saturating_mul(fee_factor);
        let remaining_balance = base_value_with_fee
            .saturating_sub(contribution)
            .max(Decimal::ZERO);

        let term_months = if installment > Decimal::ZERO {
            ceil_months(remaining_balance, installment)
        } else {
            0
        };

        let financed_balance = installment.saturating_mul(Decimal::from(term_months));
        let total_cost = financed_balance.saturating_add(contribution);

        Self {
            term_months,
            total_cost,
            contribution,
            installment,
            financed_balance,
            base_value_with_fee,
            remaining_balance,
        }
    }
}
