use crate::core::inputs::SimulationInputs;
use crate::engine::credit_letter::CreditLetterResult;
use crate::engine::loan::LoanResult;
use log::{debug, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Both acquisition paths side by side, plus what one saves over the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub loan: LoanResult,
    pub credit_letter: CreditLetterResult,
    /// `loan.total_cost - credit_letter.total_cost`. Negative when the loan is cheaper.
    pub savings: Decimal,
    /// `savings / loan.total_cost * 100`, or 0 when the loan costs nothing.
    pub savings_percent: Decimal,
}

impl SimulationResult {
    /// Savings percentage as `f64`, for display and charting.
    pub fn savings_percent_f64(&self) -> f64 {
        self.savings_percent.to_f64().unwrap_or(0.0)
    }

    /// Whether the credit-letter path costs less than the loan path.
    pub fn credit_letter_is_cheaper(&self) -> bool {
        self.savings > Decimal::ZERO
    }
}

/// The comparison engine.
///
/// Stateless: every call recomputes the full result from its inputs, so it
/// can be shared freely and called from anywhere.
///
/// # Examples
///
/// ```
/// use credit_planner::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
/// let result = SimulationEngine::simulate(&inputs);
///
/// assert_eq!(result.loan.term_months, 46);
/// assert_eq!(result.credit_letter.term_months, 48);
/// assert_eq!(result.savings, dec!(42100));
/// ```
pub struct SimulationEngine;

impl SimulationEngine {
    /// Simulate both paths and compare their total cost.
    pub fn simulate(inputs: &SimulationInputs) -> SimulationResult {
        let loan = LoanResult::compute(inputs);
        let credit_letter = CreditLetterResult::compute(inputs);

        let savings = loan.total_cost.saturating_sub(credit_letter.total_cost);
        let savings_percent = if loan.total_cost > Decimal::ZERO {
            savings
                .checked_div(loan.total_cost)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        if let Some(flag) = loan.error_flag {
            warn!(
                "loan path flagged: {} (term {} months, principal {})",
                flag, loan.term_months, loan.financed_principal
            );
        }
        debug!(
            "simulated credit {}: loan {} months / {}, credit letter {} months / {}, savings {}",
            inputs.credit_value,
            loan.term_months,
            loan.total_cost,
            credit_letter.term_months,
            credit_letter.total_cost,
            savings
        );

        SimulationResult {
            loan,
            credit_letter,
            savings,
            savings_percent,
        }
    }
}

impl std::fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Loan (financiamento) ===")?;
        writeln!(f, "Down Payment:   {}", self.loan.down_payment)?;
        writeln!(f, "Installment:    {}", self.loan.installment)?;
        writeln!(f, "Principal:      {}", self.loan.financed_principal)?;
        writeln!(f, "Term:           {} months", self.loan.term_months)?;
        writeln!(f, "Total Cost:     {}", self.loan.total_cost)?;
        writeln!(f, "Interest Paid:  {}", self.loan.interest_paid)?;
        if let Some(flag) = self.loan.error_flag {
            writeln!(f, "Flag:           {}", flag)?;
        }

        writeln!(f, "\n=== Credit Letter (consórcio) ===")?;
        writeln!(f, "Contribution:   {}", self.credit_letter.contribution)?;
        writeln!(f, "Installment:    {}", self.credit_letter.installment)?;
        writeln!(f, "Base With Fee:  {}", self.credit_letter.base_value_with_fee)?;
        writeln!(f, "Term:           {} months", self.credit_letter.term_months)?;
        writeln!(f, "Financed:       {}", self.credit_letter.financed_balance)?;
        writeln!(f, "Total Cost:     {}", self.credit_letter.total_cost)?;

        writeln!(f, "\n=== Comparison ===")?;
        writeln!(f, "Savings:        {}", self.savings)?;
        writeln!(f, "Savings %:      {:.2}%", self.savings_percent_f64())?;
        Ok(())
    }
}
