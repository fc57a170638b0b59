use crate::core::asset::{AssetType, DEFAULT_CONTRIBUTION_RATIO, DEFAULT_DOWN_PAYMENT_RATIO};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six numbers a simulation is computed from.
///
/// Owned by the caller and handed to the engine on every recompute. The
/// engine keeps nothing between calls, so editing one field and simulating
/// again is the whole update cycle.
///
/// # Examples
///
/// ```
/// use credit_planner::core::asset::AssetType;
/// use credit_planner::core::inputs::SimulationInputs;
/// use rust_decimal_macros::dec;
///
/// let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
/// assert_eq!(inputs.credit_value, dec!(50000));
/// assert_eq!(inputs.down_payment_loan, dec!(20000));
/// assert_eq!(inputs.credit_letter_contribution, dec!(15000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Total asset price to be financed or acquired.
    pub credit_value: Decimal,
    /// Upfront payment in the loan path.
    pub down_payment_loan: Decimal,
    /// Desired monthly payment in the loan path.
    pub target_installment_loan: Decimal,
    /// Upfront bid in the credit-letter path.
    pub credit_letter_contribution: Decimal,
    /// Desired monthly payment in the credit-letter path.
    pub target_installment_credit_letter: Decimal,
    /// Administrative markup of the credit-letter path, in percent.
    pub fixed_admin_rate_percent: Decimal,
}

impl SimulationInputs {
    pub fn new(
        credit_value: Decimal,
        down_payment_loan: Decimal,
        target_installment_loan: Decimal,
        credit_letter_contribution: Decimal,
        target_installment_credit_letter: Decimal,
        fixed_admin_rate_percent: Decimal,
    ) -> Self {
        Self {
            credit_value,
            down_payment_loan,
            target_installment_loan,
            credit_letter_contribution,
            target_installment_credit_letter,
            fixed_admin_rate_percent,
        }
    }

    /// Defaults applied when the asset type changes.
    ///
    /// Down payment is 40% and contribution 30% of the profile's credit value.
    pub fn for_asset(asset: AssetType) -> Self {
        let profile = asset.profile();
        Self {
            credit_value: profile.credit_value,
            down_payment_loan: (profile.credit_value * DEFAULT_DOWN_PAYMENT_RATIO).normalize(),
            target_installment_loan: profile.target_installment_loan,
            credit_letter_contribution: (profile.credit_value * DEFAULT_CONTRIBUTION_RATIO)
                .normalize(),
            target_installment_credit_letter: profile.target_installment_credit_letter,
            fixed_admin_rate_percent: profile.fixed_admin_rate_percent,
        }
    }

    /// Change the credit value and re-derive the down payment and contribution.
    ///
    /// Installments and the admin rate are left untouched.
    pub fn with_credit_value(mut self, credit_value: Decimal) -> Self {
        self.credit_value = credit_value;
        self.down_payment_loan = (credit_value * DEFAULT_DOWN_PAYMENT_RATIO).normalize();
        self.credit_letter_contribution = (credit_value * DEFAULT_CONTRIBUTION_RATIO).normalize();
        self
    }

    pub fn with_down_payment_loan(mut self, value: Decimal) -> Self {
        self.down_payment_loan = value;
        self
    }

    pub fn with_target_installment_loan(mut self, value: Decimal) -> Self {
        self.target_installment_loan = value;
        self
    }

    pub fn with_credit_letter_contribution(mut self, value: Decimal) -> Self {
        self.credit_letter_contribution = value;
        self
    }

    pub fn with_target_installment_credit_letter(mut self, value: Decimal) -> Self {
        self.target_installment_credit_letter = value;
        self
    }

    pub fn with_fixed_admin_rate_percent(mut self, value: Decimal) -> Self {
        self.fixed_admin_rate_percent = value;
        self
    }

    /// Advisory messages for inputs outside their expected domain.
    ///
    /// Purely informational: the engine accepts any value and degrades
    /// gracefully, so nothing here blocks a simulation.
    pub fn warnings(&self) -> Vec<String> {
        let fields = [
            ("credit_value", self.credit_value),
            ("down_payment_loan", self.down_payment_loan),
            ("target_installment_loan", self.target_installment_loan),
            ("credit_letter_contribution", self.credit_letter_contribution),
            (
                "target_installment_credit_letter",
                self.target_installment_credit_letter,
            ),
            ("fixed_admin_rate_percent", self.fixed_admin_rate_percent),
        ];
        fields
            .iter()
            .filter(|(_, value)| *value < Decimal::ZERO)
            .map(|(name, value)| format!("{} is negative ({})", name, value))
            .collect()
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self::for_asset(AssetType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_vehicle_defaults() {
        let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
        assert_eq!(inputs.credit_value, dec!(50000));
        assert_eq!(inputs.down_payment_loan, dec!(20000));
        assert_eq!(inputs.target_installment_loan, dec!(1850));
        assert_eq!(inputs.credit_letter_contribution, dec!(15000));
        assert_eq!(inputs.target_installment_credit_letter, dec!(1000));
        assert_eq!(inputs.fixed_admin_rate_percent, dec!(26));
    }

    #[test]
    fn test_real_estate_defaults() {
        let inputs = SimulationInputs::for_asset(AssetType::RealEstate);
        assert_eq!(inputs.credit_value, dec!(200000));
        assert_eq!(inputs.down_payment_loan, dec!(80000));
        assert_eq!(inputs.target_installment_loan, dec!(2500));
        assert_eq!(inputs.credit_letter_contribution, dec!(60000));
        assert_eq!(inputs.target_installment_credit_letter, dec!(1500));
    }

    #[test]
    fn test_default_is_vehicle() {
        assert_eq!(
            SimulationInputs::default(),
            SimulationInputs::for_asset(AssetType::Vehicle)
        );
    }

    #[test]
    fn test_credit_value_change_rederives_ratios() {
        let inputs = SimulationInputs::for_asset(AssetType::Vehicle)
            .with_target_installment_loan(dec!(2000))
            .with_credit_value(dec!(80000));
        assert_eq!(inputs.credit_value, dec!(80000));
        assert_eq!(inputs.down_payment_loan, dec!(32000));
        assert_eq!(inputs.credit_letter_contribution, dec!(24000));
        // Installment edits survive a credit value change
        assert_eq!(inputs.target_installment_loan, dec!(2000));
        assert_eq!(inputs.target_installment_credit_letter, dec!(1000));
    }

    #[test]
    fn test_derived_amounts_serialize_without_trailing_zeros() {
        let json =
            serde_json::to_string(&SimulationInputs::for_asset(AssetType::Vehicle)).unwrap();
        assert!(json.contains(r#""down_payment_loan":"20000""#));
        assert!(json.contains(r#""credit_letter_contribution":"15000""#));

        let inputs = SimulationInputs::default().with_credit_value(dec!(60000));
        assert_eq!(inputs.down_payment_loan.to_string(), "24000");
        assert_eq!(inputs.credit_letter_contribution.to_string(), "18000");
        // Fractional results keep their digits
        let inputs = SimulationInputs::default().with_credit_value(dec!(1001));
        assert_eq!(inputs.down_payment_loan.to_string(), "400.4");
    }

    #[test]
    fn test_builder_setters() {
        let inputs = SimulationInputs::default()
            .with_down_payment_loan(dec!(1))
            .with_credit_letter_contribution(dec!(2))
            .with_target_installment_credit_letter(dec!(3))
            .with_fixed_admin_rate_percent(dec!(4));
        assert_eq!(inputs.down_payment_loan, dec!(1));
        assert_eq!(inputs.credit_letter_contribution, dec!(2));
        assert_eq!(inputs.target_installment_credit_letter, dec!(3));
        assert_eq!(inputs.fixed_admin_rate_percent, dec!(4));
    }

    #[test]
    fn test_warnings_for_negative_fields() {
        assert!(SimulationInputs::default().warnings().is_empty());

        let inputs = SimulationInputs::default()
            .with_down_payment_loan(dec!(-10))
            .with_fixed_admin_rate_percent(dec!(-1));
        let warnings = inputs.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("down_payment_loan"));
        assert!(warnings[1].contains("fixed_admin_rate_percent"));
    }
}
