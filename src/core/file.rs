use crate::core::asset::AssetType;
use crate::core::inputs::SimulationInputs;
use crate::error::PlannerError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// JSON schema for a simulation input file.
///
/// Amounts are strings so no precision is lost on the way in. Every field is
/// optional: missing values fall back to the asset defaults.
///
/// ```json
/// {
///   "asset": "real_estate",
///   "credit_value": "250000",
///   "target_installment_loan": "3000"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationFile {
    #[serde(default)]
    pub asset: AssetType,
    pub credit_value: Option<String>,
    pub down_payment_loan: Option<String>,
    pub target_installment_loan: Option<String>,
    pub credit_letter_contribution: Option<String>,
    pub target_installment_credit_letter: Option<String>,
    pub fixed_admin_rate_percent: Option<String>,
}

/// Parse a user-supplied amount, naming the field on failure.
pub fn parse_amount(field: &str, value: &str) -> Result<Decimal, PlannerError> {
    let cleaned: String = value.trim().chars().filter(|c| *c != '_').collect();
    Decimal::from_str(&cleaned).map_err(|_| PlannerError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Values given alongside an input file, typically from the command line.
///
/// Each set field wins over the file's value for the same field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub asset: Option<AssetType>,
    pub credit_value: Option<Decimal>,
    pub down_payment_loan: Option<Decimal>,
    pub target_installment_loan: Option<Decimal>,
    pub credit_letter_contribution: Option<Decimal>,
    pub target_installment_credit_letter: Option<Decimal>,
    pub fixed_admin_rate_percent: Option<Decimal>,
}

fn pick(
    field: &str,
    file_value: Option<&String>,
    override_value: Option<Decimal>,
) -> Result<Option<Decimal>, PlannerError> {
    match (override_value, file_value) {
        (Some(value), _) => Ok(Some(value)),
        (None, Some(raw)) => parse_amount(field, raw).map(Some),
        (None, None) => Ok(None),
    }
}

fn apply(
    inputs: SimulationInputs,
    value: Option<Decimal>,
    set: fn(SimulationInputs, Decimal) -> SimulationInputs,
) -> SimulationInputs {
    match value {
        Some(value) => set(inputs, value),
        None => inputs,
    }
}

impl SimulationFile {
    /// Resolve the file into concrete inputs.
    ///
    /// Starts from the asset defaults; a given `credit_value` re-derives the
    /// down payment and contribution before any explicit value is applied.
    pub fn resolve(&self) -> Result<(AssetType, SimulationInputs), PlannerError> {
        self.resolve_with(&InputOverrides::default())
    }

    /// Resolve the file with `overrides` taking precedence field by field.
    ///
    /// File and override values are merged first and applied in one pass, so
    /// an overriding credit value never discards an explicit down payment or
    /// contribution from the file.
    pub fn resolve_with(
        &self,
        overrides: &InputOverrides,
    ) -> Result<(AssetType, SimulationInputs), PlannerError> {
        let asset = overrides.asset.unwrap_or(self.asset);
        let credit_value = pick(
            "credit_value",
            self.credit_value.as_ref(),
            overrides.credit_value,
        )?;
        let down_payment_loan = pick(
            "down_payment_loan",
            self.down_payment_loan.as_ref(),
            overrides.down_payment_loan,
        )?;
        let target_installment_loan = pick(
            "target_installment_loan",
            self.target_installment_loan.as_ref(),
            overrides.target_installment_loan,
        )?;
        let credit_letter_contribution = pick(
            "credit_letter_contribution",
            self.credit_letter_contribution.as_ref(),
            overrides.credit_letter_contribution,
        )?;
        let target_installment_credit_letter = pick(
            "target_installment_credit_letter",
            self.target_installment_credit_letter.as_ref(),
            overrides.target_installment_credit_letter,
        )?;
        let fixed_admin_rate_percent = pick(
            "fixed_admin_rate_percent",
            self.fixed_admin_rate_percent.as_ref(),
            overrides.fixed_admin_rate_percent,
        )?;

        let mut inputs = SimulationInputs::for_asset(asset);
        inputs = apply(inputs, credit_value, SimulationInputs::with_credit_value);
        inputs = apply(inputs, down_payment_loan, SimulationInputs::with_down_payment_loan);
        inputs = apply(
            inputs,
            target_installment_loan,
            SimulationInputs::with_target_installment_loan,
        );
        inputs = apply(
            inputs,
            credit_letter_contribution,
            SimulationInputs::with_credit_letter_contribution,
        );
        inputs = apply(
            inputs,
            target_installment_credit_letter,
            SimulationInputs::with_target_installment_credit_letter,
        );
        inputs = apply(
            inputs,
            fixed_admin_rate_percent,
            SimulationInputs::with_fixed_admin_rate_percent,
        );
        Ok((asset, inputs))
    }

    pub fn from_json_str(json: &str) -> Result<Self, PlannerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
