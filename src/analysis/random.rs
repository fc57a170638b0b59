//! Random input generation for benchmarks and exploratory runs.
//!
//! Generates plausible input sets scattered around each asset profile.

use crate::core::asset::AssetType;
use crate::core::inputs::SimulationInputs;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for generating random simulation inputs.
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Number of input sets to generate.
    pub count: usize,
    /// Asset types to draw from.
    pub assets: Vec<AssetType>,
    /// Credit value is drawn from `profile * [min_scale, max_scale)`.
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            count: 10,
            assets: AssetType::ALL.to_vec(),
            min_scale: 0.5,
            max_scale: 2.0,
        }
    }
}

/// A generated input set together with the asset type it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampledInputs {
    pub asset: AssetType,
    pub inputs: SimulationInputs,
}

fn scaled(rng: &mut impl Rng, base: Decimal, min: f64, max: f64) -> Decimal {
    let factor = if min < max { rng.gen_range(min..max) } else { min };
    Decimal::from_f64_retain(factor)
        .map(|f| (base * f).round_dp(2))
        .unwrap_or(base)
}

/// Generate random input sets.
///
/// Credit value is scaled from the asset profile, then down payment and
/// contribution are drawn as fractions of it and installments scaled around
/// the profile defaults.
pub fn generate_random_inputs(config: &SamplingConfig) -> Vec<SampledInputs> {
    let mut rng = rand::thread_rng();
    if config.assets.is_empty() {
        return Vec::new();
    }

    (0..config.count)
        .map(|_| {
            let asset = config.assets[rng.gen_range(0..config.assets.len())];
            let profile = asset.profile();

            let credit_value = scaled(
                &mut rng,
                profile.credit_value,
                config.min_scale,
                config.max_scale,
            );
            let inputs = SimulationInputs::for_asset(asset)
                .with_credit_value(credit_value)
                .with_down_payment_loan(scaled(&mut rng, credit_value, 0.0, 0.6))
                .with_credit_letter_contribution(scaled(&mut rng, credit_value, 0.0, 0.5))
                .with_target_installment_loan(scaled(
                    &mut rng,
                    profile.target_installment_loan,
                    0.5,
                    2.0,
                ))
                .with_target_installment_credit_letter(scaled(
                    &mut rng,
                    profile.target_installment_credit_letter,
                    0.5,
                    2.0,
                ));

            SampledInputs { asset, inputs }
        })
        .collect()
}
