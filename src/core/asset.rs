use crate::error::PlannerError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed administrative markup of the credit-letter path, in percent.
pub const DEFAULT_ADMIN_RATE_PERCENT: Decimal = dec!(26);

/// Share of the credit value pre-filled as the loan down payment.
pub const DEFAULT_DOWN_PAYMENT_RATIO: Decimal = dec!(0.4);

/// Share of the credit value pre-filled as the credit-letter contribution.
pub const DEFAULT_CONTRIBUTION_RATIO: Decimal = dec!(0.3);

/// The kind of asset being acquired.
///
/// Switching asset type resets every input to the profile defaults of the
/// new type (see [`AssetProfile`]).
///
/// # Examples
///
/// ```
/// use credit_planner::core::asset::AssetType;
///
/// let asset: AssetType = "imovel".parse().unwrap();
/// assert_eq!(asset, AssetType::RealEstate);
/// assert_eq!(asset.to_string(), "real-estate");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    #[default]
    Vehicle,
    RealEstate,
}

impl AssetType {
    pub const ALL: [AssetType; 2] = [AssetType::Vehicle, AssetType::RealEstate];

    /// Default inputs applied whenever this asset type is selected.
    pub fn profile(self) -> AssetProfile {
        match self {
            AssetType::Vehicle => AssetProfile {
                credit_value: dec!(50_000),
                target_installment_loan: dec!(1_850),
                target_installment_credit_letter: dec!(1_000),
                fixed_admin_rate_percent: DEFAULT_ADMIN_RATE_PERCENT,
            },
            AssetType::RealEstate => AssetProfile {
                credit_value: dec!(200_000),
                target_installment_loan: dec!(2_500),
                target_installment_credit_letter: dec!(1_500),
                fixed_admin_rate_percent: DEFAULT_ADMIN_RATE_PERCENT,
            },
        }
    }

    /// Label used on printed proposals.
    pub fn label(self) -> &'static str {
        match self {
            AssetType::Vehicle => "Veículo",
            AssetType::RealEstate => "Imóvel",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Vehicle => write!(f, "vehicle"),
            AssetType::RealEstate => write!(f, "real-estate"),
        }
    }
}

impl FromStr for AssetType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vehicle" | "veiculo" | "car" => Ok(AssetType::Vehicle),
            "real-estate" | "real_estate" | "imovel" | "property" => Ok(AssetType::RealEstate),
            _ => Err(PlannerError::UnknownAssetType(s.to_string())),
        }
    }
}

/// Per-asset default values.
///
/// The down payment and contribution are not stored here: they are always
/// derived from the credit value through [`DEFAULT_DOWN_PAYMENT_RATIO`] and
/// [`DEFAULT_CONTRIBUTION_RATIO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub credit_value: Decimal,
    pub target_installment_loan: Decimal,
    pub target_installment_credit_letter: Decimal,
    pub fixed_admin_rate_percent: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_profile() {
        let p = AssetType::Vehicle.profile();
        assert_eq!(p.credit_value, dec!(50000));
        assert_eq!(p.target_installment_loan, dec!(1850));
        assert_eq!(p.target_installment_credit_letter, dec!(1000));
        assert_eq!(p.fixed_admin_rate_percent, dec!(26));
    }

    #[test]
    fn test_real_estate_profile() {
        let p = AssetType::RealEstate.profile();
        assert_eq!(p.credit_value, dec!(200000));
        assert_eq!(p.target_installment_loan, dec!(2500));
        assert_eq!(p.target_installment_credit_letter, dec!(1500));
        assert_eq!(p.fixed_admin_rate_percent, dec!(26));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("vehicle".parse::<AssetType>().unwrap(), AssetType::Vehicle);
        assert_eq!("Veiculo".parse::<AssetType>().unwrap(), AssetType::Vehicle);
        assert_eq!(
            "real_estate".parse::<AssetType>().unwrap(),
            AssetType::RealEstate
        );
        assert_eq!(
            " property ".parse::<AssetType>().unwrap(),
            AssetType::RealEstate
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "boat".parse::<AssetType>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownAssetType(ref s) if s == "boat"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for asset in AssetType::ALL {
            assert_eq!(asset.to_string().parse::<AssetType>().unwrap(), asset);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&AssetType::RealEstate).unwrap(),
            "\"real_estate\""
        );
        let parsed: AssetType = serde_json::from_str("\"vehicle\"").unwrap();
        assert_eq!(parsed, AssetType::Vehicle);
    }
}
