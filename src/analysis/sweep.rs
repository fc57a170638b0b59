use crate::core::inputs::SimulationInputs;
use crate::engine::loan::LoanFlag;
use crate::engine::simulation::SimulationEngine;
use crate::error::PlannerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on the number of points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Which path's target installment a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepPath {
    Loan,
    CreditLetter,
}

impl fmt::Display for SweepPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepPath::Loan => write!(f, "loan"),
            SweepPath::CreditLetter => write!(f, "credit-letter"),
        }
    }
}

impl FromStr for SweepPath {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loan" | "financiamento" => Ok(SweepPath::Loan),
            "credit-letter" | "credit_letter" | "consorcio" => Ok(SweepPath::CreditLetter),
            _ => Err(PlannerError::UnknownSweepPath(s.to_string())),
        }
    }
}

/// One row of an installment sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub installment: Decimal,
    pub term_months: u64,
    pub total_cost: Decimal,
    /// Savings of the full comparison at this installment.
    pub savings: Decimal,
    /// Loan flag, only ever set on loan sweeps.
    pub flag: Option<LoanFlag>,
}

/// Re-run the simulation with one path's installment stepped from `from` to `to`.
///
/// Every other input stays fixed. Each point is an independent simulation,
/// so the sweep shows how term and total cost respond to the monthly payment.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidSweep`] when `step` is not positive, when
/// `from > to`, or when the range would produce more than
/// [`MAX_SWEEP_POINTS`] points.
pub fn installment_sweep(
    inputs: &SimulationInputs,
    path: SweepPath,
    from: Decimal,
    to: Decimal,
    step: Decimal,
) -> Result<Vec<SweepPoint>, PlannerError> {
    let invalid = |reason: &str| PlannerError::InvalidSweep {
        reason: reason.to_string(),
        from,
        to,
        step,
    };

    if step <= Decimal::ZERO {
        return Err(invalid("step must be positive"));
    }
    if from > to {
        return Err(invalid("range start is after range end"));
    }
    let span = to
        .checked_sub(from)
        .and_then(|width| width.checked_div(step))
        .ok_or_else(|| invalid("range overflows"))?;
    if span >= Decimal::from(MAX_SWEEP_POINTS) {
        return Err(invalid("too many points"));
    }

    let mut points = Vec::new();
    let mut installment = from;
    while installment <= to {
        let scenario = match path {
            SweepPath::Loan => inputs.with_target_installment_loan(installment),
            SweepPath::CreditLetter => inputs.with_target_installment_credit_letter(installment),
        };
        let result = SimulationEngine::simulate(&scenario);

        points.push(match path {
            SweepPath::Loan => SweepPoint {
                installment,
                term_months: result.loan.term_months,
                total_cost: result.loan.total_cost,
                savings: result.savings,
                flag: result.loan.error_flag,
            },
            SweepPath::CreditLetter => SweepPoint {
                installment,
                term_months: result.credit_letter.term_months,
                total_cost: result.credit_letter.total_cost,
                savings: result.savings,
                flag: None,
            },
        });

        installment = match installment.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::asset::AssetType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_sweep() {
        let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
        let points =
            installment_sweep(&inputs, SweepPath::Loan, dec!(1000), dec!(3000), dec!(500)).unwrap();

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].installment, dec!(1000));
        assert_eq!(points[0].term_months, 84);
        assert_eq!(points[4].installment, dec!(3000));
        assert_eq!(points[4].term_months, 28);
        for pair in points.windows(2) {
            assert!(pair[1].term_months <= pair[0].term_months);
        }
    }

    #[test]
    fn test_loan_sweep_from_zero_flags_first_point() {
        let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
        let points =
            installment_sweep(&inputs, SweepPath::Loan, dec!(0), dec!(100), dec!(100)).unwrap();
        assert_eq!(points[0].flag, Some(LoanFlag::InstallmentNotSet));
        // 84,000 / 100 = 840 months
        assert_eq!(points[1].flag, Some(LoanFlag::TermExceedsLimit));
    }

    #[test]
    fn test_credit_letter_sweep() {
        let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
        let points = installment_sweep(
            &inputs,
            SweepPath::CreditLetter,
            dec!(1000),
            dec!(2000),
            dec!(1000),
        )
        .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].term_months, 48);
        assert_eq!(points[1].term_months, 24);
        assert!(points.iter().all(|p| p.flag.is_none()));
    }

    #[test]
    fn test_single_point_sweep() {
        let inputs = SimulationInputs::default();
        let points =
            installment_sweep(&inputs, SweepPath::Loan, dec!(1850), dec!(1850), dec!(1)).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total_cost, dec!(105100));
    }

    #[test]
    fn test_invalid_step() {
        let inputs = SimulationInputs::default();
        let err = installment_sweep(&inputs, SweepPath::Loan, dec!(1), dec!(2), dec!(0)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidSweep { .. }));
    }

    #[test]
    fn test_inverted_range() {
        let inputs = SimulationInputs::default();
        let err =
            installment_sweep(&inputs, SweepPath::Loan, dec!(2000), dec!(1000), dec!(1)).unwrap_err();
        assert!(err.to_string().contains("range start is after range end"));
    }

    #[test]
    fn test_too_many_points() {
        let inputs = SimulationInputs::default();
        let err =
            installment_sweep(&inputs, SweepPath::Loan, dec!(0), dec!(1000000), dec!(1)).unwrap_err();
        assert!(err.to_string().contains("too many points"));
    }

    #[test]
    fn test_path_parse() {
        assert_eq!("loan".parse::<SweepPath>().unwrap(), SweepPath::Loan);
        assert_eq!(
            "credit-letter".parse::<SweepPath>().unwrap(),
            SweepPath::CreditLetter
        );
        let err = "bond".parse::<SweepPath>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownSweepPath(ref s) if s == "bond"));
    }
}
