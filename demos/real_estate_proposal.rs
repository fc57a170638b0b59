//! Printable proposal example.
//!
//! Builds a real-estate simulation with a custom credit value and prints the
//! proposal document a planner would hand to a client.

use credit_planner::prelude::*;
use rust_decimal_macros::dec;

fn main() {
    let inputs = SimulationInputs::for_asset(AssetType::RealEstate)
        .with_credit_value(dec!(350_000))
        .with_target_installment_loan(dec!(4_200))
        .with_target_installment_credit_letter(dec!(2_300));

    let result = SimulationEngine::simulate(&inputs);
    let proposal = Proposal::issued_today(AssetType::RealEstate, inputs, result);

    print!("{}", proposal);
}
