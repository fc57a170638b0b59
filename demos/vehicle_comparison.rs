//! Vehicle comparison example.
//!
//! Runs the default vehicle scenario, then shows how the comparison shifts
//! when the buyer raises the loan installment or the credit-letter bid.

use credit_planner::prelude::*;
use credit_planner::report::format::{format_brl, format_percent};
use rust_decimal_macros::dec;

fn print_summary(label: &str, result: &SimulationResult) {
    println!("━━━ {} ━━━\n", label);
    println!(
        "  Loan:           {:>4} months   {:>16}",
        result.loan.term_months,
        format_brl(result.loan.total_cost)
    );
    if let Some(flag) = result.loan.error_flag {
        println!("                  [{}]", flag);
    }
    println!(
        "  Credit letter:  {:>4} months   {:>16}",
        result.credit_letter.term_months,
        format_brl(result.credit_letter.total_cost)
    );
    println!(
        "  Savings:                       {:>16}  ({})",
        format_brl(result.savings),
        format_percent(result.savings_percent)
    );
    println!();
}

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  credit-planner: Vehicle Comparison Example   ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // --- Scenario 1: defaults ---
    let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
    println!("Credit value:    {}", format_brl(inputs.credit_value));
    println!("Down payment:    {}", format_brl(inputs.down_payment_loan));
    println!("Contribution:    {}\n", format_brl(inputs.credit_letter_contribution));

    print_summary("Scenario 1: Vehicle defaults", &SimulationEngine::simulate(&inputs));

    // --- Scenario 2: larger loan installment ---
    let faster = inputs.with_target_installment_loan(dec!(3_000));
    print_summary(
        "Scenario 2: Loan installment R$ 3.000",
        &SimulationEngine::simulate(&faster),
    );

    // --- Scenario 3: higher bid ---
    let bigger_bid = inputs.with_credit_letter_contribution(dec!(30_000));
    print_summary(
        "Scenario 3: Credit-letter bid R$ 30.000",
        &SimulationEngine::simulate(&bigger_bid),
    );

    // --- Scenario 4: installment too low for the bank ---
    let too_low = inputs.with_target_installment_loan(dec!(150));
    print_summary(
        "Scenario 4: Loan installment R$ 150",
        &SimulationEngine::simulate(&too_low),
    );
}
