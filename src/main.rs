//! credit-planner CLI
//!
//! Compare a bank loan against a credit letter from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Vehicle defaults, plain-text comparison
//! credit-planner simulate
//!
//! # Real estate with a custom credit value, printable proposal
//! credit-planner simulate --asset real-estate --credit-value 320000 --format proposal
//!
//! # Inputs from a JSON file, JSON output
//! credit-planner simulate --input simulation.json --format json
//!
//! # How the loan term responds to the installment
//! credit-planner sweep --path loan --from 1000 --to 3000 --step 250
//!
//! # Random input sets for testing
//! credit-planner generate --count 20
//! ```
//!
//! Set `RUST_LOG=debug` to log every simulation.

use clap::{Args, Parser, Subcommand, ValueEnum};
use credit_planner::analysis::random::{generate_random_inputs, SamplingConfig};
use credit_planner::analysis::sweep::{installment_sweep, SweepPath};
use credit_planner::core::file::{InputOverrides, SimulationFile};
use credit_planner::prelude::*;
use credit_planner::report::format::format_brl;
use log::{info, warn};
use rust_decimal::Decimal;
use std::fs;
use std::process;

#[derive(Parser)]
#[command(
    name = "credit-planner",
    version,
    about = "Compare a bank loan against a pooled credit letter (consórcio)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate both paths and compare their total cost
    Simulate(SimulateArgs),
    /// Print the default inputs for an asset type
    Defaults(DefaultsArgs),
    /// Step one path's installment through a range
    Sweep(SweepArgs),
    /// Generate random input sets (for testing)
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Proposal,
}

/// Inputs shared by `simulate` and `sweep`.
#[derive(Args)]
struct InputArgs {
    /// Asset type: vehicle or real-estate
    #[arg(long)]
    asset: Option<AssetType>,
    /// JSON input file; flags override its values
    #[arg(long)]
    input: Option<String>,
    /// Credit value (re-derives down payment at 40% and contribution at 30%)
    #[arg(long)]
    credit_value: Option<Decimal>,
    /// Loan down payment
    #[arg(long)]
    down_payment: Option<Decimal>,
    /// Target monthly installment on the loan path
    #[arg(long)]
    loan_installment: Option<Decimal>,
    /// Credit-letter contribution (bid)
    #[arg(long)]
    contribution: Option<Decimal>,
    /// Target monthly installment on the credit-letter path
    #[arg(long)]
    credit_letter_installment: Option<Decimal>,
    /// Fixed administrative rate of the credit letter, in percent
    #[arg(long)]
    admin_rate: Option<Decimal>,
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    inputs: InputArgs,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Args)]
struct DefaultsArgs {
    /// Asset type: vehicle or real-estate
    #[arg(long, default_value = "vehicle")]
    asset: AssetType,
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    inputs: InputArgs,
    /// Which installment to vary: loan or credit-letter
    #[arg(long)]
    path: SweepPath,
    #[arg(long)]
    from: Decimal,
    #[arg(long)]
    to: Decimal,
    #[arg(long)]
    step: Decimal,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of input sets
    #[arg(long, default_value_t = 10)]
    count: usize,
    /// Write to file instead of stdout
    #[arg(long)]
    output: Option<String>,
}

/// JSON output schema for `simulate --format json`.
#[derive(serde::Serialize)]
struct SimulationOutput<'a> {
    asset: AssetType,
    inputs: &'a SimulationInputs,
    result: &'a SimulationResult,
    warnings: Vec<String>,
}

fn resolve_inputs(args: &InputArgs) -> Result<(AssetType, SimulationInputs), PlannerError> {
    let file = match &args.input {
        Some(path) => {
            info!("reading inputs from {}", path);
            SimulationFile::load(path)?
        }
        None => SimulationFile::default(),
    };
    let overrides = InputOverrides {
        asset: args.asset,
        credit_value: args.credit_value,
        down_payment_loan: args.down_payment,
        target_installment_loan: args.loan_installment,
        credit_letter_contribution: args.contribution,
        target_installment_credit_letter: args.credit_letter_installment,
        fixed_admin_rate_percent: args.admin_rate,
    };

    let (asset, inputs) = file.resolve_with(&overrides)?;
    for warning in inputs.warnings() {
        warn!("{}", warning);
    }
    Ok((asset, inputs))
}

fn cmd_simulate(args: SimulateArgs) -> Result<(), PlannerError> {
    let (asset, inputs) = resolve_inputs(&args.inputs)?;
    let result = SimulationEngine::simulate(&inputs);

    match args.format {
        OutputFormat::Text => print!("{}", result),
        OutputFormat::Json => {
            let output = SimulationOutput {
                asset,
                inputs: &inputs,
                result: &result,
                warnings: inputs.warnings(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Proposal => {
            print!("{}", Proposal::issued_today(asset, inputs, result));
        }
    }
    Ok(())
}

fn cmd_defaults(args: DefaultsArgs) -> Result<(), PlannerError> {
    let inputs = SimulationInputs::for_asset(args.asset);
    println!("{}", serde_json::to_string_pretty(&inputs)?);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> Result<(), PlannerError> {
    let (_, inputs) = resolve_inputs(&args.inputs)?;
    let points = installment_sweep(&inputs, args.path, args.from, args.to, args.step)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("Sweep over {} installment", args.path);
    println!(
        "{:>16} {:>8} {:>20} {:>20}  {}",
        "Installment", "Months", "Total Cost", "Savings", "Flag"
    );
    for point in &points {
        println!(
            "{:>16} {:>8} {:>20} {:>20}  {}",
            format_brl(point.installment),
            point.term_months,
            format_brl(point.total_cost),
            format_brl(point.savings),
            point.flag.map(|f| f.to_string()).unwrap_or_default()
        );
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> Result<(), PlannerError> {
    let config = SamplingConfig {
        count: args.count,
        ..Default::default()
    };
    let samples = generate_random_inputs(&config);
    let json = serde_json::to_string_pretty(&samples)?;

    if let Some(path) = args.output {
        fs::write(&path, &json)?;
        eprintln!("Generated {} input sets → {}", samples.len(), path);
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate(args) => cmd_simulate(args),
        Commands::Defaults(args) => cmd_defaults(args),
        Commands::Sweep(args) => cmd_sweep(args),
        Commands::Generate(args) => cmd_generate(args),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
