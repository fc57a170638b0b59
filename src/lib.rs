//! # credit-planner
//!
//! Compare buying an asset through a traditional bank loan ("financiamento")
//! against a pooled credit letter with a fixed administrative rate
//! ("consórcio").
//!
//! Given a credit value, a down payment, a contribution and the monthly
//! installment the buyer is aiming for on each path, the engine reports the
//! term, total cost and savings of one path over the other.
//!
//! ## Architecture
//!
//! - **core** — Inputs, asset types and their default-value policy, input files
//! - **engine** — Loan path, credit-letter path and their comparison
//! - **report** — pt-BR money formatting and the printable proposal
//! - **analysis** — Installment sweeps and random input generation

pub mod analysis;
pub mod core;
pub mod engine;
pub mod error;
pub mod report;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::asset::AssetType;
    pub use crate::core::inputs::SimulationInputs;
    pub use crate::engine::credit_letter::CreditLetterResult;
    pub use crate::engine::loan::{LoanFlag, LoanResult};
    pub use crate::engine::simulation::{SimulationEngine, SimulationResult};
    pub use crate::error::PlannerError;
    pub use crate::report::proposal::Proposal;
}
