use crate::core::asset::AssetType;
use crate::core::inputs::SimulationInputs;
use crate::engine::simulation::SimulationResult;
use crate::report::format::{format_brl, format_date_br, format_percent, years_approx};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE_WIDTH: usize = 60;

/// Printable comparison proposal ("proposta comercial").
///
/// A read-only consumer of [`SimulationResult`]: it never feeds anything back
/// into the engine. Rendered as plain text through [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use credit_planner::prelude::*;
/// use chrono::NaiveDate;
///
/// let inputs = SimulationInputs::for_asset(AssetType::Vehicle);
/// let result = SimulationEngine::simulate(&inputs);
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
///
/// let proposal = Proposal::new(AssetType::Vehicle, inputs, result, date);
/// let text = proposal.to_string();
/// assert!(text.contains("15/01/2024"));
/// assert!(text.contains("R$ 42.100,00"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub asset: AssetType,
    pub inputs: SimulationInputs,
    pub result: SimulationResult,
    pub issued_on: NaiveDate,
}

impl Proposal {
    pub fn new(
        asset: AssetType,
        inputs: SimulationInputs,
        result: SimulationResult,
        issued_on: NaiveDate,
    ) -> Self {
        Self {
            asset,
            inputs,
            result,
            issued_on,
        }
    }

    /// Proposal stamped with the local current date.
    pub fn issued_today(
        asset: AssetType,
        inputs: SimulationInputs,
        result: SimulationResult,
    ) -> Self {
        Self::new(asset, inputs, result, Local::now().date_naive())
    }

    /// Document title, e.g. `Proposta Comercial - VEÍCULO`.
    pub fn title(&self) -> String {
        format!("Proposta Comercial - {}", self.asset.label().to_uppercase())
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "  {:<36}{:>22}", label, value)
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let loan = &self.result.loan;
        let letter = &self.result.credit_letter;

        writeln!(f, "{}", heavy)?;
        writeln!(f, "PLANEJAMENTO DE CRÉDITO")?;
        writeln!(f, "Simulação Comparativa")?;
        writeln!(f, "{}", self.title())?;
        writeln!(f, "Emissão: {}", format_date_br(self.issued_on))?;
        writeln!(f, "{}", heavy)?;

        writeln!(f, "\nRESUMO DO OBJETIVO")?;
        row(f, "Objetivo", self.asset.label())?;
        row(f, "Crédito", &format_brl(self.inputs.credit_value))?;
        row(f, "Base Financ.", "Selic + CET")?;
        row(
            f,
            "Taxa Carta",
            &format!(
                "{}% (Fixo)",
                self.inputs.fixed_admin_rate_percent.normalize()
            ),
        )?;

        writeln!(f, "\n{}", light)?;
        writeln!(f, "FINANCIAMENTO [Tradicional]")?;
        writeln!(f, "{}", light)?;
        row(f, "Entrada Inicial", &format_brl(loan.down_payment))?;
        row(f, "Parcela Mensal Estimada", &format_brl(loan.installment))?;
        row(
            f,
            "Prazo Estimado",
            &format!("{} meses (~ {} anos)", loan.term_months, years_approx(loan.term_months)),
        )?;
        if let Some(flag) = loan.error_flag {
            row(f, "Atenção", flag.proposal_message())?;
        }
        row(f, "Custo Total (Entrada + Parcelas)", &format_brl(loan.total_cost))?;

        writeln!(f, "\n{}", light)?;
        writeln!(f, "CARTA DE CRÉDITO [Recomendado]")?;
        writeln!(f, "{}", light)?;
        row(f, "Adesão / Entrada", &format_brl(letter.contribution))?;
        row(f, "Saldo a Parcelar", &format_brl(letter.financed_balance))?;
        row(f, "Parcela Mensal Planejada", &format_brl(letter.installment))?;
        row(
            f,
            "Prazo Estimado",
            &format!(
                "{} meses (~ {} anos)",
                letter.term_months,
                years_approx(letter.term_months)
            ),
        )?;
        row(f, "Custo Total (Adesão + Parcelas)", &format_brl(letter.total_cost))?;

        writeln!(f, "\n{}", heavy)?;
        writeln!(f, "ECONOMIA DIRETA GERADA")?;
        row(f, "Capital preservado", &format_brl(self.result.savings))?;
        row(f, "Custo reduzido", &format_percent(self.result.savings_percent))?;
        writeln!(f, "{}", heavy)?;

        writeln!(f, "Simulação para fins de planejamento. Valores sujeitos a confirmação.")?;
        writeln!(f, "Financiamento com juros compostos estimados. Consórcio com taxa adm. fixa.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulation::SimulationEngine;
    use rust_decimal_macros::dec;

    fn proposal_for(asset: AssetType, inputs: SimulationInputs) -> Proposal {
        let result = SimulationEngine::simulate(&inputs);
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        Proposal::new(asset, inputs, result, date)
    }

    #[test]
    fn test_vehicle_proposal_sections() {
        let text = proposal_for(AssetType::Vehicle, SimulationInputs::for_asset(AssetType::Vehicle))
            .to_string();

        assert!(text.contains("Proposta Comercial - VEÍCULO"));
        assert!(text.contains("Emissão: 02/05/2024"));
        assert!(text.contains("RESUMO DO OBJETIVO"));
        assert!(text.contains("R$ 50.000,00"));
        assert!(text.contains("26% (Fixo)"));
        assert!(text.contains("FINANCIAMENTO"));
        assert!(text.contains("46 meses (~ 3.8 anos)"));
        assert!(text.contains("R$ 105.100,00"));
        assert!(text.contains("CARTA DE CRÉDITO"));
        assert!(text.contains("48 meses (~ 4.0 anos)"));
        assert!(text.contains("R$ 63.000,00"));
        assert!(text.contains("R$ 42.100,00"));
        assert!(text.contains("40%"));
        assert!(!text.contains("Atenção"));
    }

    #[test]
    fn test_flagged_proposal_shows_message() {
        let inputs = SimulationInputs::for_asset(AssetType::Vehicle)
            .with_target_installment_loan(dec!(0));
        let text = proposal_for(AssetType::Vehicle, inputs).to_string();
        assert!(text.contains("Defina uma parcela."));
    }

    #[test]
    fn test_real_estate_title() {
        let proposal = proposal_for(
            AssetType::RealEstate,
            SimulationInputs::for_asset(AssetType::RealEstate),
        );
        assert_eq!(proposal.title(), "Proposta Comercial - IMÓVEL");
    }

    #[test]
    fn test_proposal_serializes() {
        let proposal = proposal_for(AssetType::Vehicle, SimulationInputs::default());
        let value = serde_json::to_value(&proposal).unwrap();
        assert_eq!(value["asset"], "vehicle");
        assert_eq!(value["issued_on"], "2024-05-02");
        assert_eq!(value["result"]["loan"]["term_months"], 46);
    }
}
