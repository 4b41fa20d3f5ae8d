//! Load named projection scenarios from CSV
//!
//! Expected columns: scenario_id, name, initial_customers,
//! monthly_growth_rate_percent, initial_price_per_customer,
//! annual_price_increase_percent, horizon_months

use super::ProjectionAssumptions;
use crate::error::DataError;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default path to the sample scenario file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// A named set of assumptions, e.g. "conservative" vs "aggressive"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub scenario_id: u32,
    pub name: String,
    pub assumptions: ProjectionAssumptions,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    scenario_id: u32,
    name: String,
    initial_customers: f64,
    monthly_growth_rate_percent: f64,
    initial_price_per_customer: f64,
    annual_price_increase_percent: f64,
    horizon_months: u32,
}

impl CsvRow {
    fn into_scenario(self, row: usize) -> Result<Scenario, DataError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DataError::InvalidRow {
                row,
                message: format!("scenario {} has an empty name", self.scenario_id),
            });
        }

        Ok(Scenario {
            scenario_id: self.scenario_id,
            name,
            assumptions: ProjectionAssumptions::new(
                self.initial_customers,
                self.monthly_growth_rate_percent,
                self.initial_price_per_customer,
                self.annual_price_increase_percent,
                self.horizon_months,
            ),
        })
    }
}

/// Load all scenarios from a CSV file
///
/// Rows are parsed but not validated against projection limits; invalid
/// assumptions surface per scenario when the batch runs.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, DataError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let scenarios = read_rows(reader)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, DataError> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, DataError> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Header is line 1
        scenarios.push(row.into_scenario(idx + 2)?);
    }

    Ok(scenarios)
}
