//! Scenario runner for batch projections
//!
//! Holds one engine and evaluates many named scenarios against it. Invalid
//! scenarios are reported individually and do not abort the batch.

use crate::assumptions::{ProjectionLimits, Scenario};
use crate::error::ProjectionError;
use crate::projection::{ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Outcome of projecting one scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario_id: u32,
    pub name: String,
    pub result: Result<ProjectionResult, ProjectionError>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Batch runner sharing limits across scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("data/scenarios.csv")?;
/// for outcome in runner.run_batch(&scenarios) {
///     println!("{}: {:?}", outcome.name, outcome.result.map(|r| r.summary()));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with custom limits
    pub fn with_limits(limits: ProjectionLimits) -> Self {
        Self {
            engine: ProjectionEngine::new(limits),
        }
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        let result = self.engine.project(&scenario.assumptions);
        match &result {
            Ok(projection) => log::debug!(
                "Scenario {} ({}) projected {} months",
                scenario.scenario_id,
                scenario.name,
                projection.snapshots.len()
            ),
            Err(e) => log::warn!(
                "Scenario {} ({}) rejected: {}",
                scenario.scenario_id,
                scenario.name,
                e
            ),
        }

        ScenarioOutcome {
            scenario_id: scenario.scenario_id,
            name: scenario.name.clone(),
            result,
        }
    }

    /// Run all scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}
