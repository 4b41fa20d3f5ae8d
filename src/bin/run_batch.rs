//! Run every scenario in a scenario CSV and write one summary row per scenario
//!
//! Usage: cargo run --bin run_batch -- --scenarios data/scenarios.csv --currency EUR

use anyhow::{Context, Result};
use clap::Parser;
use founder_projections::{
    assumptions::{load_scenarios, DEFAULT_SCENARIOS_PATH, DEFAULT_MAX_HORIZON_MONTHS},
    CurrencyCode, CurrencyTable, ProjectionLimits, ScenarioRunner,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV file
    #[arg(long, default_value = DEFAULT_SCENARIOS_PATH)]
    scenarios: PathBuf,

    /// Display currency for formatted columns
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Longest horizon accepted
    #[arg(long, default_value_t = DEFAULT_MAX_HORIZON_MONTHS)]
    max_months: u32,

    /// Output CSV file
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

/// One summary row per scenario
#[derive(Debug, Serialize)]
struct SummaryRow {
    scenario_id: u32,
    name: String,
    status: String,
    months: u32,
    final_customers: f64,
    final_monthly_revenue: f64,
    annual_run_rate: f64,
    cumulative_revenue: f64,
    final_monthly_revenue_display: String,
    cumulative_revenue_display: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let currency: CurrencyCode = args.currency.parse()?;
    let table = CurrencyTable::standard();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());
    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("loading {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_limits(ProjectionLimits {
        max_horizon_months: args.max_months,
        ..Default::default()
    });

    println!("Running projections...");
    let proj_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output).with_context(|| format!("creating {}", args.output.display()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    let mut rejected = 0;

    for outcome in &outcomes {
        let row = match &outcome.result {
            Ok(result) => {
                let summary = result.summary();
                SummaryRow {
                    scenario_id: outcome.scenario_id,
                    name: outcome.name.clone(),
                    status: "ok".to_string(),
                    months: summary.total_months,
                    final_customers: summary.final_customers,
                    final_monthly_revenue: summary.final_monthly_revenue,
                    annual_run_rate: summary.annual_run_rate,
                    cumulative_revenue: summary.cumulative_revenue,
                    final_monthly_revenue_display: table.format(summary.final_monthly_revenue, currency)?,
                    cumulative_revenue_display: table.format(summary.cumulative_revenue, currency)?,
                }
            }
            Err(e) => {
                rejected += 1;
                SummaryRow {
                    scenario_id: outcome.scenario_id,
                    name: outcome.name.clone(),
                    status: e.to_string(),
                    months: 0,
                    final_customers: 0.0,
                    final_monthly_revenue: 0.0,
                    annual_run_rate: 0.0,
                    cumulative_revenue: 0.0,
                    final_monthly_revenue_display: String::new(),
                    cumulative_revenue_display: String::new(),
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());

    println!("\nBatch Summary:");
    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                let summary = result.summary();
                println!(
                    "  {:>3} {:<24} MRR={:>14} Cumulative={:>16}",
                    outcome.scenario_id,
                    outcome.name,
                    table.format(summary.final_monthly_revenue, currency)?,
                    table.format(summary.cumulative_revenue, currency)?,
                );
            }
            Err(e) => println!("  {:>3} {:<24} rejected: {}", outcome.scenario_id, outcome.name, e),
        }
    }
    if rejected > 0 {
        println!("  {} of {} scenarios rejected", rejected, outcomes.len());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
