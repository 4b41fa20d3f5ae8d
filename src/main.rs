//! Founder Projections CLI
//!
//! Runs a single growth projection from command-line assumptions

use anyhow::{Context, Result};
use clap::Parser;
use founder_projections::{
    assumptions::DEFAULT_MAX_HORIZON_MONTHS,
    export::{month_label, parse_start_month, write_report_json, write_snapshots_csv, ProjectionReport},
    CurrencyCode, CurrencyTable, ProjectionAssumptions, ProjectionEngine, ProjectionLimits,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "founder_projections", version, about = "Project customers and revenue month by month")]
struct Cli {
    /// Customers at month 0
    #[arg(long, default_value_t = 100.0)]
    customers: f64,

    /// Monthly customer growth, in percent
    #[arg(long, default_value_t = 10.0)]
    growth: f64,

    /// Starting monthly price per customer, in USD
    #[arg(long, default_value_t = 50.0)]
    price: f64,

    /// Price increase applied at the start of each year, in percent
    #[arg(long, default_value_t = 5.0)]
    price_increase: f64,

    /// Months to project
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Display currency (USD, EUR, GBP, JPY, INR)
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Load currency rates from a CSV file instead of the built-in table
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Longest horizon accepted
    #[arg(long, default_value_t = DEFAULT_MAX_HORIZON_MONTHS)]
    max_months: u32,

    /// Calendar month of projection month 1, as YYYY-MM
    #[arg(long)]
    start: Option<String>,

    /// Report the first month monthly revenue reaches this USD amount
    #[arg(long)]
    target_revenue: Option<f64>,

    /// Write the full trajectory to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let currency: CurrencyCode = cli.currency.parse()?;
    let loaded_table;
    let table = match &cli.rates {
        Some(path) => {
            loaded_table = CurrencyTable::from_csv_path(path)
                .with_context(|| format!("loading currency rates from {}", path.display()))?;
            &loaded_table
        }
        None => CurrencyTable::standard(),
    };
    let start = cli.start.as_deref().map(parse_start_month).transpose()?;

    let assumptions = ProjectionAssumptions::new(
        cli.customers,
        cli.growth,
        cli.price,
        cli.price_increase,
        cli.months,
    );
    let engine = ProjectionEngine::new(ProjectionLimits {
        max_horizon_months: cli.max_months,
        ..Default::default()
    });

    let result = engine.project(&assumptions)?;
    log::debug!("Projected {} months", result.snapshots.len());

    println!("Founder Projections v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");
    println!("  Initial Customers: {}", assumptions.initial_customers);
    println!("  Monthly Growth:    {}%", assumptions.monthly_growth_rate_percent);
    println!("  Initial Price:     {}", table.format(assumptions.initial_price_per_customer, currency)?);
    println!("  Annual Increase:   {}%", assumptions.annual_price_increase_percent);
    println!("  Currency:          {}", currency);
    println!();

    println!("{:>5} {:>8} {:>12} {:>16} {:>18}", "Month", "Period", "Customers", "Revenue", "Cumulative");
    println!("{}", "-".repeat(63));
    for snapshot in &result.snapshots {
        let period = start
            .and_then(|s| month_label(s, snapshot.month))
            .unwrap_or_default();
        println!(
            "{:>5} {:>8} {:>12} {:>16} {:>18}",
            snapshot.month,
            period,
            snapshot.customers,
            table.format(snapshot.monthly_revenue, currency)?,
            table.format(snapshot.cumulative_revenue, currency)?,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months:          {}", summary.total_months);
    println!("  Final Customers:       {}", summary.final_customers);
    println!("  Final Price:           {}", table.format(summary.final_price, currency)?);
    println!("  Final Monthly Revenue: {}", table.format(summary.final_monthly_revenue, currency)?);
    println!("  Annual Run Rate:       {}", table.format(summary.annual_run_rate, currency)?);
    println!("  Cumulative Revenue:    {}", table.format(summary.cumulative_revenue, currency)?);
    println!("  Revenue Multiple:      {:.2}x", summary.revenue_multiple);

    if let Some(target) = cli.target_revenue {
        match result.first_month_reaching(target) {
            Some(month) => println!("  Reaches {}/month in month {}", table.format(target, currency)?, month),
            None => println!("  Does not reach {}/month within {} months", table.format(target, currency)?, summary.total_months),
        }
    }

    let yearly = result.yearly_totals();
    if yearly.len() > 1 {
        println!("\nBy Year:");
        for year in &yearly {
            println!(
                "  Year {:>2} ({:>2} mo): revenue {:>16}, ending customers {:>10}",
                year.year,
                year.months,
                table.format(year.revenue, currency)?,
                year.ending_customers,
            );
        }
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_snapshots_csv(BufWriter::new(file), &result, table, currency, start)?;
        println!("\nFull results written to: {}", path.display());
    }

    if let Some(path) = &cli.json {
        let report = ProjectionReport::build(&result, table, currency, start)?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_report_json(BufWriter::new(file), &report)?;
        println!("JSON report written to: {}", path.display());
    }

    Ok(())
}
