//! Tabular and JSON export of projection results
//!
//! Rows carry raw base-currency values alongside display strings in the
//! requested currency, so a spreadsheet or chart can use either.

use crate::assumptions::ProjectionAssumptions;
use crate::currency::{CurrencyCode, CurrencyTable};
use crate::error::DataError;
use crate::projection::{MonthSnapshot, ProjectionResult, ProjectionSummary, YearlyTotal};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::io::Write;

/// Parse a `YYYY-MM` start month into the first day of that month
pub fn parse_start_month(value: &str) -> Result<NaiveDate, DataError> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")?;
    Ok(date)
}

/// Calendar label (`YYYY-MM`) for projection month `month` when month 1 is `start`
pub fn month_label(start: NaiveDate, month: u32) -> Option<String> {
    start
        .checked_add_months(Months::new(month.saturating_sub(1)))
        .map(|d| d.format("%Y-%m").to_string())
}

/// One exported month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub month: u32,
    pub period: Option<String>,
    pub customers: f64,
    pub price: f64,
    pub monthly_revenue: f64,
    pub cumulative_revenue: f64,
    pub price_display: String,
    pub monthly_revenue_display: String,
    pub cumulative_revenue_display: String,
}

impl DisplayRow {
    pub fn from_snapshot(
        snapshot: &MonthSnapshot,
        table: &CurrencyTable,
        currency: CurrencyCode,
        start: Option<NaiveDate>,
    ) -> Result<Self, DataError> {
        Ok(Self {
            month: snapshot.month,
            period: start.and_then(|s| month_label(s, snapshot.month)),
            customers: snapshot.customers,
            price: snapshot.price,
            monthly_revenue: snapshot.monthly_revenue,
            cumulative_revenue: snapshot.cumulative_revenue,
            price_display: table.format(snapshot.price, currency)?,
            monthly_revenue_display: table.format(snapshot.monthly_revenue, currency)?,
            cumulative_revenue_display: table.format(snapshot.cumulative_revenue, currency)?,
        })
    }
}

/// Display rows for every month of a projection
pub fn display_rows(
    result: &ProjectionResult,
    table: &CurrencyTable,
    currency: CurrencyCode,
    start: Option<NaiveDate>,
) -> Result<Vec<DisplayRow>, DataError> {
    result
        .snapshots
        .iter()
        .map(|s| DisplayRow::from_snapshot(s, table, currency, start))
        .collect()
}

/// Write a projection as CSV, one row per month
pub fn write_snapshots_csv<W: Write>(
    writer: W,
    result: &ProjectionResult,
    table: &CurrencyTable,
    currency: CurrencyCode,
    start: Option<NaiveDate>,
) -> Result<(), DataError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in display_rows(result, table, currency, start)? {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Headline figures rendered in the display currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDisplay {
    pub final_monthly_revenue: String,
    pub annual_run_rate: String,
    pub cumulative_revenue: String,
    pub final_price: String,
}

/// Full projection report for JSON consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionReport {
    pub currency: CurrencyCode,
    pub assumptions: ProjectionAssumptions,
    pub summary: ProjectionSummary,
    pub summary_display: SummaryDisplay,
    pub yearly_totals: Vec<YearlyTotal>,
    pub rows: Vec<DisplayRow>,
}

impl ProjectionReport {
    pub fn build(
        result: &ProjectionResult,
        table: &CurrencyTable,
        currency: CurrencyCode,
        start: Option<NaiveDate>,
    ) -> Result<Self, DataError> {
        let summary = result.summary();
        let summary_display = SummaryDisplay {
            final_monthly_revenue: table.format(summary.final_monthly_revenue, currency)?,
            annual_run_rate: table.format(summary.annual_run_rate, currency)?,
            cumulative_revenue: table.format(summary.cumulative_revenue, currency)?,
            final_price: table.format(summary.final_price, currency)?,
        };

        Ok(Self {
            currency,
            assumptions: result.assumptions,
            summary,
            summary_display,
            yearly_totals: result.yearly_totals(),
            rows: display_rows(result, table, currency, start)?,
        })
    }
}

/// Write a report as pretty-printed JSON
pub fn write_report_json<W: Write>(writer: W, report: &ProjectionReport) -> Result<(), DataError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
