//! AWS Lambda handler for running growth projections
//!
//! Accepts projection assumptions and a display currency as JSON and returns
//! the full report (summary, yearly totals, formatted monthly rows). Invalid
//! input produces a response with `error` set instead of a failed invocation.

use founder_projections::{
    export::{parse_start_month, ProjectionReport},
    CurrencyCode, CurrencyTable, ProjectionAssumptions, ProjectionEngine, ProjectionError,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input for one projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub assumptions: ProjectionAssumptions,

    /// Display currency code (default: USD)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Calendar month of projection month 1, as YYYY-MM
    #[serde(default, alias = "startMonth")]
    pub start_month: Option<String>,

    /// Monthly revenue milestone, in USD
    #[serde(default, alias = "targetRevenue")]
    pub target_revenue: Option<f64>,
}

fn default_currency() -> String {
    CurrencyCode::BASE.code().to_string()
}

/// Output from the projection
#[derive(Debug, Serialize, Default)]
pub struct ProjectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ProjectionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_month: Option<u32>,
    pub execution_time_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid_fields: Vec<String>,
}

fn error_response(message: String, invalid_fields: Vec<String>, start: std::time::Instant) -> ProjectionResponse {
    ProjectionResponse {
        error: Some(message),
        invalid_fields,
        execution_time_us: start.elapsed().as_micros() as u64,
        ..Default::default()
    }
}

fn projection_error_response(err: ProjectionError, start: std::time::Instant) -> ProjectionResponse {
    let fields = err.failed_fields().iter().map(|f| f.name().to_string()).collect();
    error_response(err.to_string(), fields, start)
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let currency: CurrencyCode = match request.currency.parse() {
        Ok(c) => c,
        Err(e) => return Ok(projection_error_response(e, start)),
    };

    let start_month = match request.start_month.as_deref().map(parse_start_month).transpose() {
        Ok(d) => d,
        Err(e) => return Ok(error_response(e.to_string(), Vec::new(), start)),
    };

    let result = match ProjectionEngine::default().project(&request.assumptions) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Rejected projection request: {}", e);
            return Ok(projection_error_response(e, start));
        }
    };

    let report = ProjectionReport::build(&result, CurrencyTable::standard(), currency, start_month)?;
    let target_month = request.target_revenue.and_then(|t| result.first_month_reaching(t));

    Ok(ProjectionResponse {
        report: Some(report),
        target_month,
        execution_time_us: start.elapsed().as_micros() as u64,
        error: None,
        invalid_fields: Vec::new(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
