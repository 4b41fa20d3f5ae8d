//! Error types for projections, currency lookups, and data loading

use std::fmt;
use thiserror::Error;

/// Assumption field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssumptionField {
    InitialCustomers,
    MonthlyGrowthRatePercent,
    InitialPricePerCustomer,
    AnnualPriceIncreasePercent,
    HorizonMonths,
}

impl AssumptionField {
    /// Field name as it appears in serialized input
    pub fn name(&self) -> &'static str {
        match self {
            AssumptionField::InitialCustomers => "initial_customers",
            AssumptionField::MonthlyGrowthRatePercent => "monthly_growth_rate_percent",
            AssumptionField::InitialPricePerCustomer => "initial_price_per_customer",
            AssumptionField::AnnualPriceIncreasePercent => "annual_price_increase_percent",
            AssumptionField::HorizonMonths => "horizon_months",
        }
    }
}

impl fmt::Display for AssumptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single out-of-domain assumption value
#[derive(Debug, Clone, PartialEq)]
pub struct AssumptionViolation {
    pub field: AssumptionField,
    pub reason: String,
}

impl AssumptionViolation {
    pub fn new(field: AssumptionField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AssumptionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Errors raised by the projection engine and currency table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// One or more assumptions are outside their allowed bounds
    #[error("invalid assumptions: {}", join_violations(.0))]
    InvalidAssumptions(Vec<AssumptionViolation>),

    /// Currency code outside the supported set, or missing from a loaded table
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

impl ProjectionError {
    /// Fields that failed validation (empty for non-validation errors)
    pub fn failed_fields(&self) -> Vec<AssumptionField> {
        match self {
            ProjectionError::InvalidAssumptions(violations) => {
                violations.iter().map(|v| v.field).collect()
            }
            ProjectionError::UnknownCurrency(_) => Vec::new(),
        }
    }
}

fn join_violations(violations: &[AssumptionViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while reading or writing scenario, rate, and projection files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Projection(#[from] ProjectionError),

    #[error("invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("invalid row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("invalid rate for {code}: {rate} (must be positive)")]
    InvalidRate { code: String, rate: f64 },
}

/// Result of engine, validation and currency operations
pub type Result<T> = std::result::Result<T, ProjectionError>;
