//! Business assumptions driving a growth projection, and their validation bounds

pub mod loader;

pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario, DEFAULT_SCENARIOS_PATH};

use crate::error::{AssumptionField, AssumptionViolation, ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound on the projection horizon (5 years)
pub const DEFAULT_MAX_HORIZON_MONTHS: u32 = 60;

/// Default lower bound on monthly growth (flat projections are allowed)
pub const DEFAULT_MIN_MONTHLY_GROWTH_RATE_PERCENT: f64 = 0.0;

/// Inputs for a single projection, all monetary values in base currency (USD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Customers at month 0
    #[serde(alias = "initialCustomers")]
    pub initial_customers: f64,

    /// Compounding growth applied to customers every month, in percent
    #[serde(alias = "monthlyGrowthRatePercent", alias = "monthlyGrowthRate")]
    pub monthly_growth_rate_percent: f64,

    /// Starting price per customer per month
    #[serde(alias = "initialPricePerCustomer", alias = "initialPrice")]
    pub initial_price_per_customer: f64,

    /// Step increase applied to price at the start of each new year, in percent
    #[serde(alias = "annualPriceIncreasePercent", alias = "annualPriceIncrease")]
    pub annual_price_increase_percent: f64,

    /// Number of months to simulate
    #[serde(alias = "horizonMonths", alias = "months")]
    pub horizon_months: u32,
}

impl ProjectionAssumptions {
    pub fn new(
        initial_customers: f64,
        monthly_growth_rate_percent: f64,
        initial_price_per_customer: f64,
        annual_price_increase_percent: f64,
        horizon_months: u32,
    ) -> Self {
        Self {
            initial_customers,
            monthly_growth_rate_percent,
            initial_price_per_customer,
            annual_price_increase_percent,
            horizon_months,
        }
    }

    /// Monthly customer multiplier, e.g. 10% -> 1.10
    pub fn monthly_growth_factor(&self) -> f64 {
        1.0 + self.monthly_growth_rate_percent / 100.0
    }

    /// Price multiplier applied on each year boundary, e.g. 5% -> 1.05
    pub fn annual_escalation_factor(&self) -> f64 {
        1.0 + self.annual_price_increase_percent / 100.0
    }

    /// Check every field against `limits`, collecting all violations
    pub fn validate(&self, limits: &ProjectionLimits) -> Result<()> {
        let mut violations = Vec::new();

        if !self.initial_customers.is_finite() || self.initial_customers <= 0.0 {
            violations.push(AssumptionViolation::new(
                AssumptionField::InitialCustomers,
                format!("must be a positive number (got {})", self.initial_customers),
            ));
        }

        if !self.monthly_growth_rate_percent.is_finite()
            || self.monthly_growth_rate_percent < limits.min_monthly_growth_rate_percent
        {
            violations.push(AssumptionViolation::new(
                AssumptionField::MonthlyGrowthRatePercent,
                format!(
                    "must be at least {} (got {})",
                    limits.min_monthly_growth_rate_percent, self.monthly_growth_rate_percent
                ),
            ));
        }

        if !self.initial_price_per_customer.is_finite() || self.initial_price_per_customer <= 0.0 {
            violations.push(AssumptionViolation::new(
                AssumptionField::InitialPricePerCustomer,
                format!("must be a positive number (got {})", self.initial_price_per_customer),
            ));
        }

        if !self.annual_price_increase_percent.is_finite() || self.annual_price_increase_percent < 0.0 {
            violations.push(AssumptionViolation::new(
                AssumptionField::AnnualPriceIncreasePercent,
                format!("must be zero or more (got {})", self.annual_price_increase_percent),
            ));
        }

        if self.horizon_months < 1 || self.horizon_months > limits.max_horizon_months {
            violations.push(AssumptionViolation::new(
                AssumptionField::HorizonMonths,
                format!(
                    "must be between 1 and {} (got {})",
                    limits.max_horizon_months, self.horizon_months
                ),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ProjectionError::InvalidAssumptions(violations))
        }
    }
}

/// Domain bounds enforced before any simulation step runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionLimits {
    /// Longest horizon accepted
    pub max_horizon_months: u32,

    /// Smallest monthly growth rate accepted, in percent
    pub min_monthly_growth_rate_percent: f64,
}

impl Default for ProjectionLimits {
    fn default() -> Self {
        Self {
            max_horizon_months: DEFAULT_MAX_HORIZON_MONTHS,
            min_monthly_growth_rate_percent: DEFAULT_MIN_MONTHLY_GROWTH_RATE_PERCENT,
        }
    }
}
