//! Running state carried from month to month during a projection

use crate::assumptions::ProjectionAssumptions;

/// State of the business at a point in time during projection
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Current projection month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Customer count at full precision
    pub customers: f64,

    /// Current price per customer
    pub price: f64,

    /// Revenue accumulated through the current month
    pub cumulative_revenue: f64,
}

impl GrowthState {
    /// Initialize state at month 0
    pub fn from_assumptions(assumptions: &ProjectionAssumptions) -> Self {
        Self {
            month: 0,
            customers: assumptions.initial_customers,
            price: assumptions.initial_price_per_customer,
            cumulative_revenue: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Month within projection year (1-12)
    pub fn month_in_year(&self) -> u32 {
        self.month.saturating_sub(1) % 12 + 1
    }

    /// Projection year (1-indexed)
    pub fn year(&self) -> u32 {
        self.month.saturating_sub(1) / 12 + 1
    }

    /// True on months 13, 25, 37, ... where the annual price step applies
    pub fn is_escalation_month(&self) -> bool {
        self.year() > 1 && self.month_in_year() == 1
    }
}
