//! Output structures for projections

use crate::assumptions::ProjectionAssumptions;
use serde::{Deserialize, Serialize};

/// Derived values for one simulated month, in base currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    /// 1-based month within the horizon
    pub month: u32,

    /// Customer count rounded for display
    pub customers: f64,

    /// Price per customer this month
    pub price: f64,

    /// Revenue this month, computed from the unrounded customer count
    pub monthly_revenue: f64,

    /// Revenue from month 1 through this month
    pub cumulative_revenue: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs the projection was run with
    pub assumptions: ProjectionAssumptions,

    /// One snapshot per month, ascending
    pub snapshots: Vec<MonthSnapshot>,
}

impl ProjectionResult {
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self {
            assumptions,
            snapshots: Vec::with_capacity(assumptions.horizon_months as usize),
        }
    }

    pub fn add_snapshot(&mut self, snapshot: MonthSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn last(&self) -> Option<&MonthSnapshot> {
        self.snapshots.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let first_revenue = self.snapshots.first().map(|s| s.monthly_revenue).unwrap_or(0.0);
        let last = self.last();

        let final_monthly_revenue = last.map(|s| s.monthly_revenue).unwrap_or(0.0);
        let revenue_multiple = if first_revenue > 0.0 {
            final_monthly_revenue / first_revenue
        } else {
            0.0
        };

        ProjectionSummary {
            total_months: self.snapshots.len() as u32,
            final_customers: last.map(|s| s.customers).unwrap_or(0.0),
            final_price: last.map(|s| s.price).unwrap_or(0.0),
            final_monthly_revenue,
            annual_run_rate: final_monthly_revenue * 12.0,
            cumulative_revenue: last.map(|s| s.cumulative_revenue).unwrap_or(0.0),
            revenue_multiple,
        }
    }

    /// Revenue and closing figures per projection year; the last year may be partial
    pub fn yearly_totals(&self) -> Vec<YearlyTotal> {
        self.snapshots
            .chunks(12)
            .enumerate()
            .filter_map(|(idx, months)| {
                let closing = months.last()?;
                Some(YearlyTotal {
                    year: idx as u32 + 1,
                    months: months.len() as u32,
                    revenue: months.iter().map(|s| s.monthly_revenue).sum(),
                    ending_customers: closing.customers,
                    ending_price: closing.price,
                    ending_cumulative_revenue: closing.cumulative_revenue,
                })
            })
            .collect()
    }

    /// First month whose monthly revenue reaches `target`
    pub fn first_month_reaching(&self, target: f64) -> Option<u32> {
        self.snapshots
            .iter()
            .find(|s| s.monthly_revenue >= target)
            .map(|s| s.month)
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_customers: f64,
    pub final_price: f64,
    pub final_monthly_revenue: f64,
    pub annual_run_rate: f64,
    pub cumulative_revenue: f64,
    /// Final monthly revenue over first monthly revenue
    pub revenue_multiple: f64,
}

/// Aggregate for one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotal {
    pub year: u32,
    /// Months covered (12 except possibly the last year)
    pub months: u32,
    pub revenue: f64,
    pub ending_customers: f64,
    pub ending_price: f64,
    pub ending_cumulative_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result_with_revenues(revenues: &[f64]) -> ProjectionResult {
        let mut result =
            ProjectionResult::new(ProjectionAssumptions::new(1.0, 0.0, 1.0, 0.0, revenues.len() as u32));
        let mut cumulative = 0.0;
        for (i, &r) in revenues.iter().enumerate() {
            cumulative += r;
            result.add_snapshot(MonthSnapshot {
                month: i as u32 + 1,
                customers: r,
                price: 1.0,
                monthly_revenue: r,
                cumulative_revenue: cumulative,
            });
        }
        result
    }

    #[test]
    fn test_summary() {
        let result = result_with_revenues(&[100.0, 150.0, 200.0]);
        let summary = result.summary();

        assert_eq!(result.last().map(|s| s.month), Some(3));
        assert_eq!(summary.total_months, 3);
        assert_eq!(summary.final_customers, 200.0);
        assert_relative_eq!(summary.final_monthly_revenue, 200.0);
        assert_relative_eq!(summary.annual_run_rate, 2400.0);
        assert_relative_eq!(summary.cumulative_revenue, 450.0);
        assert_relative_eq!(summary.revenue_multiple, 2.0);
    }

    #[test]
    fn test_summary_of_empty_result() {
        let result = ProjectionResult::new(ProjectionAssumptions::new(1.0, 0.0, 1.0, 0.0, 1));
        let summary = result.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.cumulative_revenue, 0.0);
        assert_eq!(summary.revenue_multiple, 0.0);
    }

    #[test]
    fn test_yearly_totals_with_partial_year() {
        let revenues: Vec<f64> = (1..=30).map(|m| m as f64).collect();
        let years = result_with_revenues(&revenues).yearly_totals();

        assert_eq!(years.len(), 3);
        assert_eq!(years[0].months, 12);
        assert_relative_eq!(years[0].revenue, (1..=12).sum::<u32>() as f64);
        assert_eq!(years[2].year, 3);
        assert_eq!(years[2].months, 6);
        assert_relative_eq!(years[2].revenue, (25..=30).sum::<u32>() as f64);
        assert_relative_eq!(years[2].ending_cumulative_revenue, (1..=30).sum::<u32>() as f64);
    }

    #[test]
    fn test_first_month_reaching() {
        let result = result_with_revenues(&[100.0, 150.0, 200.0]);
        assert_eq!(result.first_month_reaching(150.0), Some(2));
        assert_eq!(result.first_month_reaching(50.0), Some(1));
        assert_eq!(result.first_month_reaching(201.0), None);
    }
}
