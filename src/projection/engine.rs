//! Core projection engine for monthly customer and revenue growth

use super::snapshots::{MonthSnapshot, ProjectionResult};
use super::state::GrowthState;
use crate::assumptions::{ProjectionAssumptions, ProjectionLimits};
use crate::error::Result;

/// Run a projection with default limits and return the monthly snapshots
pub fn simulate(assumptions: &ProjectionAssumptions) -> Result<Vec<MonthSnapshot>> {
    ProjectionEngine::default()
        .project(assumptions)
        .map(|result| result.snapshots)
}

/// Main projection engine
///
/// Holds only validation limits, so one engine can serve any number of
/// concurrent projections.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    limits: ProjectionLimits,
}

impl ProjectionEngine {
    /// Create a new projection engine with given limits
    pub fn new(limits: ProjectionLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ProjectionLimits {
        &self.limits
    }

    /// Validate assumptions, then project every month of the horizon
    pub fn project(&self, assumptions: &ProjectionAssumptions) -> Result<ProjectionResult> {
        assumptions.validate(&self.limits)?;

        let mut result = ProjectionResult::new(*assumptions);
        let mut state = GrowthState::from_assumptions(assumptions);

        for _month in 1..=assumptions.horizon_months {
            state.advance_month();
            let snapshot = self.calculate_month(assumptions, &mut state);
            result.add_snapshot(snapshot);
        }

        Ok(result)
    }

    /// Apply one month of escalation, growth, and revenue accrual
    fn calculate_month(&self, assumptions: &ProjectionAssumptions, state: &mut GrowthState) -> MonthSnapshot {
        // Price steps up at the start of each new year, before growth and revenue
        if state.is_escalation_month() {
            state.price *= assumptions.annual_escalation_factor();
        }

        state.customers *= assumptions.monthly_growth_factor();

        let monthly_revenue = state.customers * state.price;
        state.cumulative_revenue += monthly_revenue;

        MonthSnapshot {
            month: state.month,
            customers: state.customers.round(),
            price: state.price,
            monthly_revenue,
            cumulative_revenue: state.cumulative_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssumptionField, ProjectionError};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn scenario(horizon_months: u32) -> ProjectionAssumptions {
        ProjectionAssumptions::new(100.0, 10.0, 50.0, 5.0, horizon_months)
    }

    #[test]
    fn test_single_month() {
        let snapshots = simulate(&scenario(1)).unwrap();

        assert_eq!(snapshots.len(), 1);
        let s = &snapshots[0];
        assert_eq!(s.month, 1);
        assert_eq!(s.customers, 110.0);
        assert_relative_eq!(s.price, 50.0);
        assert_relative_eq!(s.monthly_revenue, 5500.0, epsilon = 1e-9);
        assert_relative_eq!(s.cumulative_revenue, 5500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_first_escalation_at_month_13() {
        let snapshots = simulate(&scenario(13)).unwrap();

        assert_eq!(snapshots.len(), 13);
        assert_relative_eq!(snapshots[11].price, 50.0);
        assert_relative_eq!(snapshots[12].price, 52.5, epsilon = 1e-12);
        assert_eq!(snapshots[12].customers, (100.0 * 1.10_f64.powi(13)).round());
        assert_eq!(snapshots[12].customers, 345.0);
    }

    #[test]
    fn test_flat_projection_accumulates_linearly() {
        let flat = ProjectionAssumptions::new(100.0, 0.0, 50.0, 0.0, 24);
        let snapshots = simulate(&flat).unwrap();

        assert_relative_eq!(snapshots[23].cumulative_revenue, 100.0 * 50.0 * 24.0);
        for s in &snapshots {
            assert_eq!(s.customers, 100.0);
            assert_eq!(s.price, 50.0);
            assert_eq!(s.monthly_revenue, 5000.0);
        }
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = simulate(&scenario(0)).unwrap_err();
        assert_eq!(err.failed_fields(), vec![AssumptionField::HorizonMonths]);
    }

    #[test]
    fn test_horizon_above_limit_rejected() {
        assert!(simulate(&scenario(60)).is_ok());
        assert!(matches!(
            simulate(&scenario(61)),
            Err(ProjectionError::InvalidAssumptions(_))
        ));

        let engine = ProjectionEngine::new(ProjectionLimits {
            max_horizon_months: 120,
            ..Default::default()
        });
        assert_eq!(engine.project(&scenario(120)).unwrap().snapshots.len(), 120);
    }

    #[test]
    fn test_escalation_holds_through_year_two() {
        let snapshots = simulate(&scenario(37)).unwrap();

        for s in &snapshots[12..24] {
            assert_relative_eq!(s.price, 52.5, epsilon = 1e-12);
        }
        assert_relative_eq!(snapshots[36].price, 50.0 * 1.05 * 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_revenue_uses_unrounded_customers() {
        let a = ProjectionAssumptions::new(3.0, 10.0, 1.0, 0.0, 2);
        let snapshots = simulate(&a).unwrap();

        // 3 * 1.1 = 3.3 customers, displayed as 3
        assert_eq!(snapshots[0].customers, 3.0);
        assert_relative_eq!(snapshots[0].monthly_revenue, 3.3, epsilon = 1e-12);
        // Growth chains from 3.3, not 3
        assert_relative_eq!(snapshots[1].monthly_revenue, 3.63, epsilon = 1e-12);
        assert_eq!(snapshots[1].customers, 4.0);
    }

    #[test]
    fn test_project_echoes_assumptions() {
        let a = scenario(6);
        let result = ProjectionEngine::default().project(&a).unwrap();
        assert_eq!(result.assumptions, a);
        assert_eq!(result.summary().total_months, 6);
    }

    fn valid_assumptions() -> impl Strategy<Value = ProjectionAssumptions> {
        (0.5f64..10_000.0, 0.0f64..50.0, 0.5f64..1_000.0, 0.0f64..30.0, 1u32..=60).prop_map(
            |(customers, growth, price, increase, months)| {
                ProjectionAssumptions::new(customers, growth, price, increase, months)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_one_snapshot_per_month_in_order(a in valid_assumptions()) {
            let snapshots = simulate(&a).unwrap();
            prop_assert_eq!(snapshots.len(), a.horizon_months as usize);
            for (i, s) in snapshots.iter().enumerate() {
                prop_assert_eq!(s.month, i as u32 + 1);
            }
        }

        #[test]
        fn prop_cumulative_revenue_strictly_increases(a in valid_assumptions()) {
            let snapshots = simulate(&a).unwrap();
            let mut previous = 0.0;
            for s in &snapshots {
                prop_assert!(s.monthly_revenue > 0.0);
                prop_assert!(s.cumulative_revenue > previous);
                previous = s.cumulative_revenue;
            }
        }

        #[test]
        fn prop_price_steps_once_per_year(a in valid_assumptions()) {
            let snapshots = simulate(&a).unwrap();
            for s in &snapshots {
                let steps = ((s.month - 1) / 12) as i32;
                let expected = a.initial_price_per_customer * a.annual_escalation_factor().powi(steps);
                prop_assert!((s.price - expected).abs() <= expected * 1e-12);
            }
        }

        #[test]
        fn prop_simulate_is_deterministic(a in valid_assumptions()) {
            prop_assert_eq!(simulate(&a).unwrap(), simulate(&a).unwrap());
        }
    }
}
