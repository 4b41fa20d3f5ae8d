//! Projection engine for monthly customer and revenue growth

mod engine;
mod snapshots;
mod state;

pub use engine::{simulate, ProjectionEngine};
pub use snapshots::{MonthSnapshot, ProjectionResult, ProjectionSummary, YearlyTotal};
pub use state::GrowthState;
