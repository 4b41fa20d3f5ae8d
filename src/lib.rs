//! Founder Projections - customer and revenue growth projections for early-stage businesses
//!
//! This library provides:
//! - Month-by-month compounding projections of customers, price, and revenue
//! - Validation of projection assumptions against configurable limits
//! - A static multi-currency table and display formatting
//! - Summary statistics, yearly rollups, and revenue milestones
//! - Batch scenario evaluation and CSV/JSON export

pub mod error;
pub mod assumptions;
pub mod currency;
pub mod projection;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{AssumptionField, AssumptionViolation, DataError, ProjectionError};
pub use assumptions::{ProjectionAssumptions, ProjectionLimits, Scenario};
pub use currency::{format, CurrencyCode, CurrencyDescriptor, CurrencyTable};
pub use projection::{simulate, MonthSnapshot, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use scenario::{ScenarioOutcome, ScenarioRunner};
