//! Trait seams between the specification builder and execution providers.

pub mod executor;
pub mod plan;

pub use executor::SpecificationExecutor;
pub use plan::QueryPlan;
