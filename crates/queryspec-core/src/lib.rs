//! # queryspec-core
//!
//! Persistence-agnostic query specifications and safe filter mapping.
//!
//! A [`Specification`] describes *which* records, in *what* order, and
//! *how paginated* as a first-class composable value. The [`FilterMap`]
//! whitelist translates untrusted transport-level filter descriptors
//! (field name + operator + raw string values) into specification
//! predicates without ever exposing internal field names or executing
//! client-controlled code. Execution is delegated to a provider behind
//! the [`QueryPlan`] / [`SpecificationExecutor`] seam.
//!
//! This crate has **no** internal dependencies on other QuerySpec crates.

pub mod error;
pub mod filter_map;
pub mod mapping;
pub mod parsers;
pub mod predicate;
pub mod range;
pub mod result;
pub mod specification;
pub mod traits;
pub mod types;

pub use error::QueryError;
pub use filter_map::{FilterMap, TextMatch};
pub use mapping::SortWhitelist;
pub use predicate::Predicate;
pub use range::RangeFilter;
pub use result::QueryResult;
pub use specification::{OrderBy, SortKey, Specification};
pub use traits::executor::SpecificationExecutor;
pub use traits::plan::QueryPlan;
pub use types::filter::{FieldFilter, FilterOperator, FilterOptions};
pub use types::pagination::{PageRequest, PageResponse};
pub use types::sorting::{MultiSortOptions, SortDirection, SortField};
