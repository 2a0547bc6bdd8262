//! Transport-level type definitions shared across the QuerySpec workspace.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{FieldFilter, FilterOperator, FilterOptions};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{MultiSortOptions, SortDirection, SortField};
