//! Result alias used at the execution-provider boundary.

use crate::error::QueryError;

/// Result type returned by execution providers.
pub type QueryResult<T> = Result<T, QueryError>;
