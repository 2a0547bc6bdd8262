//! Read-only query-plan contract handed to execution providers.

use crate::predicate::Predicate;
use crate::specification::OrderBy;

/// The read-only view of a finished specification.
///
/// Providers translate this into their native query mechanism and
/// return matching entities/counts; they never mutate the plan.
pub trait QueryPlan<T>: Send + Sync {
    /// Filtering criteria; `None` means "no filtering".
    fn criteria(&self) -> Option<&Predicate<T>>;

    /// Navigation paths to eager-load, in insertion order. Providers
    /// without that concept may ignore them.
    fn includes(&self) -> &[String];

    /// Ordering keys in precedence order (first is primary).
    fn order_by(&self) -> &[OrderBy<T>];

    /// Number of records to skip, if paging applies.
    fn skip(&self) -> Option<u64>;

    /// Number of records to take, if paging applies.
    fn take(&self) -> Option<u64>;

    /// Whether results are read-only for the provider. Only relevant
    /// for providers with change tracking.
    fn read_only(&self) -> bool;
}
