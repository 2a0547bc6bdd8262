//! Execution-provider trait for running query plans.

use async_trait::async_trait;

use crate::result::QueryResult;
use crate::traits::plan::QueryPlan;
use crate::types::pagination::{PageRequest, PageResponse};

/// An engine that can execute query plans for entity type `T`.
///
/// Implementations own the translation from the provider-agnostic plan
/// into their native query mechanism (SQL, an in-memory scan, a remote
/// API). They are pure consumers of the plan.
#[async_trait]
pub trait SpecificationExecutor<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Return all entities matching the plan, ordered and paged as the
    /// plan requests.
    async fn find_all(&self, plan: &dyn QueryPlan<T>) -> QueryResult<Vec<T>>;

    /// Count the entities matching the plan's criteria, ignoring paging.
    async fn count(&self, plan: &dyn QueryPlan<T>) -> QueryResult<u64>;

    /// Return one page of matching entities along with the total match
    /// count. The page request's skip/take override any paging on the
    /// plan itself.
    async fn find_page(
        &self,
        plan: &dyn QueryPlan<T>,
        page: &PageRequest,
    ) -> QueryResult<PageResponse<T>>;
}
