//! Plan execution over an in-memory collection.

use std::cmp::Ordering;

use async_trait::async_trait;
use tracing::trace;

use queryspec_core::types::pagination::{PageRequest, PageResponse};
use queryspec_core::{QueryPlan, QueryResult, SpecificationExecutor};

/// An execution provider backed by an owned `Vec<T>`.
///
/// Filtering evaluates the plan's predicate directly; sorting is a
/// stable multi-key sort in precedence order. Include paths have no
/// meaning in memory and are ignored, as is the read-only flag.
pub struct MemoryExecutor<T> {
    items: Vec<T>,
}

impl<T> MemoryExecutor<T> {
    /// Create an executor over the given items.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of items held, before any filtering.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when no items are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn select<'a>(&'a self, plan: &dyn QueryPlan<T>) -> Vec<&'a T> {
        if !plan.includes().is_empty() {
            trace!(paths = ?plan.includes(), "include paths have no effect in memory");
        }

        let mut rows: Vec<&T> = match plan.criteria() {
            Some(criteria) => self.items.iter().filter(|e| criteria.eval(e)).collect(),
            None => self.items.iter().collect(),
        };

        if !plan.order_by().is_empty() {
            rows.sort_by(|a, b| {
                for order in plan.order_by() {
                    let mut ord = order.key.compare(a, b);
                    if order.direction.is_descending() {
                        ord = ord.reverse();
                    }
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            });
        }
        rows
    }
}

fn page_of<T: Clone>(rows: Vec<&T>, skip: u64, take: Option<u64>) -> Vec<T> {
    let skip = usize::try_from(skip).unwrap_or(usize::MAX);
    let iter = rows.into_iter().skip(skip);
    match take {
        Some(take) => {
            let take = usize::try_from(take).unwrap_or(usize::MAX);
            iter.take(take).cloned().collect()
        }
        None => iter.cloned().collect(),
    }
}

#[async_trait]
impl<T> SpecificationExecutor<T> for MemoryExecutor<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn find_all(&self, plan: &dyn QueryPlan<T>) -> QueryResult<Vec<T>> {
        let rows = self.select(plan);
        Ok(page_of(rows, plan.skip().unwrap_or(0), plan.take()))
    }

    async fn count(&self, plan: &dyn QueryPlan<T>) -> QueryResult<u64> {
        Ok(self.select(plan).len() as u64)
    }

    async fn find_page(
        &self,
        plan: &dyn QueryPlan<T>,
        page: &PageRequest,
    ) -> QueryResult<PageResponse<T>> {
        let rows = self.select(plan);
        let total = rows.len() as u64;
        let items = page_of(rows, page.skip(), Some(page.take()));
        Ok(PageResponse::new(
            items,
            total,
            page.page_number.max(1),
            page.take(),
        ))
    }
}
