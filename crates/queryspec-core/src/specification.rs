//! Mutable query-plan builder for a single query intent.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;
use crate::traits::plan::QueryPlan;
use crate::types::pagination::PageRequest;
use crate::types::sorting::SortDirection;

/// A type-erased ordering key: compares two entities by some extracted
/// value. Built once from a key-extraction closure, shared cheaply.
pub struct SortKey<T>(Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>);

impl<T> Clone for SortKey<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortKey(..)")
    }
}

impl<T> SortKey<T> {
    /// Build a sort key from a totally-ordered extracted value.
    pub fn by<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self(Arc::new(move |a, b| key(a).cmp(&key(b))))
    }

    /// Build a sort key from a partially-ordered value (e.g. floats).
    /// Incomparable pairs are treated as equal.
    pub fn by_partial<K, F>(key: F) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self(Arc::new(move |a, b| {
            key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal)
        }))
    }

    /// Compare two entities under this key (ascending).
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// One entry in a specification's ordering sequence.
#[derive(Debug, Clone)]
pub struct OrderBy<T> {
    /// The comparison key.
    pub key: SortKey<T>,
    /// Ascending or descending.
    pub direction: SortDirection,
}

/// Composite query plan builder: criteria, include paths, multi-key
/// ordering, paging, and a read-only flag.
///
/// A specification is constructed once per query intent, mutated through
/// the fluent builder methods, then handed read-only (via [`QueryPlan`])
/// to an execution provider. Composition is append-only: nothing removes
/// previously added criteria, includes, or ordering.
pub struct Specification<T> {
    criteria: Option<Predicate<T>>,
    includes: Vec<String>,
    order_by: Vec<OrderBy<T>>,
    skip: Option<u64>,
    take: Option<u64>,
    read_only: bool,
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("criteria", &self.criteria.is_some())
            .field("includes", &self.includes)
            .field("order_by", &self.order_by.len())
            .field("skip", &self.skip)
            .field("take", &self.take)
            .field("read_only", &self.read_only)
            .finish()
    }
}

impl<T> Specification<T> {
    /// Create an empty specification: no criteria, no ordering, no
    /// paging, read-only.
    pub fn new() -> Self {
        Self {
            criteria: None,
            includes: Vec::new(),
            order_by: Vec::new(),
            skip: None,
            take: None,
            read_only: true,
        }
    }

    /// AND-compose a predicate into the criteria. The first call sets
    /// the initial predicate; later calls append AND terms.
    pub fn and_where(&mut self, predicate: Predicate<T>) -> &mut Self
    where
        T: 'static,
    {
        self.criteria = Some(match self.criteria.take() {
            Some(existing) => existing.and(&predicate),
            None => predicate,
        });
        self
    }

    /// Append a navigation path for the provider to eager-load.
    /// Providers without that concept may ignore it.
    pub fn include(&mut self, path: impl Into<String>) -> &mut Self {
        self.includes.push(path.into());
        self
    }

    /// Append an ascending order key. Insertion order is precedence:
    /// the first key added is the primary sort.
    pub fn order_by_asc(&mut self, key: SortKey<T>) -> &mut Self {
        self.order_by.push(OrderBy {
            key,
            direction: SortDirection::Asc,
        });
        self
    }

    /// Append a descending order key.
    pub fn order_by_desc(&mut self, key: SortKey<T>) -> &mut Self {
        self.order_by.push(OrderBy {
            key,
            direction: SortDirection::Desc,
        });
        self
    }

    /// Set skip/take paging values, overwriting any previous paging.
    pub fn paginate(&mut self, skip: u64, take: u64) -> &mut Self {
        self.skip = Some(skip);
        self.take = Some(take);
        self
    }

    /// Set paging from a transport-level page request.
    pub fn page(&mut self, page: &PageRequest) -> &mut Self {
        self.paginate(page.skip(), page.take())
    }

    /// Ask the provider to track returned entities for mutation.
    /// Specifications default to read-only.
    pub fn with_tracking(&mut self) -> &mut Self {
        self.read_only = false;
        self
    }
}

impl<T> QueryPlan<T> for Specification<T> {
    fn criteria(&self) -> Option<&Predicate<T>> {
        self.criteria.as_ref()
    }

    fn includes(&self) -> &[String] {
        &self.includes
    }

    fn order_by(&self) -> &[OrderBy<T>] {
        &self.order_by
    }

    fn skip(&self) -> Option<u64> {
        self.skip
    }

    fn take(&self) -> Option<u64> {
        self.take
    }

    fn read_only(&self) -> bool {
        self.read_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: &'static str,
        size: i64,
    }

    #[test]
    fn test_new_specification_is_empty_and_read_only() {
        let spec = Specification::<Item>::new();
        assert!(spec.criteria().is_none());
        assert!(spec.includes().is_empty());
        assert!(spec.order_by().is_empty());
        assert_eq!(spec.skip(), None);
        assert_eq!(spec.take(), None);
        assert!(spec.read_only());
    }

    #[test]
    fn test_and_where_sets_then_composes() {
        let mut spec = Specification::<Item>::new();
        spec.and_where(Predicate::new(|i: &Item| i.size > 0));
        spec.and_where(Predicate::new(|i: &Item| i.name.starts_with('a')));

        let criteria = spec.criteria().expect("criteria set");
        assert!(criteria.eval(&Item { name: "abc", size: 1 }));
        assert!(!criteria.eval(&Item { name: "abc", size: 0 }));
        assert!(!criteria.eval(&Item { name: "xyz", size: 1 }));
    }

    #[test]
    fn test_include_appends_in_insertion_order() {
        let mut spec = Specification::<Item>::new();
        spec.include("department").include("department.manager");
        assert_eq!(spec.includes(), ["department", "department.manager"]);
    }

    #[test]
    fn test_order_by_preserves_insertion_order() {
        let mut spec = Specification::<Item>::new();
        spec.order_by_asc(SortKey::by(|i: &Item| i.name));
        spec.order_by_desc(SortKey::by(|i: &Item| i.size));

        assert_eq!(spec.order_by().len(), 2);
        assert_eq!(spec.order_by()[0].direction, SortDirection::Asc);
        assert_eq!(spec.order_by()[1].direction, SortDirection::Desc);
    }

    #[test]
    fn test_paginate_overwrites() {
        let mut spec = Specification::<Item>::new();
        spec.paginate(0, 10).paginate(20, 5);
        assert_eq!(spec.skip(), Some(20));
        assert_eq!(spec.take(), Some(5));
    }

    #[test]
    fn test_page_forwards_request_skip_take() {
        let mut spec = Specification::<Item>::new();
        spec.page(&PageRequest {
            page_number: 3,
            page_size: 10,
            max_page_size: 100,
        });
        assert_eq!(spec.skip(), Some(20));
        assert_eq!(spec.take(), Some(10));
    }

    #[test]
    fn test_with_tracking_flips_read_only() {
        let mut spec = Specification::<Item>::new();
        spec.with_tracking();
        assert!(!spec.read_only());
    }

    #[test]
    fn test_sort_key_compare() {
        let key = SortKey::by(|i: &Item| i.size);
        let small = Item { name: "a", size: 1 };
        let big = Item { name: "b", size: 2 };
        assert_eq!(key.compare(&small, &big), Ordering::Less);
        assert_eq!(key.compare(&big, &small), Ordering::Greater);
        assert_eq!(key.compare(&small, &small), Ordering::Equal);
    }
}
