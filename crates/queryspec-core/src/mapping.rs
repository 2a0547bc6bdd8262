//! Orchestration gluing transport-level filter/sort input to a
//! specification.
//!
//! Everything here degrades gracefully: blank field names, unregistered
//! fields, and unparsable values are dropped without error, observable
//! only through `tracing` debug events.

use std::collections::HashMap;

use tracing::debug;

use crate::filter_map::FilterMap;
use crate::specification::{SortKey, Specification};
use crate::types::filter::FilterOptions;
use crate::types::sorting::{MultiSortOptions, SortDirection};

/// Case-insensitive whitelist of sortable fields for one entity type.
pub struct SortWhitelist<T> {
    keys: HashMap<String, SortKey<T>>,
}

impl<T> Default for SortWhitelist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortWhitelist<T> {
    /// Create an empty whitelist.
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    /// Register a sortable field under its transport-facing name.
    pub fn add(&mut self, field: &str, key: SortKey<T>) -> &mut Self {
        self.keys.insert(field.to_lowercase(), key);
        self
    }

    /// Look up a sort key; field matching is case-insensitive.
    pub fn get(&self, field: &str) -> Option<&SortKey<T>> {
        self.keys.get(&field.to_lowercase())
    }
}

impl<T: 'static> Specification<T> {
    /// Apply client-supplied filter terms through a whitelist.
    ///
    /// A fresh [`FilterMap`] is built via `configure` for each call;
    /// terms are processed in input order. Terms with a blank field
    /// name, no registered rule, or an unusable value contribute
    /// nothing.
    pub fn apply_filters<F>(&mut self, filters: &FilterOptions, configure: F) -> &mut Self
    where
        F: FnOnce(&mut FilterMap<T>),
    {
        if !filters.has_any() {
            return self;
        }

        let mut map = FilterMap::new();
        configure(&mut map);

        for term in &filters.filters {
            if term.field.trim().is_empty() {
                debug!("dropping filter term: blank field name");
                continue;
            }
            match map.get(&term.field, term.operator) {
                Some(apply) => apply(self, term),
                None => {
                    debug!(
                        field = %term.field,
                        operator = ?term.operator,
                        "dropping filter term: not whitelisted"
                    );
                }
            }
        }
        self
    }

    /// Apply client-supplied sort fields through a whitelist.
    ///
    /// Whitelisted fields append order keys in input order; unknown
    /// fields are dropped. When no field matches (including empty
    /// input), `default_order` is applied instead — a single match
    /// suppresses the entire default.
    pub fn apply_sorts(
        &mut self,
        sort: &MultiSortOptions,
        whitelist: &SortWhitelist<T>,
        default_order: &[(SortKey<T>, SortDirection)],
    ) -> &mut Self {
        let mut matched = false;
        for field in &sort.fields {
            match whitelist.get(&field.field) {
                Some(key) => {
                    if field.direction.is_descending() {
                        self.order_by_desc(key.clone());
                    } else {
                        self.order_by_asc(key.clone());
                    }
                    matched = true;
                }
                None => {
                    debug!(field = %field.field, "dropping sort field: not whitelisted");
                }
            }
        }

        if !matched {
            for (key, direction) in default_order {
                if direction.is_descending() {
                    self.order_by_desc(key.clone());
                } else {
                    self.order_by_asc(key.clone());
                }
            }
        }
        self
    }
}
