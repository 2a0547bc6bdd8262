//! Whitelist mapping from transport-level filter terms to predicates.
//!
//! A [`FilterMap`] registers, per `(field name, operator)` pair, a typed
//! rule that parses a raw string value and AND-composes the resulting
//! predicate into a [`Specification`]. Only explicitly registered
//! mappings are reachable from client input; everything else is inert.
//!
//! Failure policy: a blank value, a failed parse, or an unregistered
//! field/operator never raises an error and never contributes a clause.
//! Malformed or malicious input degrades to "no filter applied".

use std::collections::HashMap;

use tracing::debug;

use crate::predicate::Predicate;
use crate::range::RangeFilter;
use crate::specification::Specification;
use crate::types::filter::{FieldFilter, FilterOperator};

/// Text matching options for string filters.
#[derive(Debug, Clone, Copy)]
pub struct TextMatch {
    /// Fold both sides to lowercase before comparing.
    pub case_insensitive: bool,
    /// Trim the client-supplied value before comparing.
    pub trim: bool,
}

impl Default for TextMatch {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            trim: true,
        }
    }
}

type ApplyRule<T> = Box<dyn Fn(&mut Specification<T>, &FieldFilter) + Send + Sync>;

/// Per-entity whitelist of filterable fields.
///
/// Built fresh per request via a configuration closure; never shared
/// mutable state between requests.
pub struct FilterMap<T> {
    rules: HashMap<(String, FilterOperator), ApplyRule<T>>,
}

impl<T> Default for FilterMap<T> {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }
}

impl<T: 'static> FilterMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    fn key(field: &str, operator: FilterOperator) -> (String, FilterOperator) {
        (field.to_lowercase(), operator)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Register an Equals rule for any property type.
    ///
    /// The raw value is handed to `parse`; a blank value or failed parse
    /// leaves the specification untouched.
    pub fn for_equals<P, S, F>(&mut self, field: &str, selector: S, parse: F) -> &mut Self
    where
        P: PartialEq + Send + Sync + 'static,
        S: Fn(&T) -> P + Send + Sync + Clone + 'static,
        F: Fn(&str) -> Option<P> + Send + Sync + 'static,
    {
        self.rules.insert(
            Self::key(field, FilterOperator::Equals),
            Box::new(move |spec, term| {
                let Some(raw) = non_blank(term.value.as_deref()) else {
                    return;
                };
                let Some(value) = parse(raw) else {
                    debug!(field = %term.field, "dropping equals term: unparsable value");
                    return;
                };
                let selector = selector.clone();
                spec.and_where(Predicate::new(move |entity| selector(entity) == value));
            }),
        );
        self
    }

    /// Register an Equals rule for a nullable string property with the
    /// default matching options (case-insensitive, trimmed).
    pub fn for_string_equals<S>(&mut self, field: &str, selector: S) -> &mut Self
    where
        S: Fn(&T) -> Option<&str> + Send + Sync + Clone + 'static,
    {
        self.for_string_equals_with(field, selector, TextMatch::default())
    }

    /// Register an Equals rule for a nullable string property.
    ///
    /// A `None` property value never matches.
    pub fn for_string_equals_with<S>(
        &mut self,
        field: &str,
        selector: S,
        options: TextMatch,
    ) -> &mut Self
    where
        S: Fn(&T) -> Option<&str> + Send + Sync + Clone + 'static,
    {
        self.rules.insert(
            Self::key(field, FilterOperator::Equals),
            Box::new(move |spec, term| {
                let Some(raw) = non_blank(term.value.as_deref()) else {
                    return;
                };
                let wanted = normalize(raw, options);
                let selector = selector.clone();
                spec.and_where(Predicate::new(move |entity| {
                    selector(entity).is_some_and(|actual| {
                        if options.case_insensitive {
                            actual.to_lowercase() == wanted
                        } else {
                            actual == wanted
                        }
                    })
                }));
            }),
        );
        self
    }

    /// Register a Contains rule for a nullable string property with the
    /// default matching options (case-insensitive, trimmed).
    pub fn for_contains<S>(&mut self, field: &str, selector: S) -> &mut Self
    where
        S: Fn(&T) -> Option<&str> + Send + Sync + Clone + 'static,
    {
        self.for_contains_with(field, selector, TextMatch::default())
    }

    /// Register a Contains (substring) rule for a nullable string
    /// property.
    ///
    /// A `None` property value never matches.
    pub fn for_contains_with<S>(
        &mut self,
        field: &str,
        selector: S,
        options: TextMatch,
    ) -> &mut Self
    where
        S: Fn(&T) -> Option<&str> + Send + Sync + Clone + 'static,
    {
        self.rules.insert(
            Self::key(field, FilterOperator::Contains),
            Box::new(move |spec, term| {
                let Some(raw) = non_blank(term.value.as_deref()) else {
                    return;
                };
                let needle = normalize(raw, options);
                let selector = selector.clone();
                spec.and_where(Predicate::new(move |entity| {
                    selector(entity).is_some_and(|actual| {
                        if options.case_insensitive {
                            actual.to_lowercase().contains(&needle)
                        } else {
                            actual.contains(needle.as_str())
                        }
                    })
                }));
            }),
        );
        self
    }

    /// Register a Between rule for a comparable property (numbers,
    /// dates).
    ///
    /// `from` and `to` are parsed independently; either may be absent or
    /// unparsable. When neither bound survives parsing, the term is
    /// skipped entirely. Inclusivity flags come from the transport term.
    pub fn for_between<P, S, F>(&mut self, field: &str, selector: S, parse: F) -> &mut Self
    where
        P: PartialOrd + Clone + Send + Sync + 'static,
        S: Fn(&T) -> P + Send + Sync + Clone + 'static,
        F: Fn(&str) -> Option<P> + Send + Sync + 'static,
    {
        self.rules.insert(
            Self::key(field, FilterOperator::Between),
            Box::new(move |spec, term| {
                let from = non_blank(term.from.as_deref()).and_then(|raw| parse(raw));
                let to = non_blank(term.to.as_deref()).and_then(|raw| parse(raw));
                if from.is_none() && to.is_none() {
                    debug!(field = %term.field, "dropping between term: no usable bound");
                    return;
                }
                let range = RangeFilter {
                    from,
                    from_inclusive: term.from_inclusive,
                    to,
                    to_inclusive: term.to_inclusive,
                };
                spec.apply_range(range, selector.clone());
            }),
        );
        self
    }

    /// Look up the rule registered for a field/operator pair. Field
    /// matching is case-insensitive; a miss means "ignore this term".
    pub(crate) fn get(&self, field: &str, operator: FilterOperator) -> Option<&ApplyRule<T>> {
        self.rules.get(&Self::key(field, operator))
    }
}

/// Returns the input when it holds any non-whitespace content.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn normalize(raw: &str, options: TextMatch) -> String {
    let value = if options.trim { raw.trim() } else { raw };
    if options.case_insensitive {
        value.to_lowercase()
    } else {
        value.to_owned()
    }
}
