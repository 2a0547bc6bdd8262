//! Transport-level filter descriptors supplied by clients.
//!
//! These are plain data: field names and values arrive as untrusted
//! strings and only become predicates through a [`FilterMap`] whitelist.
//!
//! [`FilterMap`]: crate::filter_map::FilterMap

use serde::{Deserialize, Serialize};

/// Filter operator for whitelisted field filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Exact (or whitelisted case-insensitive) equality.
    Equals,
    /// Substring containment on string fields.
    Contains,
    /// Range check between two optional bounds.
    Between,
}

/// A single client-supplied filter term.
///
/// Depending on `operator`, either `value` (Equals/Contains) or the
/// `from`/`to` pair (Between) is meaningful; the other is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFilter {
    /// The transport-facing field name, mapped through a whitelist.
    pub field: String,
    /// The comparison operator.
    pub operator: FilterOperator,
    /// Raw value for Equals/Contains.
    #[serde(default)]
    pub value: Option<String>,
    /// Raw lower bound for Between.
    #[serde(default)]
    pub from: Option<String>,
    /// Raw upper bound for Between.
    #[serde(default)]
    pub to: Option<String>,
    /// Whether the lower bound is inclusive.
    #[serde(default = "default_true")]
    pub from_inclusive: bool,
    /// Whether the upper bound is inclusive.
    #[serde(default = "default_true")]
    pub to_inclusive: bool,
}

impl FieldFilter {
    /// Shorthand for an equality term.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Equals,
            value: Some(value.into()),
            from: None,
            to: None,
            from_inclusive: true,
            to_inclusive: true,
        }
    }

    /// Shorthand for a substring term.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            operator: FilterOperator::Contains,
            ..Self::equals(field, value)
        }
    }

    /// Shorthand for a between term with inclusive bounds.
    pub fn between(
        field: impl Into<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Between,
            value: None,
            from,
            to,
            from_inclusive: true,
            to_inclusive: true,
        }
    }
}

/// An ordered set of transport-level filter terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Filter terms in client-supplied order.
    #[serde(default)]
    pub filters: Vec<FieldFilter>,
}

impl FilterOptions {
    /// Create filter options from a list of terms.
    pub fn new(filters: Vec<FieldFilter>) -> Self {
        Self { filters }
    }

    /// Returns true when at least one term is present.
    pub fn has_any(&self) -> bool {
        !self.filters.is_empty()
    }
}

fn default_true() -> bool {
    true
}
