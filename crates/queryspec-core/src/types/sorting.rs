//! Transport-level sorting descriptors.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Returns true for descending order.
    pub fn is_descending(&self) -> bool {
        matches!(self, Self::Desc)
    }
}

/// A sort term consisting of a transport-facing field name and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by, mapped through a whitelist.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// An ordered multi-field sort; the first field has highest precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSortOptions {
    /// Sort terms in precedence order.
    #[serde(default)]
    pub fields: Vec<SortField>,
}

impl MultiSortOptions {
    /// Returns true when at least one sort field is present.
    pub fn has_any(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Parse the comma-separated sort syntax used on the wire:
    /// `"lastName,-createdOn"`. Tokens are trimmed, empty tokens are
    /// dropped, and a leading `-` marks descending.
    pub fn parse(csv: &str) -> Self {
        let mut fields = Vec::new();
        for token in csv.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let (name, direction) = match token.strip_prefix('-') {
                Some(rest) => (rest.trim(), SortDirection::Desc),
                None => (token, SortDirection::Asc),
            };
            if name.is_empty() {
                continue;
            }
            fields.push(SortField::new(name, direction));
        }
        Self { fields }
    }
}
