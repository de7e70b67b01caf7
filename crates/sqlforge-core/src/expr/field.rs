//! Column references.

use std::collections::HashMap;

/// A column reference, optionally qualified with a table prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// Optional table qualifier.
    pub prefix: Option<String>,
    /// Column name.
    pub name: String,
}

impl Field {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn prefixed(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            name: name.into(),
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A session-scoped memo of column references.
///
/// Repeated lookups of the same name inside one statement-building session
/// return the same conceptual node, so equality comparisons and logging see a
/// stable identity. The cache is not shared between sessions and needs no
/// synchronization.
#[derive(Debug, Default)]
pub struct FieldCache {
    fields: HashMap<String, Field>,
}

impl FieldCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached field for `name`, creating it on first use.
    pub fn field(&mut self, name: &str) -> Field {
        self.fields
            .entry(String::from(name))
            .or_insert_with(|| Field::new(name))
            .clone()
    }

    /// Returns the number of distinct fields seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
