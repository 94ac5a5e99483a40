use std::collections::BTreeSet;

use crate::rules::names::fold_name;

/// Table names excluded from normalization when no other list is given.
pub const DEFAULT_IGNORED_TABLES: [&str; 3] = ["_Measures", "Audit_Log", "Technical_Metadata"];

/// Case-insensitive set of table names that bypass normalization entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredTables {
    /// Folded (trimmed, lowercased) table names.
    names: BTreeSet<String>,
}

impl IgnoredTables {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// The built-in set: [`DEFAULT_IGNORED_TABLES`].
    pub fn builtin() -> Self {
        DEFAULT_IGNORED_TABLES.into_iter().collect()
    }

    /// Add a table name. Blank names are ignored.
    pub fn insert(&mut self, name: &str) {
        let folded = fold_name(name);
        if !folded.is_empty() {
            self.names.insert(folded);
        }
    }

    /// True when `table_name` matches an entry, ignoring case and padding.
    pub fn contains(&self, table_name: &str) -> bool {
        self.names.contains(&fold_name(table_name))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no table is ignored.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Folded entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoredTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<S: AsRef<str>> Extend<S> for IgnoredTables {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoredTables {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
