use std::fmt;

use crate::classifier::key_strategy::{KeyMatchStrategy, KeySuffix};
use crate::rules::names::collapse_separators;

/// Display folder for key columns.
pub const KEYS_FOLDER: &str = "Keys";
/// Display folder for boolean flag columns.
pub const FLAGS_FOLDER: &str = "Flags";
/// Display folder for every other column.
pub const COLUMNS_FOLDER: &str = "Columns";

/// Where a column belongs, decided from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnClass {
    /// Ends with a key token; hidden and tagged as a key.
    Key(KeySuffix),
    /// Starts with `is`.
    Flag,
    /// Anything else.
    Regular,
}

impl ColumnClass {
    /// Display folder assigned to columns of this class.
    pub fn folder(self) -> &'static str {
        match self {
            ColumnClass::Key(_) => KEYS_FOLDER,
            ColumnClass::Flag => FLAGS_FOLDER,
            ColumnClass::Regular => COLUMNS_FOLDER,
        }
    }

    /// Key token, when the column is a key.
    pub fn key_suffix(self) -> Option<KeySuffix> {
        match self {
            ColumnClass::Key(suffix) => Some(suffix),
            _ => None,
        }
    }

    /// True for key columns.
    pub fn is_key(self) -> bool {
        matches!(self, ColumnClass::Key(_))
    }
}

impl fmt::Display for ColumnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnClass::Key(suffix) => write!(f, "key ({suffix})"),
            ColumnClass::Flag => write!(f, "flag"),
            ColumnClass::Regular => write!(f, "column"),
        }
    }
}

/// Classify a column name. The key check wins over the flag check.
pub fn classify_column(name: &str, strategy: KeyMatchStrategy) -> ColumnClass {
    if let Some(suffix) = strategy.detect(name) {
        return ColumnClass::Key(suffix);
    }
    if collapse_separators(name).to_lowercase().starts_with("is") {
        return ColumnClass::Flag;
    }
    ColumnClass::Regular
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_check_wins_over_flag_prefix() {
        assert_eq!(
            classify_column("is_deleted_id", KeyMatchStrategy::SeparatorAware),
            ColumnClass::Key(KeySuffix::Id)
        );
    }

    #[test]
    fn folders_follow_class() {
        let cases = [
            ("order_id", KEYS_FOLDER),
            ("customer_sk", KEYS_FOLDER),
            ("is_active", FLAGS_FOLDER),
            ("IsCurrent", FLAGS_FOLDER),
            ("total_order_value", COLUMNS_FOLDER),
            ("paid", COLUMNS_FOLDER),
        ];
        for (name, folder) in cases {
            assert_eq!(
                classify_column(name, KeyMatchStrategy::SeparatorAware).folder(),
                folder,
                "unexpected folder for {name}"
            );
        }
    }

    #[test]
    fn leading_separators_do_not_hide_flag_prefix() {
        assert_eq!(
            classify_column("_is_active", KeyMatchStrategy::SeparatorAware),
            ColumnClass::Flag
        );
    }

    #[test]
    fn strategy_changes_classification_of_bare_suffix() {
        assert_eq!(
            classify_column("paid", KeyMatchStrategy::SeparatorAware),
            ColumnClass::Regular
        );
        assert_eq!(
            classify_column("paid", KeyMatchStrategy::LooseSuffix),
            ColumnClass::Key(KeySuffix::Id)
        );
        assert_eq!(
            classify_column("IsPaid", KeyMatchStrategy::LooseSuffix).key_suffix(),
            Some(KeySuffix::Id)
        );
    }
}
