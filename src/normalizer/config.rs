use crate::classifier::key_strategy::KeyMatchStrategy;
use crate::normalizer::ignored_tables::IgnoredTables;

/// Settings for one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Tables left untouched, columns included.
    pub ignored_tables: IgnoredTables,
    /// How key columns are recognized.
    pub key_strategy: KeyMatchStrategy,
    /// Skip tables the host marks as hidden.
    pub skip_hidden_tables: bool,
}

impl NormalizerConfig {
    /// Replace the key-match strategy.
    pub fn with_key_strategy(mut self, key_strategy: KeyMatchStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }

    /// Replace the ignored-table set.
    pub fn with_ignored_tables(mut self, ignored_tables: IgnoredTables) -> Self {
        self.ignored_tables = ignored_tables;
        self
    }

    /// Toggle skipping of hidden tables.
    pub fn with_skip_hidden_tables(mut self, skip_hidden_tables: bool) -> Self {
        self.skip_hidden_tables = skip_hidden_tables;
        self
    }
}
