use std::fmt;

/// A single mutation applied by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Table renamed.
    TableRenamed {
        /// Name before the pass.
        from: String,
        /// Name after the pass.
        to: String,
    },
    /// Column renamed.
    ColumnRenamed {
        /// Owning table, under its normalized name.
        table: String,
        /// Name before the pass.
        from: String,
        /// Name after the pass.
        to: String,
    },
    /// Column moved to another display folder.
    FolderChanged {
        /// Owning table, under its normalized name.
        table: String,
        /// Column, under its normalized name.
        column: String,
        /// Folder before the pass.
        from: String,
        /// Folder after the pass.
        to: String,
    },
    /// Key attributes (hidden, MDX visibility, key flag, description) updated.
    KeyTagged {
        /// Owning table, under its normalized name.
        table: String,
        /// Column, under its normalized name.
        column: String,
    },
}

impl Change {
    /// True for table and column renames.
    pub fn is_rename(&self) -> bool {
        matches!(
            self,
            Change::TableRenamed { .. } | Change::ColumnRenamed { .. }
        )
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::TableRenamed { from, to } => write!(f, "Renamed table: {from} -> {to}"),
            Change::ColumnRenamed { table, from, to } => {
                write!(f, "Renamed: {table}.{from} -> {to}")
            }
            Change::FolderChanged {
                table, column, to, ..
            } => write!(f, "Moved: {table}.{column} -> {to}"),
            Change::KeyTagged { table, column } => write!(f, "Marked key: {table}.{column}"),
        }
    }
}

/// Why a table was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Listed in the ignored-table set.
    Ignored,
    /// Hidden, and the pass was configured to skip hidden tables.
    Hidden,
    /// Blank name.
    Unnamed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Ignored => write!(f, "ignored"),
            SkipReason::Hidden => write!(f, "hidden"),
            SkipReason::Unnamed => write!(f, "unnamed"),
        }
    }
}

/// Result of normalizing one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// Table left untouched.
    Skipped(SkipReason),
    /// Table processed.
    Normalized {
        /// Mutations applied, in order.
        changes: Vec<Change>,
        /// Present columns visited.
        columns_visited: usize,
        /// Columns classified as keys.
        key_columns: usize,
    },
}

/// A table the pass left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTable {
    /// Table name as found.
    pub name: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Summary of one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    /// Tables processed.
    pub tables_visited: usize,
    /// Columns processed across all visited tables.
    pub columns_visited: usize,
    /// Columns classified as keys.
    pub key_columns: usize,
    /// Tables left untouched.
    pub skipped: Vec<SkippedTable>,
    /// Mutations applied, in order.
    pub changes: Vec<Change>,
}

impl NormalizationReport {
    /// True when the pass mutated nothing.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of table renames.
    pub fn tables_renamed(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::TableRenamed { .. }))
            .count()
    }

    /// Number of column renames.
    pub fn columns_renamed(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::ColumnRenamed { .. }))
            .count()
    }

    /// Renames only, in order.
    pub fn renames(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(|c| c.is_rename())
    }

    /// Fold one table's outcome into the report.
    pub fn record(&mut self, table_name: &str, outcome: TableOutcome) {
        match outcome {
            TableOutcome::Skipped(reason) => self.skipped.push(SkippedTable {
                name: table_name.to_string(),
                reason,
            }),
            TableOutcome::Normalized {
                changes,
                columns_visited,
                key_columns,
            } => {
                self.tables_visited += 1;
                self.columns_visited += columns_visited;
                self.key_columns += key_columns;
                self.changes.extend(changes);
            }
        }
    }
}
