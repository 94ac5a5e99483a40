//! The in-place normalization pass over a host model.
//!
//! Each present table is visited once: skipped when ignored (or hidden, if so
//! configured), otherwise renamed and then each of its present columns is
//! renamed, moved into its display folder, and, for keys, hidden and
//! described. Null entries and blank names are skipped silently.

/// Change log entries, per-table outcomes, and the pass summary.
pub mod change;
/// Settings for a normalization pass.
pub mod config;
/// Case-insensitive set of tables excluded from normalization.
pub mod ignored_tables;

use tracing::{debug, info};

use crate::classifier::column_classifier::{classify_column, ColumnClass};
use crate::classifier::key_strategy::KeyMatchStrategy;
use crate::model::{Column, Model, Table};
use crate::rules::names::{
    collapse_separators, key_description, key_subject, normalize_column_name,
    normalize_table_name,
};

pub use change::{Change, NormalizationReport, SkipReason, SkippedTable, TableOutcome};
pub use config::NormalizerConfig;
pub use ignored_tables::IgnoredTables;

/// Normalize every table of a model in place.
pub fn normalize_model(model: &mut Model, config: &NormalizerConfig) -> NormalizationReport {
    normalize_tables(&mut model.tables, config)
}

/// Normalize a host table collection in place. `None` entries are skipped.
pub fn normalize_tables(
    tables: &mut [Option<Table>],
    config: &NormalizerConfig,
) -> NormalizationReport {
    let mut report = NormalizationReport::default();
    for table in tables.iter_mut().flatten() {
        let original_name = table.name.clone();
        let outcome = normalize_table(table, config);
        report.record(&original_name, outcome);
    }
    report
}

/// Normalize one table and its columns in place.
pub fn normalize_table(table: &mut Table, config: &NormalizerConfig) -> TableOutcome {
    if let Some(reason) = skip_reason(table, config) {
        debug!(table = %table.name, %reason, "Skipping table");
        return TableOutcome::Skipped(reason);
    }

    let mut changes = Vec::new();
    let new_name = normalize_table_name(&table.name);
    if new_name != table.name {
        let from = std::mem::replace(&mut table.name, new_name);
        let change = Change::TableRenamed {
            from,
            to: table.name.clone(),
        };
        info!("{change}");
        changes.push(change);
    }

    let mut columns_visited = 0;
    let mut key_columns = 0;
    for column in table.columns.iter_mut().flatten() {
        if is_blank(&column.name) {
            continue;
        }
        columns_visited += 1;
        let class = classify_column(&column.name, config.key_strategy);
        if class.is_key() {
            key_columns += 1;
        }
        changes.extend(apply_class(column, &table.name, class));
    }

    TableOutcome::Normalized {
        changes,
        columns_visited,
        key_columns,
    }
}

/// Normalize one column in place.
///
/// `table_name` is the owning table's (already normalized) name; it stands in
/// for the key subject of a column named just `ID`/`SK`. Blank names are left
/// untouched.
pub fn normalize_column(
    column: &mut Column,
    table_name: &str,
    strategy: KeyMatchStrategy,
) -> Vec<Change> {
    if is_blank(&column.name) {
        return Vec::new();
    }
    let class = classify_column(&column.name, strategy);
    apply_class(column, table_name, class)
}

fn skip_reason(table: &Table, config: &NormalizerConfig) -> Option<SkipReason> {
    if is_blank(&table.name) {
        Some(SkipReason::Unnamed)
    } else if config.ignored_tables.contains(&table.name) {
        Some(SkipReason::Ignored)
    } else if config.skip_hidden_tables && table.is_hidden {
        Some(SkipReason::Hidden)
    } else {
        None
    }
}

/// A name with no content once separators are collapsed.
fn is_blank(name: &str) -> bool {
    collapse_separators(name).is_empty()
}

fn apply_class(column: &mut Column, table_name: &str, class: ColumnClass) -> Vec<Change> {
    let mut changes = Vec::new();

    let new_name = normalize_column_name(&column.name, class.key_suffix());
    if new_name != column.name {
        let from = std::mem::replace(&mut column.name, new_name);
        let change = Change::ColumnRenamed {
            table: table_name.to_string(),
            from,
            to: column.name.clone(),
        };
        info!("{change}");
        changes.push(change);
    }

    let folder = class.folder();
    if column.display_folder != folder {
        let from = std::mem::replace(&mut column.display_folder, folder.to_string());
        let change = Change::FolderChanged {
            table: table_name.to_string(),
            column: column.name.clone(),
            from,
            to: folder.to_string(),
        };
        debug!("{change}");
        changes.push(change);
    }

    if class.is_key() {
        let mut subject = key_subject(&column.name);
        if subject.is_empty() {
            subject = table_name.to_string();
        }
        let description = key_description(&subject);
        let already_tagged = column.is_hidden
            && !column.is_available_in_mdx
            && column.is_key
            && column.description == description;
        if !already_tagged {
            column.is_hidden = true;
            column.is_available_in_mdx = false;
            column.is_key = true;
            column.description = description;
            let change = Change::KeyTagged {
                table: table_name.to_string(),
                column: column.name.clone(),
            };
            debug!("{change}");
            changes.push(change);
        }
    }

    changes
}
