//! Normalize table and column naming conventions in tabular BI models.
#![warn(missing_docs)]

/// Key-match strategies and column classification (Keys / Flags / Columns).
pub mod classifier;
/// Crate error type.
pub mod error;
/// Host object graph: models, tables, and columns.
pub mod model;
/// The in-place normalization pass, its configuration, and the change log.
pub mod normalizer;
/// File output and markdown report generation.
pub mod output;
/// Pure text rules for table and column names.
pub mod rules;
