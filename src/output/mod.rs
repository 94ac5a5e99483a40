/// Writes the normalized model and report to disk.
pub mod formatter;
/// Builds a Markdown change report from a normalization pass.
pub mod report;
