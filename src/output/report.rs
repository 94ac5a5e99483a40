use std::fmt::Write;

use crate::normalizer::NormalizationReport;

/// Build a markdown report with a summary table, renames, and skipped tables.
pub fn build_report(report: &NormalizationReport) -> String {
    let mut out = String::new();

    writeln!(out, "# tabular-tidy Normalization Report").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "## Summary").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "| Metric | Count |").unwrap();
    writeln!(out, "|--------|-------|").unwrap();
    writeln!(out, "| Tables visited | {} |", report.tables_visited).unwrap();
    writeln!(out, "| Tables skipped | {} |", report.skipped.len()).unwrap();
    writeln!(out, "| Tables renamed | {} |", report.tables_renamed()).unwrap();
    writeln!(out, "| Columns visited | {} |", report.columns_visited).unwrap();
    writeln!(out, "| Columns renamed | {} |", report.columns_renamed()).unwrap();
    writeln!(out, "| Key columns | {} |", report.key_columns).unwrap();

    if report.renames().next().is_some() {
        writeln!(out).unwrap();
        writeln!(out, "## Renames").unwrap();
        writeln!(out).unwrap();
        for change in report.renames() {
            writeln!(out, "- {change}").unwrap();
        }
    }

    if !report.skipped.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "## Skipped Tables").unwrap();
        writeln!(out).unwrap();
        for skipped in &report.skipped {
            writeln!(out, "- **{}** ({})", skipped.name, skipped.reason).unwrap();
        }
    }

    out
}
