use std::path::{Component, Path};

use crate::error::{Result, TidyError};
use crate::model::Model;
use crate::normalizer::NormalizationReport;
use crate::output::report;

/// Write the normalized model and its report to the specified directory.
///
/// Produces `<name>.json` and `<name>_report.md`.
pub fn write_output(
    output_dir: &Path,
    name: &str,
    model: &Model,
    pass: &NormalizationReport,
) -> Result<()> {
    validate_output_name(name)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| TidyError::io("Failed to create output directory", e))?;

    let model_path = output_dir.join(format!("{name}.json"));
    let mut model_json = model.to_json_pretty()?;
    model_json.push('\n');
    std::fs::write(&model_path, model_json)
        .map_err(|e| TidyError::io(format!("Failed to write {}", model_path.display()), e))?;

    let report_path = output_dir.join(format!("{name}_report.md"));
    std::fs::write(&report_path, report::build_report(pass))
        .map_err(|e| TidyError::io(format!("Failed to write {}", report_path.display()), e))?;

    Ok(())
}

fn validate_output_name(name: &str) -> Result<()> {
    let invalid = |reason: &'static str| -> Result<()> {
        Err(TidyError::InvalidOutputName {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return invalid("must not be empty");
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return invalid("absolute paths are not allowed");
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return invalid("traversal segments are not allowed");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("path separators are not allowed");
    }
    Ok(())
}
