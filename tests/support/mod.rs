#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tabular_tidy::model::{Column, Model, Table};
use tabular_tidy::normalizer::{self, NormalizationReport, NormalizerConfig};

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn fixture_model_path(fixture: &str) -> PathBuf {
    fixture_dir(fixture).join("model.json")
}

pub(crate) fn read_fixture_json(fixture: &str) -> String {
    std::fs::read_to_string(fixture_model_path(fixture)).expect("fixture model should be readable")
}

pub(crate) fn load_fixture_model(fixture: &str) -> Model {
    Model::from_json(&read_fixture_json(fixture)).expect("fixture model should parse")
}

pub(crate) fn load_fixture_normalized(
    fixture: &str,
    config: &NormalizerConfig,
) -> (Model, NormalizationReport) {
    let mut model = load_fixture_model(fixture);
    let pass = normalizer::normalize_model(&mut model, config);
    (model, pass)
}

/// Normalize a single-column table and return the resulting column.
pub(crate) fn normalize_single_column(name: &str, config: &NormalizerConfig) -> Column {
    let mut model = Model::new([Table::new("DIM_Probe", [Column::new(name)])]);
    normalizer::normalize_model(&mut model, config);
    let column = model
        .tables()
        .next()
        .and_then(|table| table.columns().next())
        .cloned()
        .expect("probe column should survive normalization");
    column
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
