mod support;

use tabular_tidy::normalizer::NormalizerConfig;
use tabular_tidy::output::{formatter, report};

#[test]
fn formatter_writes_same_report_as_report_builder() {
    let (model, pass) =
        support::load_fixture_normalized("adventure_works", &NormalizerConfig::default());
    let expected = report::build_report(&pass);

    let out_dir = support::unique_temp_dir("tabular_tidy_formatter");
    formatter::write_output(&out_dir, "aw", &model, &pass).unwrap();
    let written = std::fs::read_to_string(out_dir.join("aw_report.md")).unwrap();

    assert_eq!(
        written, expected,
        "output formatter should match report::build_report exactly"
    );
}

#[test]
fn formatter_model_json_round_trips() {
    let (model, pass) =
        support::load_fixture_normalized("adventure_works", &NormalizerConfig::default());

    let out_dir = support::unique_temp_dir("tabular_tidy_formatter_json");
    formatter::write_output(&out_dir, "aw", &model, &pass).unwrap();
    let written = std::fs::read_to_string(out_dir.join("aw.json")).unwrap();

    assert!(written.ends_with('\n'));
    assert_eq!(
        tabular_tidy::model::Model::from_json(&written).unwrap(),
        model
    );
}
