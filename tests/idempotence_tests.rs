mod support;

use tabular_tidy::classifier::key_strategy::KeyMatchStrategy;
use tabular_tidy::model::{Column, Model, Table};
use tabular_tidy::normalizer::{self, NormalizerConfig};
use tabular_tidy::rules::names::{normalize_column_name, normalize_table_name};

const TABLE_NAMES: &[&str] = &[
    "DIM_Customer",
    "FACT_Sales_Orders",
    "fact sales",
    "DIM_Sales_Dim_Region",
    "stg_dim_date",
    "Sales_DIM_",
    "FACT_",
    "DIM_ _FACT_",
    "Dimension_Table",
    "DimDate",
    "  __weird___Name__ ",
    "already clean",
    "Customer",
    "ÉTAT_dim_Région",
];

const COLUMN_NAMES: &[&str] = &[
    "order_id",
    "customer_sk",
    "is_active",
    "total_order_value",
    "ID",
    "id",
    "sk",
    "paid",
    "risk",
    "CustomerID",
    "Customer SK",
    "order_id_",
    "_is_flag",
    "is_deleted_id",
    "Island_Name",
    "  spaced   out  name ",
    "x",
    "Order ID",
    "Is active",
    "ßtraße",
    "ris\u{212A}",
    "customer_s\u{212A}",
    "\u{17F}k",
];

fn probe_model() -> Model {
    Model::new(TABLE_NAMES.iter().map(|table| {
        Table::new(*table, COLUMN_NAMES.iter().map(|column| Column::new(*column)))
    }))
}

fn assert_second_pass_is_noop(strategy: KeyMatchStrategy) {
    let config = NormalizerConfig::default().with_key_strategy(strategy);
    let mut model = probe_model();

    normalizer::normalize_model(&mut model, &config);
    let once = model.clone();
    let second = normalizer::normalize_model(&mut model, &config);

    assert!(
        second.is_unchanged(),
        "second pass under {strategy} should change nothing, got: {:#?}",
        second.changes
    );
    assert_eq!(model, once);
}

#[test]
fn model_pass_is_idempotent_with_separator_aware_keys() {
    assert_second_pass_is_noop(KeyMatchStrategy::SeparatorAware);
}

#[test]
fn model_pass_is_idempotent_with_loose_suffix_keys() {
    assert_second_pass_is_noop(KeyMatchStrategy::LooseSuffix);
}

#[test]
fn fixture_pass_is_idempotent() {
    let config = NormalizerConfig::default();
    let (mut model, _) = support::load_fixture_normalized("adventure_works", &config);
    let once = model.clone();

    let second = normalizer::normalize_model(&mut model, &config);

    assert!(second.is_unchanged(), "got: {:#?}", second.changes);
    assert_eq!(model, once);
}

#[test]
fn name_rules_are_idempotent() {
    for raw in TABLE_NAMES {
        let once = normalize_table_name(raw);
        assert_eq!(normalize_table_name(&once), once, "table name {raw:?}");
    }

    for strategy in [KeyMatchStrategy::SeparatorAware, KeyMatchStrategy::LooseSuffix] {
        for raw in COLUMN_NAMES {
            let once = normalize_column_name(raw, strategy.detect(raw));
            let twice = normalize_column_name(&once, strategy.detect(&once));
            assert_eq!(twice, once, "column name {raw:?} under {strategy}");
        }
    }
}
