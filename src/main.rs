//! CLI entry point for `tabular-tidy`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tabular_tidy::classifier::key_strategy::KeyMatchStrategy;
use tabular_tidy::model::Model;
use tabular_tidy::normalizer::{self, IgnoredTables, NormalizerConfig};
use tabular_tidy::output::formatter;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "tabular-tidy",
    about = "Normalize table and column naming conventions in a tabular model export"
)]
struct Cli {
    /// Model JSON export
    input: PathBuf,

    /// Output directory
    #[arg(long, default_value = "tabular-tidy-output")]
    output_dir: PathBuf,

    /// How key columns are recognized: separator-aware or loose-suffix
    #[arg(long, default_value = "separator-aware")]
    key_strategy: KeyMatchStrategy,

    /// Additional table to leave untouched (repeatable)
    #[arg(long = "ignore-table", value_name = "NAME")]
    ignore_tables: Vec<String>,

    /// Do not ignore the built-in tables (_Measures, Audit_Log, Technical_Metadata)
    #[arg(long)]
    no_default_ignores: bool,

    /// Leave hidden tables untouched
    #[arg(long)]
    skip_hidden_tables: bool,

    /// Write nothing; exit 1 if the model would change
    #[arg(long)]
    check: bool,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let json = match std::fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            process::exit(2);
        }
    };

    let mut model = match Model::from_json(&json) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", cli.input.display());
            process::exit(2);
        }
    };

    let mut ignored_tables = if cli.no_default_ignores {
        IgnoredTables::new()
    } else {
        IgnoredTables::builtin()
    };
    ignored_tables.extend(&cli.ignore_tables);

    let config = NormalizerConfig::default()
        .with_ignored_tables(ignored_tables)
        .with_key_strategy(cli.key_strategy)
        .with_skip_hidden_tables(cli.skip_hidden_tables);

    let pass = normalizer::normalize_model(&mut model, &config);

    tracing::debug!(
        tables = pass.tables_visited,
        columns = pass.columns_visited,
        keys = pass.key_columns,
        skipped = pass.skipped.len(),
        "Normalization pass finished"
    );

    if cli.check {
        if pass.is_unchanged() {
            return;
        }
        for change in &pass.changes {
            println!("{change}");
        }
        process::exit(1);
    }

    let name = cli
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");

    if let Err(e) = formatter::write_output(&cli.output_dir, name, &model, &pass) {
        eprintln!("Error writing output: {e}");
        process::exit(2);
    }
}
