use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::key_strategy::KeySuffix;

/// Everything up to and including the last `DIM`/`FACT` marker and the
/// separators that follow it.
static TABLE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^.*(?:DIM|FACT)[_\s]+").expect("valid table prefix regex"));

/// Any run of whitespace.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize a name for case-insensitive comparison.
///
/// Trims surrounding whitespace and lowercases the result.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Replace underscores with spaces, collapse whitespace runs, and trim.
pub fn collapse_separators(name: &str) -> String {
    WHITESPACE_RE
        .replace_all(&name.replace('_', " "), " ")
        .trim()
        .to_string()
}

/// Lowercase the whole string, then uppercase only its first character.
///
/// `"TOTAL order VALUE"` -> `"Total order value"`
///
/// The first character stays lowercase when its uppercase form is not a
/// single character that lowercases back to it (`ß`, `ſ`), so the result is
/// stable under a second call.
pub fn sentence_case(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let capital = match (upper.next(), upper.next()) {
        (Some(single), None) if single.to_lowercase().eq([first]) => single,
        _ => first,
    };
    std::iter::once(capital).chain(chars).collect()
}

/// Clean up a raw table name.
///
/// Examples:
/// - `"DIM_Customer"` -> `"Customer"`
/// - `"FACT_Sales_Orders"` -> `"Sales orders"`
/// - `"stg_dim_date"` -> `"Date"`
///
/// When stripping the marker would leave nothing (`"Sales_DIM_"`), the
/// marker is kept and only separators and casing are cleaned up. The cleanup
/// is repeated until the name stops changing, so a kept marker never exposes
/// an earlier one to the next pass.
pub fn normalize_table_name(raw: &str) -> String {
    let mut current = clean_table_name(raw);
    loop {
        let next = clean_table_name(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_table_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = collapse_separators(&TABLE_PREFIX_RE.replace(trimmed, ""));
    let cleaned = if stripped.is_empty() {
        collapse_separators(trimmed)
    } else {
        stripped
    };
    sentence_case(&cleaned)
}

/// Clean up a raw column name.
///
/// Separators and casing follow [`sentence_case`]. When the column is a key,
/// the trailing `ID`/`SK` token is forced back to uppercase:
/// `"order_id"` -> `"Order ID"`, `"customer_sk"` -> `"Customer SK"`.
pub fn normalize_column_name(raw: &str, key: Option<KeySuffix>) -> String {
    let name = sentence_case(&collapse_separators(raw));
    match key {
        Some(suffix) => force_key_token(&name, suffix),
        None => name,
    }
}

/// Uppercase the trailing two-letter key token of an already-cased name.
fn force_key_token(name: &str, suffix: KeySuffix) -> String {
    let token = suffix.as_str();
    let Some(split) = name.len().checked_sub(token.len()) else {
        return name.to_string();
    };
    if !name.is_char_boundary(split) || !name[split..].eq_ignore_ascii_case(token) {
        return name.to_string();
    }
    format!("{}{token}", &name[..split])
}

/// Human-readable subject of a key column: the name without its trailing
/// key token and the separators around it.
///
/// `"Order ID"` -> `"Order"`, `"CustomerSK"` -> `"Customer"`, `"ID"` -> `""`.
pub fn key_subject(name: &str) -> String {
    let trimmed = name.trim();
    let Some(split) = trimmed.len().checked_sub(2) else {
        return trimmed.to_string();
    };
    if !trimmed.is_char_boundary(split) {
        return trimmed.to_string();
    }
    let tail = &trimmed[split..];
    if KeySuffix::from_token(tail).is_none() {
        return trimmed.to_string();
    }
    trimmed[..split]
        .trim_end_matches(|c: char| c == '_' || c.is_whitespace())
        .to_string()
}

/// Fixed description attached to key columns.
pub fn key_description(subject: &str) -> String {
    format!(
        "This is the key of the {subject} dimension and is used in relationships for Power BI."
    )
}
