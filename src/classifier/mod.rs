/// Column classification into key, flag, and regular columns with their display folders.
pub mod column_classifier;
/// Key-token detection strategies (separator-aware vs. loose suffix).
pub mod key_strategy;
