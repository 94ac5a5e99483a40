/// Table and column name cleanup, key-token casing, and key descriptions.
pub mod names;
