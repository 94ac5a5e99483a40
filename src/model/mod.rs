use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A tabular model as exported by the host: an ordered list of tables.
///
/// Entries may be `null` in the host export; those deserialize to `None` and
/// are left untouched by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Tables in host order.
    #[serde(default)]
    pub tables: Vec<Option<Table>>,
    /// Host properties this crate does not interpret, preserved on round trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model {
    /// Build a model from tables.
    pub fn new(tables: impl IntoIterator<Item = Table>) -> Self {
        Self {
            tables: tables.into_iter().map(Some).collect(),
            extra: Map::new(),
        }
    }

    /// Parse a model from its JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the model back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Iterate over the present (non-null) tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter().flatten()
    }

    /// Find a table by exact name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables().find(|table| table.name == name)
    }
}

/// A model table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table name as shown in client tools.
    #[serde(default)]
    pub name: String,
    /// Columns in host order; `None` marks a null reference.
    #[serde(default)]
    pub columns: Vec<Option<Column>>,
    /// Whether the table is hidden from client tools.
    #[serde(default)]
    pub is_hidden: bool,
    /// Host properties this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Table {
    /// Build a visible table from a name and its columns.
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Some).collect(),
            is_hidden: false,
            extra: Map::new(),
        }
    }

    /// Iterate over the present (non-null) columns.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().flatten()
    }

    /// Find a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns().find(|column| column.name == name)
    }
}

/// A model column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name as shown in client tools.
    #[serde(default)]
    pub name: String,
    /// UI grouping label for the column.
    #[serde(default)]
    pub display_folder: String,
    /// Whether the column is hidden from client tools.
    #[serde(default)]
    pub is_hidden: bool,
    /// Whether the column is offered to aggregation (MDX) clients.
    #[serde(rename = "isAvailableInMDX", default = "default_available_in_mdx")]
    pub is_available_in_mdx: bool,
    /// Whether the column is flagged as the table key.
    #[serde(default)]
    pub is_key: bool,
    /// Free-text description shown as a tooltip.
    #[serde(default)]
    pub description: String,
    /// Host properties this crate does not interpret (data type, format, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_available_in_mdx() -> bool {
    true
}

impl Column {
    /// Build a column with host defaults for every attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name: String::new(),
            display_folder: String::new(),
            is_hidden: false,
            is_available_in_mdx: default_available_in_mdx(),
            is_key: false,
            description: String::new(),
            extra: Map::new(),
        }
    }
}
