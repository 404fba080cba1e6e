use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One grouped summary value, consumed directly by a chart builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AggregateRow {
    /// Group key values, one per grouping column, in grouping order.
    pub keys: Vec<String>,
    pub value: f64,
    /// Number of rows that contributed to `value`.
    pub count: usize,
}

impl AggregateRow {
    #[must_use]
    pub const fn new(keys: Vec<String>, value: f64, count: usize) -> Self {
        Self { keys, value, count }
    }

    /// First key, or `""` for a grouping with no columns.
    #[must_use]
    pub fn key(&self) -> &str {
        self.keys.first().map_or("", String::as_str)
    }

    /// Key at position `index`, or `""` when out of range.
    #[must_use]
    pub fn key_at(&self, index: usize) -> &str {
        self.keys.get(index).map_or("", String::as_str)
    }
}
