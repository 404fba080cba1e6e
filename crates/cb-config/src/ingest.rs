//! Spreadsheet ingestion options.

use serde::{Deserialize, Serialize};

/// How the categorized-companies input is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLayout {
    /// `Table` when the first row names a vendor column, otherwise `Matrix`.
    #[default]
    Auto,
    /// Header row with vendor, sub-category and designation columns.
    Table,
    /// One sheet per industry; columns 1-3 list companies per designation.
    Matrix,
}

fn default_skip_sheets() -> Vec<String> {
    vec![String::from("Abbreviations")]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Sheet names to ignore (trimmed, case-insensitive).
    #[serde(default = "default_skip_sheets")]
    pub skip_sheets: Vec<String>,

    #[serde(default)]
    pub category_layout: CategoryLayout,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            skip_sheets: default_skip_sheets(),
            category_layout: CategoryLayout::default(),
        }
    }
}

impl IngestConfig {
    /// Whether `sheet` is on the skip list.
    #[must_use]
    pub fn skips(&self, sheet: &str) -> bool {
        let sheet = sheet.trim();
        self.skip_sheets
            .iter()
            .any(|skip| skip.trim().eq_ignore_ascii_case(sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_list_ignores_case_and_padding() {
        let config = IngestConfig::default();
        assert!(config.skips("Abbreviations "));
        assert!(config.skips("abbreviations"));
        assert!(!config.skips("ITE"));
        assert_eq!(config.category_layout, CategoryLayout::Auto);
    }
}
