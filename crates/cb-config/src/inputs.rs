//! Input spreadsheet locations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Paths of the two source spreadsheets. Empty means "not configured".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputsConfig {
    /// Vendor contracts workbook (one sheet per procurement category) or CSV.
    #[serde(default)]
    pub contracts: String,

    /// Categorized companies workbook (one sheet per industry) or CSV.
    #[serde(default)]
    pub categories: String,
}

impl InputsConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.contracts.is_empty() && !self.categories.is_empty()
    }

    /// Contracts path, or an error naming the missing setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] if `contracts` is empty.
    pub fn contracts_path(&self) -> Result<PathBuf, ConfigError> {
        non_empty_path(&self.contracts, "contracts")
    }

    /// Categories path, or an error naming the missing setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] if `categories` is empty.
    pub fn categories_path(&self) -> Result<PathBuf, ConfigError> {
        non_empty_path(&self.categories, "categories")
    }
}

fn non_empty_path(value: &str, input: &str) -> Result<PathBuf, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingInput {
            input: input.to_string(),
        });
    }
    Ok(PathBuf::from(value))
}
