//! JSON payloads returned by the dashboard API and the `checkbook` CLI.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Headline numbers shown in the KPI row and by `checkbook summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiSummary {
    /// Distinct vendor names across all contracts.
    pub total_vendors: usize,
    /// Mean capped SDO commitment over rows with a positive commitment.
    pub average_sdo: Option<f64>,
    /// Distinct procurement categories present in the contracts.
    pub categories: usize,
    /// Distinct vendors in ITE, ITS and ITT.
    pub it_vendors: usize,
    /// Distinct industries in the categorized-companies input.
    pub industries: usize,
    /// Share of contract rows whose vendor matched a categorized company.
    pub match_rate: f64,
    pub contract_rows: usize,
    pub category_rows: usize,
}

/// Per-category SDO statistics for `checkbook summary`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategorySummary {
    pub code: String,
    pub label: String,
    pub rows: usize,
    pub vendors: usize,
    /// Rows with a numeric SDO cell.
    pub sdo_rows: usize,
    pub coverage_rate: f64,
    pub average_sdo: Option<f64>,
    pub median_sdo: Option<f64>,
    pub max_sdo: Option<f64>,
    /// Capped commitments outside 1.5 IQR of the category's quartiles.
    pub outliers: usize,
    pub total_amount: f64,
}

/// Result of loading and joining both inputs (`checkbook check`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoadReport {
    pub contracts_file: String,
    pub categories_file: String,
    pub contract_rows: usize,
    pub category_rows: usize,
    pub matched_rows: usize,
    pub unmatched_rows: usize,
    /// Sheets ignored because of the skip list.
    pub skipped_sheets: Vec<String>,
    /// Contract rows dropped as workbook boilerplate or missing a vendor.
    pub dropped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}
