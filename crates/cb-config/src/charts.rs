//! Chart tuning knobs.

use serde::{Deserialize, Serialize};

const fn default_top_companies() -> usize {
    15
}

const fn default_top_contract_codes() -> usize {
    20
}

const fn default_top_concentration() -> usize {
    10
}

const fn default_histogram_bins() -> usize {
    50
}

const fn default_min_box_rows() -> usize {
    10
}

const fn default_max_code_len() -> usize {
    15
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartsConfig {
    /// Bars in the top IT companies chart.
    #[serde(default = "default_top_companies")]
    pub top_companies: usize,

    /// Bars in the contract codes chart.
    #[serde(default = "default_top_contract_codes")]
    pub top_contract_codes: usize,

    /// Named slices in the IT concentration donut; the rest become "Other".
    #[serde(default = "default_top_concentration")]
    pub top_concentration: usize,

    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Categories with fewer SDO rows are left out of the box plot.
    #[serde(default = "default_min_box_rows")]
    pub min_box_rows: usize,

    /// Contract codes longer than this are free-text notes, not codes.
    #[serde(default = "default_max_code_len")]
    pub max_code_len: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            top_companies: default_top_companies(),
            top_contract_codes: default_top_contract_codes(),
            top_concentration: default_top_concentration(),
            histogram_bins: default_histogram_bins(),
            min_box_rows: default_min_box_rows(),
            max_code_len: default_max_code_len(),
        }
    }
}
