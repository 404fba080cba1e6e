//! # cb-ingest
//!
//! Loader and normalizer for the two dashboard inputs.
//!
//! - [`reader`] reads `.xlsx`/`.xlsm`/`.xlsb`/`.xls`/`.ods` workbooks with
//!   `calamine` and `.csv` files with `csv` into raw [`table::Sheet`] grids.
//! - [`normalize`] snake-cases headers, cleans text and parses numeric cells.
//! - [`contracts`] and [`categories`] validate the column contract and build
//!   typed [`cb_core::VendorContract`] / [`cb_core::VendorCategory`] rows.
//!
//! Nothing past this crate sees a spreadsheet cell.

pub mod categories;
pub mod contracts;
pub mod error;
pub mod normalize;
pub mod reader;
pub mod schema;
pub mod table;

use std::path::Path;

use cb_config::IngestConfig;
use tracing::info;

pub use categories::{CategoryTable, load_categories};
pub use contracts::{ContractTable, load_contracts};
pub use error::IngestError;

/// Both inputs, loaded and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedInputs {
    pub contracts: ContractTable,
    pub categories: CategoryTable,
}

/// Load the contracts and categorized-companies files.
///
/// # Errors
///
/// Returns the first [`IngestError`] from either file. Nothing is retried.
pub fn load_inputs(
    contracts: &Path,
    categories: &Path,
    config: &IngestConfig,
) -> Result<LoadedInputs, IngestError> {
    let contracts = load_contracts(contracts, config)?;
    info!(
        path = %contracts.source.display(),
        rows = contracts.rows.len(),
        dropped = contracts.dropped_rows,
        "loaded contracts"
    );

    let categories = load_categories(categories, config)?;
    info!(
        path = %categories.source.display(),
        rows = categories.rows.len(),
        sub_categories = categories.sub_categories().len(),
        "loaded categories"
    );

    Ok(LoadedInputs {
        contracts,
        categories,
    })
}
