//! The loaded dashboard state handed to every chart builder.

use std::borrow::Cow;

use cb_config::ChartsConfig;
use cb_core::responses::LoadReport;
use cb_core::{VendorCategory, VendorContract};
use cb_frame::{JoinedTable, RecordFilter, left_join};
use cb_ingest::LoadedInputs;
use chrono::Utc;

/// Joined contracts, categorized companies and chart settings.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    joined: JoinedTable,
    companies: Vec<VendorCategory>,
    config: ChartsConfig,
    report: LoadReport,
}

impl Dashboard {
    /// Join the loaded inputs and record what was loaded.
    #[must_use]
    pub fn new(inputs: LoadedInputs, config: ChartsConfig) -> Self {
        let LoadedInputs {
            contracts,
            categories,
        } = inputs;

        let mut skipped_sheets = contracts.skipped_sheets;
        skipped_sheets.extend(categories.skipped_sheets);

        let mut dashboard = Self::from_rows(contracts.rows, categories.rows, config);
        dashboard.report.contracts_file = contracts.source.display().to_string();
        dashboard.report.categories_file = categories.source.display().to_string();
        dashboard.report.skipped_sheets = skipped_sheets;
        dashboard.report.dropped_rows = contracts.dropped_rows;
        dashboard
    }

    /// Build from already-typed rows. The load report names no files.
    #[must_use]
    pub fn from_rows(
        contracts: Vec<VendorContract>,
        companies: Vec<VendorCategory>,
        config: ChartsConfig,
    ) -> Self {
        let joined = left_join(&contracts, &companies);
        let report = LoadReport {
            contracts_file: String::new(),
            categories_file: String::new(),
            contract_rows: contracts.len(),
            category_rows: companies.len(),
            matched_rows: joined.matched(),
            unmatched_rows: joined.unmatched(),
            skipped_sheets: Vec::new(),
            dropped_rows: 0,
            loaded_at: Utc::now(),
        };
        Self {
            joined,
            companies,
            config,
            report,
        }
    }

    #[must_use]
    pub const fn joined(&self) -> &JoinedTable {
        &self.joined
    }

    #[must_use]
    pub fn companies(&self) -> &[VendorCategory] {
        &self.companies
    }

    #[must_use]
    pub const fn config(&self) -> &ChartsConfig {
        &self.config
    }

    #[must_use]
    pub const fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Joined records accepted by `filter`. `All` borrows.
    #[must_use]
    pub fn records(&self, filter: &RecordFilter) -> Cow<'_, JoinedTable> {
        match filter {
            RecordFilter::All => Cow::Borrowed(&self.joined),
            other => Cow::Owned(self.joined.filter(other)),
        }
    }
}
