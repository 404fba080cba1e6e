use cb_charts::{Dashboard, kpi_summary};
use cb_config::CheckbookConfig;
use cb_core::responses::LoadReport;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;

/// What was loaded and how much of it joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResponse {
    #[serde(flatten)]
    pub report: LoadReport,
    /// Share of contract rows matched to a categorized company.
    pub match_rate: f64,
}

impl CheckResponse {
    #[must_use]
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        Self {
            report: dashboard.report().clone(),
            match_rate: kpi_summary(dashboard).match_rate,
        }
    }
}

/// Handle `checkbook check`. Loading is the check; any failure is the error.
pub fn handle(config: &CheckbookConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dashboard = bootstrap::load_dashboard(config)?;
    let response = CheckResponse::from_dashboard(&dashboard);
    if response.report.matched_rows == 0 && response.report.contract_rows > 0 {
        warn!("no contract vendor matched a categorized company");
    }
    output(&response, flags.format)
}
