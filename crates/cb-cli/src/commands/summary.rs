use cb_charts::{Dashboard, category_summaries, kpi_summary};
use cb_config::CheckbookConfig;
use cb_core::responses::{CategorySummary, KpiSummary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bootstrap;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Headline KPIs plus per-category SDO statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryResponse {
    pub kpis: KpiSummary,
    pub categories: Vec<CategorySummary>,
}

impl SummaryResponse {
    #[must_use]
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        Self {
            kpis: kpi_summary(dashboard),
            categories: category_summaries(dashboard),
        }
    }
}

/// Handle `checkbook summary`.
pub fn handle(config: &CheckbookConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dashboard = bootstrap::load_dashboard(config)?;
    let summary = SummaryResponse::from_dashboard(&dashboard);

    match flags.format {
        // Two tables read better than one nested object.
        OutputFormat::Table => {
            output(&summary.kpis, flags.format)?;
            println!();
            output(&summary.categories, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&summary, flags.format),
    }
}
