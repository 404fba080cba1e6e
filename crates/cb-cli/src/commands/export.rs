use cb_config::CheckbookConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::{ExportArgs, GlobalFlags};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    charts: usize,
}

/// Handle `checkbook export`.
pub fn handle(
    args: &ExportArgs,
    config: &CheckbookConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dashboard = bootstrap::load_dashboard(config)?;
    let path = cb_server::export_static(&dashboard, &args.output)?;
    output(
        &ExportResponse {
            path: path.display().to_string(),
            charts: cb_core::ChartId::ALL.len(),
        },
        flags.format,
    )
}
