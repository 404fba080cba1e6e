use std::sync::Arc;

use anyhow::Context;
use cb_config::CheckbookConfig;
use cb_server::DashboardServer;
use tracing::{info, warn};

use crate::bootstrap;
use crate::cli::ServeArgs;

/// Handle `checkbook serve`: load once, serve until Ctrl-C.
pub async fn handle(args: &ServeArgs, config: &CheckbookConfig) -> anyhow::Result<()> {
    let dashboard = Arc::new(bootstrap::load_dashboard(config)?);

    let mut server_config = config.server.clone();
    if let Some(host) = &args.host {
        server_config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let address = server_config.bind_address();
    let server = DashboardServer::bind(&address, dashboard)
        .with_context(|| format!("failed to start dashboard server on {address}"))?;
    let url = server.url();
    info!(%url, "serving dashboard, press Ctrl-C to stop");

    if (args.open || server_config.open_browser)
        && let Err(error) = open::that(&url)
    {
        warn!(%url, %error, "failed to open browser");
    }

    let stop = server.stop_handle();
    let worker = tokio::task::spawn_blocking(move || server.run());

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    info!("shutting down");
    stop.stop();
    worker.await.context("server loop panicked")?;
    Ok(())
}
