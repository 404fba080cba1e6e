use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the inputs and serve the dashboard until Ctrl-C.
    Serve(ServeArgs),
    /// Write the dashboard as one self-contained HTML file.
    Export(ExportArgs),
    /// Print KPIs and per-category SDO statistics.
    Summary,
    /// Load and validate the inputs; report row counts and match rate.
    Check,
    /// Print the JSON Schema of an API payload.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`; 0 picks a free port).
    #[arg(long)]
    pub port: Option<u16>,

    /// Open the dashboard in the default browser.
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Destination HTML file.
    #[arg(short, long, default_value = "dashboard.html")]
    pub output: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Payload to describe.
    pub payload: SchemaPayload,
}

/// Payloads with a published JSON Schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaPayload {
    Kpis,
    Tab,
    Chart,
    ChartSpec,
    Summary,
    Check,
}
