use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, ExportArgs, SchemaArgs, SchemaPayload, ServeArgs};

/// Top-level CLI parser for the `checkbook` binary.
#[derive(Debug, Parser)]
#[command(
    name = "checkbook",
    version,
    about = "Massachusetts Open Checkbook vendor contract and SDO dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of `.checkbook/config.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vendor contracts spreadsheet (overrides `inputs.contracts`)
    #[arg(long, global = true)]
    pub contracts: Option<PathBuf>,

    /// Categorized companies spreadsheet (overrides `inputs.categories`)
    #[arg(long, global = true)]
    pub categories: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            contracts: self.contracts.clone(),
            categories: self.categories.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat, SchemaPayload};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "checkbook",
            "--format",
            "table",
            "--contracts",
            "data/contracts.xlsx",
            "--verbose",
            "summary",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.contracts.as_deref(), Some(Path::new("data/contracts.xlsx")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Summary));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["checkbook", "check", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["checkbook", "serve"]).expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host, None);
        assert_eq!(args.port, None);
        assert!(!args.open);

        let cli = Cli::try_parse_from(["checkbook", "serve", "--host", "0.0.0.0", "--port", "9000", "--open"])
            .expect("cli should parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(9000));
        assert!(args.open);
    }

    #[test]
    fn export_defaults_output_path() {
        let cli = Cli::try_parse_from(["checkbook", "export"]).expect("cli should parse");
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output, Path::new("dashboard.html"));
    }

    #[test]
    fn schema_payload_is_kebab_case() {
        let cli = Cli::try_parse_from(["checkbook", "schema", "chart-spec"])
            .expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.payload, SchemaPayload::ChartSpec);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["checkbook", "--format", "xml", "check"]).is_err());
        assert!(Cli::try_parse_from(["checkbook", "serve", "--port", "70000"]).is_err());
        assert!(Cli::try_parse_from(["checkbook", "schema", "invoice"]).is_err());
    }
}
