use cb_config::CheckbookConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &CheckbookConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Export(args) => commands::export::handle(&args, config, flags),
        Commands::Summary => commands::summary::handle(config, flags),
        Commands::Check => commands::check::handle(config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
