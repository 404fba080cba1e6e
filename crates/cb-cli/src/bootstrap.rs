use std::path::Path;

use anyhow::Context;
use cb_charts::Dashboard;
use cb_config::CheckbookConfig;
use tracing::info;

use crate::cli::GlobalFlags;

/// `.env`, then the figment chain (or `--config`), then `--contracts` and
/// `--categories`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<CheckbookConfig> {
    load_dotenv()?;

    let mut config = match &flags.config {
        Some(path) => CheckbookConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CheckbookConfig::load().context("failed to load configuration")?,
    };
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(config: &mut CheckbookConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.contracts {
        config.inputs.contracts = path.display().to_string();
    }
    if let Some(path) = &flags.categories {
        config.inputs.categories = path.display().to_string();
    }
}

/// Load both spreadsheets and join them into the dashboard state.
pub fn load_dashboard(config: &CheckbookConfig) -> anyhow::Result<Dashboard> {
    let contracts = config.inputs.contracts_path()?;
    let categories = config.inputs.categories_path()?;

    let inputs = cb_ingest::load_inputs(&contracts, &categories, &config.ingest)
        .with_context(|| describe_inputs(&contracts, &categories))?;
    let dashboard = Dashboard::new(inputs, config.charts.clone());

    let report = dashboard.report();
    info!(
        contracts = report.contract_rows,
        companies = report.category_rows,
        matched = report.matched_rows,
        "dashboard ready"
    );
    Ok(dashboard)
}

fn describe_inputs(contracts: &Path, categories: &Path) -> String {
    format!(
        "failed to load inputs ({} and {})",
        contracts.display(),
        categories.display()
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::{apply_overrides, load_config, load_dashboard};
    use crate::cli::{GlobalFlags, OutputFormat};
    use cb_config::CheckbookConfig;

    const CONTRACTS: &str = "\
Vendor Name,Category,Contract Amount,SDO Commitment %
Acme Corp,ITE,\"$1,000.00\",15%
Globex Corporation,ITS,500,0.05
Initech,PRF,250,
";

    const CATEGORIES: &str = "\
Company,Industry,Type
Acme Corp,Hardware,National & Local
Umbrella,Medical,SGC Target
";

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            config: None,
            contracts: None,
            categories: None,
        }
    }

    fn to_figment(error: &anyhow::Error) -> figment::Error {
        figment::Error::from(format!("{error:#}"))
    }

    #[test]
    fn flags_override_configured_inputs() {
        let mut config = CheckbookConfig::default();
        config.inputs.contracts = "configured.xlsx".to_string();

        let flags = GlobalFlags {
            contracts: Some(PathBuf::from("data/contracts.csv")),
            ..flags()
        };
        apply_overrides(&mut config, &flags);

        assert_eq!(config.inputs.contracts, "data/contracts.csv");
        assert_eq!(config.inputs.categories, "");
    }

    #[test]
    fn explicit_config_file_is_used() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "alt.toml",
                "[server]\nport = 9321\n\n[inputs]\ncontracts = \"a.csv\"\ncategories = \"b.csv\"\n",
            )?;

            let flags = GlobalFlags {
                config: Some(PathBuf::from("alt.toml")),
                categories: Some(PathBuf::from("override.csv")),
                ..flags()
            };
            let config = load_config(&flags).map_err(|error| to_figment(&error))?;

            assert_eq!(config.server.port, 9321);
            assert_eq!(config.inputs.contracts, "a.csv");
            assert_eq!(config.inputs.categories, "override.csv");
            Ok(())
        });
    }

    #[test]
    fn loads_dashboard_from_project_config() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("contracts.csv", CONTRACTS)?;
            jail.create_file("categories.csv", CATEGORIES)?;
            std::fs::create_dir(jail.directory().join(".checkbook"))
                .map_err(|error| figment::Error::from(error.to_string()))?;
            jail.create_file(
                ".checkbook/config.toml",
                "[inputs]\ncontracts = \"contracts.csv\"\ncategories = \"categories.csv\"\n",
            )?;

            let config = load_config(&flags()).map_err(|error| to_figment(&error))?;
            let dashboard = load_dashboard(&config).map_err(|error| to_figment(&error))?;

            let report = dashboard.report();
            assert_eq!(report.contract_rows, 3);
            assert_eq!(report.category_rows, 2);
            assert_eq!(report.matched_rows, 1);
            assert!(report.contracts_file.ends_with("contracts.csv"));
            Ok(())
        });
    }

    #[test]
    fn missing_input_names_the_flag() {
        let error = load_dashboard(&CheckbookConfig::default()).expect_err("no inputs configured");
        assert!(format!("{error:#}").contains("--contracts"), "{error:#}");
    }

    #[test]
    fn unreadable_input_names_both_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = CheckbookConfig::default();
        config.inputs.contracts = dir.path().join("absent.csv").display().to_string();
        config.inputs.categories = dir.path().join("also-absent.csv").display().to_string();

        let error = load_dashboard(&config).expect_err("files do not exist");
        let message = format!("{error:#}");
        assert!(message.contains("absent.csv"), "{message}");
        assert!(message.contains("also-absent.csv"), "{message}");
    }
}
