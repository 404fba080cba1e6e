//! # cb-config
//!
//! Layered configuration loading for checkbook using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHECKBOOK_*` prefix, `__` as separator)
//! 2. Project-level `.checkbook/config.toml`
//! 3. User-level `~/.config/checkbook/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHECKBOOK_SERVER__PORT` -> `server.port`,
//! `CHECKBOOK_INPUTS__CONTRACTS` -> `inputs.contracts`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use cb_config::CheckbookConfig;
//!
//! let config = CheckbookConfig::load().expect("config");
//! println!("dashboard at http://{}", config.server.bind_address());
//! ```

mod charts;
mod error;
mod ingest;
mod inputs;
mod server;

pub use charts::ChartsConfig;
pub use error::ConfigError;
pub use ingest::{CategoryLayout, IngestConfig};
pub use inputs::InputsConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".checkbook/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckbookConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
}

impl CheckbookConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse, or
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with an explicit project config file in place of
    /// `.checkbook/config.toml`. Unlike the implicit file, this one must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if `project_config` is absent,
    /// otherwise the same as [`Self::load`].
    pub fn load_from(project_config: &Path) -> Result<Self, ConfigError> {
        if !project_config.is_file() {
            return Err(ConfigError::FileNotFound {
                path: project_config.to_path_buf(),
            });
        }
        let config: Self = Self::figment_with(Some(project_config)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(project_config: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path =
            project_config.map_or_else(|| PathBuf::from(PROJECT_CONFIG_PATH), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CHECKBOOK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("checkbook").join("config.toml"))
    }

    /// Reject values no chart or server could work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(invalid("server.host", "must not be empty"));
        }

        let positive = [
            ("charts.top_companies", self.charts.top_companies),
            ("charts.top_contract_codes", self.charts.top_contract_codes),
            ("charts.top_concentration", self.charts.top_concentration),
            ("charts.histogram_bins", self.charts.histogram_bins),
            ("charts.max_code_len", self.charts.max_code_len),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(invalid(field, "must be at least 1"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
