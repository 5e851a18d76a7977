//! Top-level notigen configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LayoutConfig;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via [`CliOverrides`])
/// 2. Environment variables (`NOTIGEN_*`)
/// 3. Project config (`notigen.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NotigenConfig {
    pub layout: LayoutConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub entities_dir: Option<String>,
    pub carrier_dir: Option<String>,
    pub interface_dir: Option<String>,
}

impl NotigenConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `notigen.toml` falls back to compiled defaults; a present
    /// but malformed one is a hard error.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join("notigen.toml");
        let config = if project_config_path.exists() {
            Self::read_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::finish(config, cli_overrides)
    }

    /// Load configuration from an explicit file path, then apply env and
    /// CLI overrides. Unlike [`load`](Self::load), a missing file is fatal.
    pub fn load_from(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::finish(Self::read_file(path)?, cli_overrides)
    }

    fn finish(
        mut config: NotigenConfig,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &NotigenConfig) -> Result<(), ConfigError> {
        let layout = &config.layout;
        let non_empty = [
            ("layout.entities_dir", &layout.entities_dir),
            ("layout.carrier_dir", &layout.carrier_dir),
            ("layout.interface_dir", &layout.interface_dir),
            ("layout.carrier_namespace", &layout.carrier_namespace),
            ("layout.interface_namespace", &layout.interface_namespace),
            ("layout.carrier_suffix", &layout.carrier_suffix),
            ("layout.interface_suffix", &layout.interface_suffix),
            ("layout.extension", &layout.extension),
        ];
        for (field, value) in non_empty {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if layout.extension.starts_with('.') {
            return Err(ConfigError::ValidationFailed {
                field: "layout.extension".to_string(),
                message: "must not include the leading dot".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `NOTIGEN_ENTITIES_DIR`, `NOTIGEN_CARRIER_DIR`, etc.
    fn apply_env_overrides(config: &mut NotigenConfig) {
        if let Ok(val) = std::env::var("NOTIGEN_ENTITIES_DIR") {
            config.layout.entities_dir = val;
        }
        if let Ok(val) = std::env::var("NOTIGEN_CARRIER_DIR") {
            config.layout.carrier_dir = val;
        }
        if let Ok(val) = std::env::var("NOTIGEN_INTERFACE_DIR") {
            config.layout.interface_dir = val;
        }
        if let Ok(val) = std::env::var("NOTIGEN_EXTENSION") {
            config.layout.extension = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut NotigenConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.entities_dir {
            config.layout.entities_dir = v.clone();
        }
        if let Some(ref v) = cli.carrier_dir {
            config.layout.carrier_dir = v.clone();
        }
        if let Some(ref v) = cli.interface_dir {
            config.layout.interface_dir = v.clone();
        }
    }
}
