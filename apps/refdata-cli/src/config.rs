//! Layered configuration for the `refdata` binary.
//!
//! Sources, later ones winning:
//! 1) built-in defaults -> 2) YAML file (`--config`) -> 3) env (`REFDATA__*`)
//! -> 4) CLI overrides (`--dsn`, `-v`).

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use reference_data::config::ReferenceDataConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix. Nested keys are separated by `__`, e.g.
/// `REFDATA__REFERENCE_DATA__DATABASE__DSN`.
pub const ENV_PREFIX: &str = "REFDATA__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub reference_data: ReferenceDataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then `REFDATA__*` variables.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, any layer does not match the schema, or a
    /// value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")?;
        config
            .reference_data
            .validate()
            .context("invalid reference_data configuration")?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, dsn: Option<&str>, verbose: u8) {
        if let Some(dsn) = dsn {
            dsn.clone_into(&mut self.reference_data.database.dsn);
        }
        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// Renders the effective configuration as YAML.
    ///
    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("failed to render configuration as YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn yaml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.reference_data.database.dsn, "sqlite::memory:");
    }

    #[test]
    fn test_yaml_layer_overrides_defaults() {
        let file = yaml_file(
            "reference_data:\n  seed_actor: ops\n  database:\n    dsn: sqlite://ref.db?mode=rwc\nlogging:\n  format: json\n",
        );
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.reference_data.seed_actor, "ops");
        assert_eq!(cfg.reference_data.database.dsn, "sqlite://ref.db?mode=rwc");
        assert_eq!(cfg.reference_data.database.max_connections, 5);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_unknown_yaml_key_rejected() {
        let file = yaml_file("reference_data:\n  seed_on_boot: true\n");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_zero_hierarchy_depth_rejected() {
        let file = yaml_file("reference_data:\n  max_hierarchy_depth: 0\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("max_hierarchy_depth"), "{err:#}");
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(Some("sqlite://x.db?mode=rwc"), 2);
        assert_eq!(cfg.reference_data.database.dsn, "sqlite://x.db?mode=rwc");
        assert_eq!(cfg.logging.level, "debug");

        cfg.apply_cli_overrides(None, 0);
        assert_eq!(cfg.logging.level, "debug");

        cfg.apply_cli_overrides(None, 5);
        assert_eq!(cfg.logging.level, "trace");
    }

    #[test]
    fn test_yaml_rendering_round_trips_through_loader() {
        let mut cfg = AppConfig::default();
        cfg.reference_data.cache_localized_names = true;
        let file = yaml_file(&cfg.to_yaml().unwrap());
        assert_eq!(AppConfig::load(Some(file.path())).unwrap(), cfg);
    }
}
