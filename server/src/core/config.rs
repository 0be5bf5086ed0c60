use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::cli::CliConfig;
use super::constants::{
    CONFIG_FILE_NAME, DEFAULT_DATABASE, DEFAULT_IDP_TAG, DEFAULT_INFLUX_URL,
    DEFAULT_LOG_MEASUREMENT, DEFAULT_SP_TAG, DEFAULT_TIMEOUT_SECS,
};

// =============================================================================
// File Config (all fields optional, layered under defaults)
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    influx: Option<FileInfluxConfig>,
    log: Option<FileLogConfig>,
    backfill: Option<FileBackfillConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileInfluxConfig {
    url: Option<String>,
    database: Option<String>,
    user: Option<String>,
    password: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileLogConfig {
    measurement: Option<String>,
    sp_tag: Option<String>,
    idp_tag: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileBackfillConfig {
    skip_index_wait: Option<bool>,
}

impl FileConfig {
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

// =============================================================================
// Resolved Application Config
// =============================================================================

/// InfluxDB connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InfluxConfig {
    pub url: String,
    pub database: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
}

impl Default for InfluxConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INFLUX_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            user: None,
            password: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Shape of the raw login measurement the rollups aggregate from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSourceConfig {
    /// Raw login measurement name
    pub measurement: String,
    /// Service-provider tag on the raw log
    pub sp_tag: String,
    /// Identity-provider tag on the raw log
    pub idp_tag: String,
}

impl Default for LogSourceConfig {
    fn default() -> Self {
        Self {
            measurement: DEFAULT_LOG_MEASUREMENT.to_string(),
            sp_tag: DEFAULT_SP_TAG.to_string(),
            idp_tag: DEFAULT_IDP_TAG.to_string(),
        }
    }
}

/// Backfill behavior
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackfillConfig {
    /// Skip the post-build indexing cooldown. Only safe with datasets small
    /// enough that the engine indexes them faster than the next build runs.
    pub skip_index_wait: bool,
}

/// Resolved application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub influx: InfluxConfig,
    pub log: LogSourceConfig,
    pub backfill: BackfillConfig,
}

impl AppConfig {
    /// Layer configs: defaults -> config file -> CLI/env overrides
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let file_config = match Self::config_path(cli)? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Config file loaded");
                FileConfig::load_from_file(&path)?
            }
            None => FileConfig::default(),
        };

        let file_influx = file_config.influx.unwrap_or_default();
        let file_log = file_config.log.unwrap_or_default();
        let file_backfill = file_config.backfill.unwrap_or_default();

        let defaults_influx = InfluxConfig::default();
        let defaults_log = LogSourceConfig::default();

        let influx = InfluxConfig {
            url: cli
                .influx_url
                .clone()
                .or(file_influx.url)
                .unwrap_or(defaults_influx.url),
            database: cli
                .database
                .clone()
                .or(file_influx.database)
                .unwrap_or(defaults_influx.database),
            user: cli.influx_user.clone().or(file_influx.user),
            password: cli.influx_password.clone().or(file_influx.password),
            timeout_secs: file_influx
                .timeout_secs
                .unwrap_or(defaults_influx.timeout_secs),
        };

        let log = LogSourceConfig {
            measurement: file_log.measurement.unwrap_or(defaults_log.measurement),
            sp_tag: file_log.sp_tag.unwrap_or(defaults_log.sp_tag),
            idp_tag: file_log.idp_tag.unwrap_or(defaults_log.idp_tag),
        };

        let backfill = BackfillConfig {
            skip_index_wait: cli.no_wait || file_backfill.skip_index_wait.unwrap_or(false),
        };

        Ok(Self {
            influx,
            log,
            backfill,
        })
    }

    /// CLI-specified path (must exist) or the local config file if present
    fn config_path(cli: &CliConfig) -> Result<Option<PathBuf>> {
        if let Some(ref path) = cli.config {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.clone()));
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(Some(local));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(&CliConfig::default()).unwrap();
        assert_eq!(config.influx.url, DEFAULT_INFLUX_URL);
        assert_eq!(config.influx.database, DEFAULT_DATABASE);
        assert_eq!(config.log.measurement, "eb_logins");
        assert_eq!(config.log.sp_tag, "sp_entity_id");
        assert_eq!(config.log.idp_tag, "idp_entity_id");
        assert!(!config.backfill.skip_index_wait);
    }

    #[test]
    fn test_file_config_layered_under_cli() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "influx": {{"url": "http://influx:8086", "database": "stats_file"}},
                "log": {{"measurement": "logins"}},
                "backfill": {{"skip_index_wait": true}}
            }}"#
        )
        .unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            database: Some("stats_cli".to_string()),
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();

        // CLI wins over file, file wins over defaults
        assert_eq!(config.influx.database, "stats_cli");
        assert_eq!(config.influx.url, "http://influx:8086");
        assert_eq!(config.log.measurement, "logins");
        assert_eq!(config.log.sp_tag, "sp_entity_id");
        assert!(config.backfill.skip_index_wait);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/nonexistent/loginstats.json")),
            ..Default::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }

    #[test]
    fn test_no_wait_flag_selects_skip() {
        let cli = CliConfig {
            no_wait: true,
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();
        assert!(config.backfill.skip_index_wait);
    }
}
