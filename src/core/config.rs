//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.countries/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::RegionFilter;
use crate::core::state::DEFAULT_PAGE_SIZE;
use crate::network::target::DEFAULT_BASE_URL;
use crate::network::transport::MAX_TIMEOUT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountriesConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub page_size: Option<usize>,
    pub default_region: Option<RegionFilter>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub region: Option<RegionFilter>,
    pub page_size: Option<usize>,
    pub base_url: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub page_size: usize,
    pub region: RegionFilter,
    pub base_url: String,
    pub timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.countries/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".countries").join("config.toml"))
}

/// Load config from `~/.countries/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CountriesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CountriesConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(CountriesConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<CountriesConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CountriesConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CountriesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Countries Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_size = 24                     # rows added per scroll page
# default_region = "all"             # all, africa, americas, asia, europe, oceania, antarctic, polar

# [api]
# base_url = "https://restcountries.com"   # Or set COUNTRIES_BASE_URL env var
# timeout_secs = 30                  # 1..=30
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CountriesConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Page size: CLI → env → config → default
    let page_size = cli
        .page_size
        .or_else(|| {
            std::env::var("COUNTRIES_PAGE_SIZE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
        })
        .or(config.general.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    // Region: CLI → config → default
    let region = cli
        .region
        .or(config.general.default_region)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("COUNTRIES_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = config
        .api
        .timeout_secs
        .map(|secs| Duration::from_secs(secs.max(1)).min(MAX_TIMEOUT))
        .unwrap_or(MAX_TIMEOUT);

    ResolvedConfig {
        page_size,
        region,
        base_url,
        timeout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CountriesConfig::default();
        assert!(config.general.page_size.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CountriesConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.region, RegionFilter::All);
        assert_eq!(resolved.timeout, MAX_TIMEOUT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CountriesConfig {
            general: GeneralConfig {
                page_size: Some(10),
                default_region: Some(RegionFilter::Asia),
            },
            api: ApiConfig {
                base_url: None,
                timeout_secs: Some(5),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.region, RegionFilter::Asia);
        assert_eq!(resolved.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = CountriesConfig {
            general: GeneralConfig {
                page_size: Some(10),
                default_region: Some(RegionFilter::Asia),
            },
            api: ApiConfig {
                base_url: Some("http://config.example".to_string()),
                timeout_secs: None,
            },
        };
        let cli = CliOverrides {
            region: Some(RegionFilter::Europe),
            page_size: Some(7),
            base_url: Some("http://cli.example".to_string()),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.region, RegionFilter::Europe);
        assert_eq!(resolved.page_size, 7);
        assert_eq!(resolved.base_url, "http://cli.example");
    }

    #[test]
    fn test_resolve_clamps_values() {
        let config = CountriesConfig {
            api: ApiConfig {
                base_url: None,
                timeout_secs: Some(300),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            page_size: Some(0),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.page_size, 1);
        assert_eq!(resolved.timeout, MAX_TIMEOUT);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
page_size = 12
default_region = "europe"

[api]
base_url = "http://localhost:8080"
timeout_secs = 10
"#;
        let config: CountriesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.page_size, Some(12));
        assert_eq!(config.general.default_region, Some(RegionFilter::Europe));
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.api.timeout_secs, Some(10));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[api]
timeout_secs = 15
"#;
        let config: CountriesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.timeout_secs, Some(15));
        assert!(config.general.page_size.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_unknown_region_is_parse_error() {
        let result: Result<CountriesConfig, _> =
            toml::from_str("[general]\ndefault_region = \"atlantis\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("countries-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.page_size.is_none());
        assert!(path.exists());

        // the generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.api.base_url.is_none());

        let _ = fs::remove_dir_all(dir);
    }
}
