//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.bookings/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::dates::{self, DEFAULT_DATE_FORMAT};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookingsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub picker: PickerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub date_format: Option<String>,
    pub confirm_delete: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PickerConfig {
    pub week_start: Option<WeekStart>,
}

/// First column of the date picker's month grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub date_format: String,
    pub confirm_delete: bool,
    pub week_start: WeekStart,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            confirm_delete: false,
            week_start: WeekStart::default(),
        }
    }
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

/// Returns the path to `~/.bookings/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bookings").join("config.toml"))
}

/// Load config from `~/.bookings/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BookingsConfig::default()`.
pub fn load_config() -> Result<BookingsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BookingsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BookingsConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<BookingsConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BookingsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Bookings Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# date_format = "%m/%d/%Y"           # strftime pattern, or BOOKINGS_DATE_FORMAT env var
# confirm_delete = false             # press d twice to delete a booking

# [picker]
# week_start = "sunday"              # "sunday" or "monday"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BookingsConfig, cli_date_format: Option<&str>) -> ResolvedConfig {
    resolve_with_env(
        config,
        cli_date_format,
        std::env::var("BOOKINGS_DATE_FORMAT").ok(),
    )
}

fn resolve_with_env(
    config: &BookingsConfig,
    cli_date_format: Option<&str>,
    env_date_format: Option<String>,
) -> ResolvedConfig {
    // Date format: CLI → env → config → default
    let requested = cli_date_format
        .map(|s| s.to_string())
        .or(env_date_format)
        .or_else(|| config.general.date_format.clone());

    let date_format = match requested {
        Some(format) if dates::is_valid_format(&format) => format,
        Some(format) => {
            warn!(
                "Ignoring invalid date format {:?}, using {}",
                format, DEFAULT_DATE_FORMAT
            );
            DEFAULT_DATE_FORMAT.to_string()
        }
        None => DEFAULT_DATE_FORMAT.to_string(),
    };

    ResolvedConfig {
        date_format,
        confirm_delete: config.general.confirm_delete.unwrap_or(false),
        week_start: config.picker.week_start.unwrap_or_default(),
    }
}

/// Log level: CLI → `BOOKINGS_LOG` env var → info.
pub fn resolve_log_level(cli: Option<LevelFilter>) -> LevelFilter {
    cli.or_else(|| {
        std::env::var("BOOKINGS_LOG")
            .ok()
            .and_then(|s| LevelFilter::from_str(&s).ok())
    })
    .unwrap_or(LevelFilter::Info)
}
