//! Configuration parsing and validation.
//!
//! Handles nre.toml discovery and parsing with version validation. A file
//! named with `-C`/`NRE_CONFIG` is parsed strictly; a discovered file only
//! warns about keys it does not know.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::color::ColorMode;
use crate::error::{Error, Result};

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "nre.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Output defaults, overridable from the command line.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format: text or json.
    #[serde(default)]
    pub format: OutputFormat,

    /// Single-line JSON.
    #[serde(default)]
    pub compact: bool,

    /// Color mode: auto, always, or never.
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            output: OutputConfig::default(),
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "output"];

/// Known output keys in the config.
const KNOWN_OUTPUT_KEYS: &[&str] = &["format", "compact", "color"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

/// Look for nre.toml in `start` and its ancestors, giving up past the
/// directory that holds `.git`.
pub fn discover(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Load the active config.
///
/// An explicit path must exist and is parsed strictly. Otherwise the file
/// discovered from `cwd` is parsed leniently, and without one the defaults
/// apply.
pub fn load_resolved(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(config_error(
                path,
                format!("config file not found: {}", path.display()),
            ));
        }
        return load(path);
    }
    match discover(cwd) {
        Some(path) => load_with_warnings(&path),
        None => {
            tracing::debug!("no config found under {}, using defaults", cwd.display());
            Ok(Config::default())
        }
    }
}

fn read(path: &Path) -> Result<String> {
    tracing::debug!("loading config from {}", path.display());
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }
    Ok(())
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;
    check_version(version, path)?;

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys instead of rejecting them.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    if version_check.version.is_none() {
        return Err(config_error(path, "missing required field: version"));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;
    check_version(flexible.version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let output = match flexible.output {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_OUTPUT_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("output.{}", key));
                }
            }

            let format = match t.get("format").and_then(|v| v.as_str()) {
                Some("text") | None => OutputFormat::Text,
                Some("json") => OutputFormat::Json,
                Some(other) => {
                    warn_invalid_value(path, "output.format", other);
                    OutputFormat::default()
                }
            };

            let compact = t
                .get("compact")
                .and_then(|v| v.as_bool())
                .unwrap_or_default();

            let color = match t.get("color").and_then(|v| v.as_str()) {
                Some("auto") | None => ColorMode::Auto,
                Some("always") => ColorMode::Always,
                Some("never") => ColorMode::Never,
                Some(other) => {
                    warn_invalid_value(path, "output.color", other);
                    ColorMode::default()
                }
            };

            OutputConfig {
                format,
                compact,
                color,
            }
        }
        Some(_) => {
            warn_invalid_value(path, "output", "(not a table)");
            OutputConfig::default()
        }
        None => OutputConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        output,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "nre: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn warn_invalid_value(path: &Path, key: &str, value: &str) {
    eprintln!(
        "nre: warning: {}: invalid value `{}` for `{}` (using default)",
        path.display(),
        value,
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
