//! Configuration Management
//!
//! Loads calculator settings from TOML files.
//! Configuration includes:
//! - Output settings (format, decimal precision, color)
//! - Logging filter
//!
//! Precedence, lowest to highest: defaults, config file, `SIMPLECALC_*`
//! environment variables, command-line flags.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::errors::CalcError;

/// Largest accepted decimal precision for text output.
pub const MAX_PRECISION: usize = 17;

/// File name probed in the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "simplecalc.toml";

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CalcError::Config(format!("unknown output format '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Fixed number of decimals for the result; `None` prints the shortest
    /// representation that round-trips.
    #[serde(default)]
    pub precision: Option<usize>,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: None,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"simplecalc=debug"`
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from `path`, or from the default locations when
    /// no path is given, then apply environment overrides and validate.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = Self::load_unvalidated(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::load`] without the final `validate()`, for callers
    /// that layer further overrides on top and validate the merged result.
    pub fn load_unvalidated(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(PathBuf::from(p))?,
            None => {
                let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
                if let Some(home) = dirs::home_dir() {
                    candidates.push(home.join(".config/simplecalc/config.toml"));
                }

                match candidates.into_iter().find(|p| p.is_file()) {
                    Some(found) => Self::from_file(found)?,
                    None => {
                        debug!("No config file found, using defaults");
                        Self::default()
                    }
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read and parse a single TOML file.
    pub fn from_file(path: PathBuf) -> std::result::Result<Self, CalcError> {
        let content = std::fs::read_to_string(&path).map_err(|source| CalcError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| CalcError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `SIMPLECALC_*` overrides. Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("SIMPLECALC_OUTPUT_FORMAT") {
            if let Ok(f) = format.parse::<OutputFormat>() {
                self.output.format = f;
            }
        }
        if let Some(precision) = lookup("SIMPLECALC_PRECISION") {
            if let Ok(p) = precision.trim().parse::<usize>() {
                self.output.precision = Some(p);
            }
        }
        if let Some(filter) = lookup("SIMPLECALC_LOG") {
            if !filter.trim().is_empty() {
                self.logging.filter = Some(filter);
            }
        }
    }

    pub fn validate(&self) -> std::result::Result<(), CalcError> {
        if let Some(p) = self.output.precision {
            if p > MAX_PRECISION {
                return Err(CalcError::Config(format!(
                    "precision {} exceeds maximum of {}",
                    p, MAX_PRECISION
                )));
            }
        }
        Ok(())
    }
}
