//! Configuration file support.
//!
//! A config file is TOML with two optional tables:
//!
//! ```toml
//! [chart]
//! locale = "nepali"
//! include_lagna_in_houses = true
//!
//! [output]
//! format = "table"   # table | json | prompt
//! ```
//!
//! Missing tables and keys fall back to defaults; unknown keys are rejected.

pub mod error;

use std::path::Path;

use kundali_base::ChartConfig;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// How a chart is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// House and strength tables.
    #[default]
    Table,
    /// The chart as pretty-printed JSON.
    Json,
    /// The prompt summary block.
    Prompt,
}

impl OutputFormat {
    pub fn from_code(code: &str) -> Option<OutputFormat> {
        match code.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "prompt" => Some(Self::Prompt),
            _ => None,
        }
    }
}

/// `[output]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Whole config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundaliConfig {
    pub chart: ChartConfig,
    pub output: OutputConfig,
}

impl KundaliConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

/// Load config from a TOML file.
pub fn load_config(path: &Path) -> Result<KundaliConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = KundaliConfig::from_toml_str(&text)?;
    tracing::debug!(
        target: "kundali::config",
        path = %path.display(),
        locale = config.chart.locale.code(),
        "config loaded"
    );
    Ok(config)
}

/// Load config from `path` if given, otherwise use defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<KundaliConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(KundaliConfig::default()),
    }
}
