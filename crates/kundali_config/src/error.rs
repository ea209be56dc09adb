//! Error types for config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or parsing a config file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid config TOML.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
