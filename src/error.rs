//! Errors raised while reading the shared configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure to read or decode `tsloc.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Read {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::SharedConfig`].
    #[error("failed to parse configuration from {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
}
