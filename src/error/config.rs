//! Configuration and command-line errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("invalid API URL '{url}': must start with http:// or https://")]
    InvalidApiUrl { url: String },

    #[error("could not determine home directory")]
    NoHomeDirectory,
}
