use std::io;
use thiserror::Error;

/// Errors raised while loading generator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown execution mode '{0}' (expected development, production, or test)")]
    UnknownMode(String),
}
