//! Execution mode of the host application.
//!
//! Manifest generation only runs during development. Production and test
//! deployments use the manifests generated (and committed) beforehand, so the
//! generator must be a no-op there. The mode is passed explicitly into the
//! orchestration path rather than read ambiently, which keeps both the gated
//! and ungated branches testable.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Deployment mode of the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Development,
    Production,
    Test,
}

impl ExecutionMode {
    /// Environment variable consulted when no explicit mode is given.
    pub const ENV_VAR: &'static str = "APP_ENV";

    /// Whether this mode skips manifest generation entirely.
    pub fn skips_generation(self) -> bool {
        matches!(self, ExecutionMode::Production | ExecutionMode::Test)
    }

    /// Resolve the effective mode: an explicit value wins, then `APP_ENV`,
    /// then development.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = explicit {
            return raw.parse();
        }
        match std::env::var(Self::ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(ExecutionMode::Development),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(ExecutionMode::Development),
            "production" | "prod" => Ok(ExecutionMode::Production),
            "test" | "app-test" => Ok(ExecutionMode::Test),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionMode::Development => "development",
            ExecutionMode::Production => "production",
            ExecutionMode::Test => "test",
        };
        write!(f, "{}", name)
    }
}
