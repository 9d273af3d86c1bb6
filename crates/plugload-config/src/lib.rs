//! Configuration for the plugload manifest generator.
//!
//! Everything here is resolved relative to the host application root: the
//! optional `plugload.toml` settings file, the three plugin tier directories,
//! and the two manifest targets. The execution mode decides whether a run
//! generates anything at all.

pub mod error;
pub mod mode;
pub mod settings;

pub use error::ConfigError;
pub use mode::ExecutionMode;
pub use settings::{GeneratorConfig, TierDirs, CONFIG_FILE};
