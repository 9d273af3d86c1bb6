//! Generator settings loaded from the host application root.
//!
//! The settings file is optional: a missing `plugload.toml` yields the
//! default layout, which matches the conventional plugin tree
//! (`imports/plugins/{core,included,custom}`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Name of the optional settings file in the application root.
pub const CONFIG_FILE: &str = "plugload.toml";

/// The three plugin tier directories, relative to the application root,
/// in priority order.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TierDirs {
    pub core: PathBuf,
    pub included: PathBuf,
    pub custom: PathBuf,
}

impl Default for TierDirs {
    fn default() -> Self {
        TierDirs {
            core: PathBuf::from("imports/plugins/core"),
            included: PathBuf::from("imports/plugins/included"),
            custom: PathBuf::from("imports/plugins/custom"),
        }
    }
}

/// Settings controlling discovery and manifest output.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Extension of plugin entry-point source files.
    pub source_ext: String,
    pub tiers: TierDirs,
    /// Target of the generated client manifest, relative to the app root.
    pub client_manifest: PathBuf,
    /// Target of the generated server manifest, relative to the app root.
    pub server_manifest: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            source_ext: "js".to_string(),
            tiers: TierDirs::default(),
            client_manifest: PathBuf::from("imports/plugins/client/plugins.js"),
            server_manifest: PathBuf::from("imports/plugins/server/plugins.js"),
        }
    }
}

impl GeneratorConfig {
    /// Load settings from `<app_root>/plugload.toml`, falling back to the
    /// defaults when the file does not exist.
    pub fn load(app_root: &Path) -> Result<Self, ConfigError> {
        let path = app_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(GeneratorConfig::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Absolute tier directories in scan order (core, included, custom).
    pub fn tier_dirs(&self, app_root: &Path) -> [PathBuf; 3] {
        [
            app_root.join(&self.tiers.core),
            app_root.join(&self.tiers.included),
            app_root.join(&self.tiers.custom),
        ]
    }

    pub fn client_manifest_path(&self, app_root: &Path) -> PathBuf {
        app_root.join(&self.client_manifest)
    }

    pub fn server_manifest_path(&self, app_root: &Path) -> PathBuf {
        app_root.join(&self.server_manifest)
    }
}
