//! Per-tier plugin discovery.
//!
//! Each immediate subdirectory of a tier directory is one plugin. Three
//! conventional entry points are probed per plugin:
//!
//! - `<plugin>/client/index.<ext>` — contributes the `<plugin>/client`
//!   directory import (the host module system resolves a directory to its
//!   index file, which lets plugins ship multiple files there)
//! - `<plugin>/server/index.<ext>` — contributes `<plugin>/server`
//! - `<plugin>/register.<ext>` — contributes the file import itself
//!
//! Listing order is the OS-reported order; nothing is sorted.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ManifestError;
use crate::import_path::ImportPath;
use crate::probe::is_empty_or_missing;

/// Entry points discovered in one tier directory, in listing order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TierScan {
    pub client: Vec<ImportPath>,
    pub server: Vec<ImportPath>,
    pub registry: Vec<ImportPath>,
}

/// Scan one tier directory for plugin entry points.
///
/// A missing or unlistable tier directory yields an empty scan. A probe
/// failure inside one plugin skips that whole plugin (no partial entry set)
/// and the scan continues with the remaining plugins.
pub fn scan_tier(app_root: &Path, base_dir: &Path, ext: &str) -> TierScan {
    let mut scan = TierScan::default();

    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Tier directory {:?} not scanned: {}", base_dir, err);
            return scan;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry in {:?}: {}", base_dir, err);
                continue;
            }
        };

        let plugin_dir = entry.path();
        if !plugin_dir.is_dir() {
            continue;
        }

        if let Err(err) = scan_plugin(app_root, &plugin_dir, ext, &mut scan) {
            warn!("Skipping plugin: {}", err);
        }
    }

    scan
}

/// Probe one plugin directory and append its present entry points.
///
/// All three candidates are probed before anything is appended, so a probe
/// failure leaves the tier scan untouched for this plugin.
fn scan_plugin(
    app_root: &Path,
    plugin_dir: &Path,
    ext: &str,
    scan: &mut TierScan,
) -> Result<(), ManifestError> {
    let scan_err = |source| ManifestError::Scan {
        path: plugin_dir.to_path_buf(),
        source,
    };

    let client_dir = plugin_dir.join("client");
    let server_dir = plugin_dir.join("server");
    let register_file = plugin_dir.join(format!("register.{}", ext));

    let index = format!("index.{}", ext);
    let has_client = !is_empty_or_missing(&client_dir.join(&index)).map_err(scan_err)?;
    let has_server = !is_empty_or_missing(&server_dir.join(&index)).map_err(scan_err)?;
    let has_register = !is_empty_or_missing(&register_file).map_err(scan_err)?;

    if has_client {
        if let Some(import) = ImportPath::from_app_path(app_root, &client_dir) {
            debug!("Client entry point: {}", import);
            scan.client.push(import);
        } else {
            warn!("Plugin {:?} is outside the app root, ignoring", plugin_dir);
            return Ok(());
        }
    }
    if has_server {
        if let Some(import) = ImportPath::from_app_path(app_root, &server_dir) {
            debug!("Server entry point: {}", import);
            scan.server.push(import);
        }
    }
    if has_register {
        if let Some(import) = ImportPath::from_app_path(app_root, &register_file) {
            debug!("Registry entry point: {}", import);
            scan.registry.push(import);
        }
    }

    Ok(())
}
