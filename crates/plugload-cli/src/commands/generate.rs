//! Manifest generation orchestration.
//!
//! Runs once per invocation: gate on the execution mode, scan the three
//! tiers, then regenerate the client and server manifests. Scanning always
//! completes before any write begins.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use plugload_config::{ExecutionMode, GeneratorConfig};
use plugload_manifest::{aggregate, write_manifest};

/// Resolve the execution mode (flag, then `APP_ENV`, then development) and
/// regenerate both manifests for the application at `app_root`.
pub fn run(app_root: &Path, mode_flag: Option<&str>) -> Result<()> {
    let mode = ExecutionMode::resolve(mode_flag)?;
    run_with_mode(app_root, mode)
}

/// Regenerate both manifests under an explicit execution mode.
///
/// Production and test modes are a no-op: those deployments run against the
/// manifests generated during development. Any write failure is fatal so a
/// broken plugin layout fails the startup sequence instead of silently
/// producing a partial application.
pub fn run_with_mode(app_root: &Path, mode: ExecutionMode) -> Result<()> {
    if mode.skips_generation() {
        info!("Skipping plugin manifest generation in {} mode", mode);
        return Ok(());
    }

    let config = GeneratorConfig::load(app_root)
        .with_context(|| format!("failed to load config from {}", app_root.display()))?;

    let tiers = config.tier_dirs(app_root);
    let imports = aggregate(app_root, &tiers, &config.source_ext);

    write_manifest(&config.client_manifest_path(app_root), &imports.client)?;
    write_manifest(&config.server_manifest_path(app_root), &imports.server)?;

    info!("Plugin manifests regenerated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_production_mode_is_a_noop() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();

        let result = run_with_mode(root, ExecutionMode::Production);
        assert!(result.is_ok());

        // Nothing was generated
        assert!(!root.join("imports/plugins/client/plugins.js").exists());
        assert!(!root.join("imports/plugins/server/plugins.js").exists());
    }

    #[test]
    fn test_development_mode_generates_both_manifests() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        let widgets = root.join("imports/plugins/core/widgets");
        let Ok(()) = fs::create_dir_all(widgets.join("client")) else {
            return;
        };
        let _ = fs::write(widgets.join("client").join("index.js"), "export {};\n");
        let _ = fs::write(widgets.join("register.js"), "register();\n");

        let result = run_with_mode(root, ExecutionMode::Development);
        assert!(result.is_ok(), "generation failed");

        let client = fs::read_to_string(root.join("imports/plugins/client/plugins.js"))
            .unwrap_or_default();
        assert!(client.contains("import \"/imports/plugins/core/widgets/client\";"));

        let server = fs::read_to_string(root.join("imports/plugins/server/plugins.js"))
            .unwrap_or_default();
        assert!(server.contains("import \"/imports/plugins/core/widgets/register.js\";"));
        assert!(!server.contains("/widgets/client"));
    }
}
