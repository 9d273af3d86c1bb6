//! Cross-tier aggregation of discovered entry points.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::import_path::ImportPath;
use crate::scanner::scan_tier;

/// Final ordered import lists for the two manifests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManifestImports {
    pub client: Vec<ImportPath>,
    pub server: Vec<ImportPath>,
}

/// Scan the three tier directories in priority order and concatenate the
/// results.
///
/// Client imports are the three tiers' client lists in tier order. Server
/// imports are the three server lists in tier order, followed by the three
/// registry lists in tier order — registration always loads after every
/// server entry. Within-tier order is preserved verbatim and duplicates
/// across tiers are kept: tiers layer, they do not shadow at the import
/// level (the host's registration logic owns any override semantics).
pub fn aggregate(app_root: &Path, tiers: &[PathBuf; 3], ext: &str) -> ManifestImports {
    let [tier_a, tier_b, tier_c] = [
        scan_tier(app_root, &tiers[0], ext),
        scan_tier(app_root, &tiers[1], ext),
        scan_tier(app_root, &tiers[2], ext),
    ];

    let mut client = tier_a.client;
    client.extend(tier_b.client);
    client.extend(tier_c.client);

    let mut server = tier_a.server;
    server.extend(tier_b.server);
    server.extend(tier_c.server);
    server.extend(tier_a.registry);
    server.extend(tier_b.registry);
    server.extend(tier_c.registry);

    info!(
        "Discovered {} client and {} server entry points",
        client.len(),
        server.len()
    );

    ManifestImports { client, server }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_plugin(tier: &Path, name: &str, client: bool, server: bool, register: bool) {
        let plugin = tier.join(name);
        if client {
            let _ = fs::create_dir_all(plugin.join("client"));
            let _ = fs::write(plugin.join("client").join("index.js"), "export {};\n");
        }
        if server {
            let _ = fs::create_dir_all(plugin.join("server"));
            let _ = fs::write(plugin.join("server").join("index.js"), "export {};\n");
        }
        if register {
            let _ = fs::create_dir_all(&plugin);
            let _ = fs::write(plugin.join("register.js"), "register();\n");
        }
    }

    fn as_strs(imports: &[ImportPath]) -> Vec<&str> {
        imports.iter().map(ImportPath::as_str).collect()
    }

    #[test]
    fn test_tier_order_preserved() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        // One plugin per tier so ordering does not depend on listing order
        add_plugin(&root.join("core"), "alpha", true, false, false);
        add_plugin(&root.join("included"), "beta", true, false, false);
        add_plugin(&root.join("custom"), "gamma", true, false, false);

        let tiers = [
            root.join("core"),
            root.join("included"),
            root.join("custom"),
        ];
        let imports = aggregate(root, &tiers, "js");

        assert_eq!(
            as_strs(&imports.client),
            vec![
                "/core/alpha/client",
                "/included/beta/client",
                "/custom/gamma/client",
            ]
        );
    }

    #[test]
    fn test_registry_follows_all_server_entries() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        // Registry in the highest-priority tier, server entry in the lowest:
        // the register import must still come last.
        add_plugin(&root.join("core"), "alpha", false, true, true);
        add_plugin(&root.join("custom"), "gamma", false, true, false);

        let tiers = [
            root.join("core"),
            root.join("included"),
            root.join("custom"),
        ];
        let imports = aggregate(root, &tiers, "js");

        assert_eq!(
            as_strs(&imports.server),
            vec![
                "/core/alpha/server",
                "/custom/gamma/server",
                "/core/alpha/register.js",
            ]
        );
        assert!(imports.client.is_empty());
    }

    #[test]
    fn test_duplicate_plugin_names_kept() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        add_plugin(&root.join("core"), "widgets", true, false, false);
        add_plugin(&root.join("custom"), "widgets", true, false, false);

        let tiers = [
            root.join("core"),
            root.join("included"),
            root.join("custom"),
        ];
        let imports = aggregate(root, &tiers, "js");

        assert_eq!(
            as_strs(&imports.client),
            vec!["/core/widgets/client", "/custom/widgets/client"]
        );
    }

    #[test]
    fn test_all_tiers_missing() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let root = temp_dir.path();
        let tiers = [root.join("a"), root.join("b"), root.join("c")];
        let imports = aggregate(root, &tiers, "js");
        assert_eq!(imports, ManifestImports::default());
    }
}
