//! Dry-run discovery: print what `generate` would import, write nothing.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use plugload_config::GeneratorConfig;
use plugload_manifest::{aggregate, ImportPath};

pub fn run(app_root: &Path) -> Result<()> {
    let config = GeneratorConfig::load(app_root)
        .with_context(|| format!("failed to load config from {}", app_root.display()))?;

    let tiers = config.tier_dirs(app_root);
    let imports = aggregate(app_root, &tiers, &config.source_ext);

    print_section("Client imports:", &imports.client);
    print_section("Server imports:", &imports.server);

    Ok(())
}

fn print_section(title: &str, imports: &[ImportPath]) {
    println!("{}", title.bold().green());
    if imports.is_empty() {
        println!("  {}", "(none)".yellow());
        return;
    }
    for import in imports {
        println!("  {}", import);
    }
}
