//! Manifest file generation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::ManifestError;
use crate::import_path::ImportPath;

/// Banner written at the top of every generated manifest.
pub const GENERATED_BANNER: &str = "/**
 * ***** DO NOT EDIT THIS FILE MANUALLY *****
 * This file is generated automatically by the plugin loader
 * and will be reset at each startup.
 */
";

/// Regenerate `target` from scratch with one import statement per entry.
///
/// The target is truncated and rewritten in full, never patched. A failure
/// may leave a partial file behind; the next successful run replaces it.
/// Output depends only on `imports`, so repeated runs over an unchanged
/// tree produce byte-identical files.
pub fn write_manifest(target: &Path, imports: &[ImportPath]) -> Result<(), ManifestError> {
    let write_err = |source: io::Error| ManifestError::Write {
        path: target.to_path_buf(),
        source,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    info!("Resetting manifest {:?}", target);
    let mut file = fs::File::create(target).map_err(write_err)?;
    file.write_all(GENERATED_BANNER.as_bytes()).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;

    for import in imports {
        debug!("Importing {}", import);
        writeln!(file, "import \"{}\";", import).map_err(write_err)?;
    }

    Ok(())
}
