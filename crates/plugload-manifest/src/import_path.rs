//! Root-relative import paths as they appear in generated manifests.

use std::fmt;
use std::path::Path;

/// A root-relative, forward-slash import path.
///
/// Values are only constructed from paths that were just probed non-empty,
/// so every `ImportPath` in a manifest resolved to a real filesystem
/// location at scan time. Separators are normalized to `/` on every OS and
/// the path always starts with a single leading `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPath(String);

impl ImportPath {
    /// Build the import path for `target` relative to `app_root`.
    ///
    /// Returns `None` when `target` is not under `app_root` (a misconfigured
    /// tier directory) or equals it.
    pub fn from_app_path(app_root: &Path, target: &Path) -> Option<Self> {
        let relative = target.strip_prefix(app_root).ok()?;

        let mut rendered = String::new();
        for component in relative.components() {
            rendered.push('/');
            rendered.push_str(&component.as_os_str().to_string_lossy());
        }
        if rendered.is_empty() {
            return None;
        }
        Some(ImportPath(rendered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
