//! Plugin discovery and manifest generation.
//!
//! This crate holds the whole discovery-and-generation pipeline: probing
//! plugin entry points for existence, scanning tier directories in listing
//! order, concatenating the three tiers into the final client and server
//! import lists, and regenerating the two manifest files from scratch.
//!
//! Nothing here loads or validates plugin code; a plugin contributes an
//! import purely because its conventional entry-point file exists and is
//! non-empty at scan time.

pub mod aggregate;
pub mod errors;
pub mod import_path;
pub mod probe;
pub mod scanner;
pub mod writer;

pub use aggregate::{aggregate, ManifestImports};
pub use errors::ManifestError;
pub use import_path::ImportPath;
pub use probe::is_empty_or_missing;
pub use scanner::{scan_tier, TierScan};
pub use writer::{write_manifest, GENERATED_BANNER};
