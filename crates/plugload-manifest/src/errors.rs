use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during manifest generation
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to create, truncate, or append to a manifest target.
    /// Always fatal to the run.
    #[error("failed to write manifest {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unexpected I/O failure while probing a plugin directory.
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
