//! Catalogue loading error taxonomy.

use std::path::PathBuf;

/// Errors raised while loading a catalogue snapshot from disk.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue snapshot {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalogue snapshot {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
