use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the item document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read item document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write item document {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed item document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode item document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("item store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
