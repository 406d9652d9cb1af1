//! Error types for the entry store.
//!
//! Storage failures are propagated via [`StoreError`]. They are
//! recoverable: the store logs them and keeps serving its in-memory list.
//! [`DuplicateId`] is the only error that rejects a mutation outright.

use jurnal_types::EntryId;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filesystem operation on a storage slot failed.
    #[error("storage I/O error for slot {key:?}: {source}")]
    Io {
        /// The slot being accessed.
        key: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The persisted document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The slot key cannot be mapped onto the backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// An appended entry reused an identifier already in the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("entry {0} is already in the journal")]
pub struct DuplicateId(pub EntryId);
