//! Entry store and durable storage for the automatic-thoughts journal.
//!
//! The journal keeps its entries as one ordered list, newest first, and
//! persists the whole list as a single JSON document under a fixed key.
//!
//! # Architecture
//!
//! ```text
//! FormController / presentation
//!     |
//!     +-- append / clear / snapshot --> EntryStore (in-memory Snapshot)
//!                                          |
//!                                          +-- encode/decode --> document
//!                                          |
//!                                          +-- read/write ----> Storage
//!                                               |-- FileStorage   (one file per key)
//!                                               +-- MemoryStorage (process memory)
//! ```
//!
//! # Modules
//!
//! - [`entry_store`] -- The [`EntryStore`], its [`Snapshot`] and mutation results
//! - [`document`] -- Persisted document encoding and lenient decoding
//! - [`storage`] -- The [`Storage`] trait and its backends
//! - [`error`] -- Shared error types

pub mod document;
pub mod entry_store;
pub mod error;
pub mod storage;

// Re-export primary types for convenience.
pub use entry_store::{Commit, EntryStore, LoadOutcome, Snapshot};
pub use error::{DuplicateId, StoreError};
pub use storage::{FileStorage, MemoryStorage, Storage};
