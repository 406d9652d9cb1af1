//! The entry store: the journal's ordered entry list and its durable slot.
//!
//! [`EntryStore`] is constructed once per session and passed by reference
//! to whoever needs it. It owns the current list as an immutable
//! [`Snapshot`]; every mutation builds a new snapshot, swaps it in, and
//! rewrites the whole persisted document.
//!
//! # Failure model
//!
//! - Loading never fails. A missing slot yields an empty journal; an
//!   unreadable slot or corrupt document yields an empty journal plus a
//!   warning, recorded in [`LoadOutcome`].
//! - A failed write after a mutation is reported in [`Commit::write`] and
//!   logged, but the in-memory mutation stands. The list stays correct for
//!   the session even if it will not survive a reload.

use std::ops::Deref;
use std::sync::Arc;

use jurnal_types::{EntryId, JournalEntry};

use crate::document;
use crate::error::{DuplicateId, StoreError};
use crate::storage::Storage;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// An immutable view of the entry list at one point in time, newest first.
///
/// Cloning is cheap. A snapshot never changes after it is taken, even when
/// the store is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[JournalEntry]>);

impl Snapshot {
    /// The empty snapshot.
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// The entries, newest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.0
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Snapshot {
    type Target = [JournalEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<JournalEntry>> for Snapshot {
    fn from(entries: Vec<JournalEntry>) -> Self {
        Self(Arc::from(entries))
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// What happened when the store last read its slot.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Nothing had been persisted under the key yet.
    Fresh,
    /// The document was read.
    Loaded {
        /// Entries restored.
        count: usize,
        /// Malformed records dropped.
        skipped: usize,
        /// Entries given a new identifier because theirs was taken.
        reassigned: usize,
    },
    /// The slot could not be read or decoded; the journal started empty.
    Recovered(StoreError),
}

impl LoadOutcome {
    /// Whether loading had to fall back to an empty journal.
    pub const fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered(_))
    }
}

/// The result of a mutation.
#[derive(Debug)]
pub struct Commit {
    /// The entry list after the mutation.
    pub snapshot: Snapshot,
    /// Whether the list reached durable storage.
    pub write: Result<(), StoreError>,
}

impl Commit {
    /// Whether the mutation was persisted.
    pub const fn is_persisted(&self) -> bool {
        self.write.is_ok()
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The journal's ordered entry list bound to one durable storage slot.
#[derive(Debug)]
pub struct EntryStore<S> {
    storage: S,
    key: String,
    entries: Snapshot,
    load_outcome: LoadOutcome,
}

impl<S: Storage> EntryStore<S> {
    /// Open the store, restoring whatever was persisted under `key`.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (entries, load_outcome) = read_slot(&storage, &key);
        Self {
            storage,
            key,
            entries,
            load_outcome,
        }
    }

    /// Re-read the slot, discarding the in-memory list.
    ///
    /// Equivalent to closing and reopening the journal.
    pub fn reload(&mut self) -> Snapshot {
        let (entries, load_outcome) = read_slot(&self.storage, &self.key);
        self.entries = entries;
        self.load_outcome = load_outcome;
        self.snapshot()
    }

    /// Put `candidate` at the front of the list and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateId`] if an entry with the same ID is already
    /// stored; the list is left unchanged. Persistence failures are not
    /// errors here; see [`Commit::write`].
    pub fn append(&mut self, candidate: JournalEntry) -> Result<Commit, DuplicateId> {
        let id = candidate.id();
        if self.contains(id) {
            return Err(DuplicateId(id));
        }

        let mut next = Vec::with_capacity(self.entries.len().saturating_add(1));
        next.push(candidate);
        next.extend(self.entries.iter().cloned());

        let commit = self.commit(Snapshot::from(next));
        tracing::debug!(%id, count = commit.snapshot.len(), "Appended journal entry");
        Ok(commit)
    }

    /// Drop every entry and persist the empty list.
    ///
    /// The caller is responsible for having obtained the user's
    /// confirmation first.
    pub fn clear(&mut self) -> Commit {
        let previous = self.entries.len();
        let commit = self.commit(Snapshot::empty());
        tracing::info!(previous, "Cleared journal");
        commit
    }

    /// The current entry list, newest first.
    pub fn snapshot(&self) -> Snapshot {
        self.entries.clone()
    }

    /// Whether an entry with `id` is stored.
    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The storage key this store is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// What happened on the most recent load.
    pub const fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// The storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Close the store and hand back its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Swap in `next` and write it out. The swap happens regardless of the
    /// write result.
    fn commit(&mut self, next: Snapshot) -> Commit {
        let write = document::encode(&next)
            .and_then(|doc| self.storage.write(&self.key, &doc));

        if let Err(error) = &write {
            tracing::warn!(
                key = %self.key,
                %error,
                "Failed to persist journal; changes are kept for this session only"
            );
        }

        self.entries = next;
        Commit {
            snapshot: self.snapshot(),
            write,
        }
    }
}

/// Read and decode the slot, falling back to an empty list on any failure.
fn read_slot<S: Storage>(storage: &S, key: &str) -> (Snapshot, LoadOutcome) {
    let document = match storage.read(key) {
        Ok(Some(document)) => document,
        Ok(None) => {
            tracing::debug!(key, "No journal document found; starting empty");
            return (Snapshot::empty(), LoadOutcome::Fresh);
        }
        Err(error) => {
            tracing::warn!(key, %error, "Failed to read journal; starting empty");
            return (Snapshot::empty(), LoadOutcome::Recovered(error));
        }
    };

    match document::decode(&document) {
        Ok(decoded) => {
            let count = decoded.entries.len();
            tracing::debug!(
                key,
                count,
                skipped = decoded.skipped,
                reassigned = decoded.reassigned,
                "Loaded journal"
            );
            (
                Snapshot::from(decoded.entries),
                LoadOutcome::Loaded {
                    count,
                    skipped: decoded.skipped,
                    reassigned: decoded.reassigned,
                },
            )
        }
        Err(error) => {
            tracing::warn!(key, %error, "Journal document is corrupt; starting empty");
            (Snapshot::empty(), LoadOutcome::Recovered(error))
        }
    }
}
