//! A journal session: one store and one form, wired from configuration.
//!
//! The session owns the per-user state that the presentation layer drives.
//! Everything is synchronous and single-threaded. Aggregates are pulled from
//! the current snapshot on demand and never cached.

use jurnal_store::{Commit, EntryStore, FileStorage, Snapshot, Storage, StoreError};
use tracing::info;

use crate::config::JournalConfig;
use crate::form::{FormController, Submitted, ValidationFailure};
use crate::view::{self, EntryCard, StatsPanel};

/// Errors that can occur when opening a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The configured storage slot cannot be used.
    #[error("storage misconfigured: {0}")]
    Storage(#[from] StoreError),
}

/// The journal's store and entry form, bound together.
#[derive(Debug)]
pub struct JournalSession<S = FileStorage> {
    store: EntryStore<S>,
    form: FormController,
}

impl JournalSession<FileStorage> {
    /// Open the journal on disk as described by `config`.
    ///
    /// A missing or corrupt journal document is not an error; the session
    /// starts empty and the store records why.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the configured key cannot be
    /// mapped onto a file in the data directory.
    pub fn open(config: &JournalConfig) -> Result<Self, SessionError> {
        let storage = FileStorage::new(&config.storage.data_dir);
        let path = storage.path_for(&config.storage.key)?;

        let session = Self::with_storage(storage, config);
        info!(
            path = %path.display(),
            entries = session.store.len(),
            recovered = session.store.load_outcome().is_recovered(),
            "Journal session opened"
        );
        Ok(session)
    }
}

impl<S: Storage> JournalSession<S> {
    /// Open the journal on any storage backend.
    pub fn with_storage(storage: S, config: &JournalConfig) -> Self {
        Self {
            store: EntryStore::load(storage, config.storage.key.as_str()),
            form: FormController::with_default_intensity(config.form.default_intensity),
        }
    }

    /// The entry store.
    pub const fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// The entry form.
    pub const fn form(&self) -> &FormController {
        &self.form
    }

    /// The entry form, for editing the draft.
    pub const fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Submit the current draft.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] when the draft is refused; nothing
    /// changes in that case.
    pub fn submit(&mut self) -> Result<Submitted, ValidationFailure> {
        self.form.submit(&mut self.store)
    }

    /// Erase the whole journal. Only call after the user accepted
    /// [`view::CLEAR_CONFIRMATION_PROMPT`].
    pub fn clear(&mut self) -> Commit {
        self.store.clear()
    }

    /// The current entry list, newest first.
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Statistics for the current entry list.
    pub fn stats(&self) -> StatsPanel {
        StatsPanel::from_entries(&self.store.snapshot())
    }

    /// Cards for the current entry list.
    pub fn cards(&self) -> Vec<EntryCard> {
        view::entry_cards(&self.store.snapshot())
    }

    /// Close the session and hand back the storage backend.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jurnal_store::MemoryStorage;

    use super::*;
    use crate::config::DEFAULT_STORAGE_KEY;

    fn session() -> JournalSession<MemoryStorage> {
        JournalSession::with_storage(MemoryStorage::new(), &JournalConfig::default())
    }

    #[test]
    fn submit_updates_stats() {
        let mut session = session();
        session.form_mut().set_emotion("Furie");
        session.form_mut().set_thought("Nu ar trebui să mi se întâmple asta!");
        session.form_mut().set_thought_type(Some(jurnal_types::ThoughtType::Irrational));
        session.submit().unwrap();

        let stats = session.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.thought_types.irrational, 1);
        assert_eq!(session.cards().len(), 1);
    }

    #[test]
    fn writes_under_configured_key() {
        let mut session = session();
        session.form_mut().set_emotion("Bucurie");
        session.form_mut().set_thought("A mers bine.");
        session.submit().unwrap();

        let storage = session.into_storage();
        assert!(storage.document(DEFAULT_STORAGE_KEY).is_some());
    }

    #[test]
    fn form_uses_configured_default_intensity() {
        let mut config = JournalConfig::default();
        config.form.default_intensity = 20;
        let session = JournalSession::with_storage(MemoryStorage::new(), &config);
        assert_eq!(session.form().draft().intensity, 20);
    }

    #[test]
    fn out_of_range_default_intensity_is_clamped() {
        let mut config = JournalConfig::default();
        config.form.default_intensity = 150;
        let session = JournalSession::with_storage(MemoryStorage::new(), &config);
        assert_eq!(session.form().draft().intensity, 100);
    }

    #[test]
    fn clear_empties_the_journal() {
        let mut session = session();
        session.form_mut().set_emotion("Rușine");
        session.form_mut().set_thought("Toți m-au văzut.");
        session.submit().unwrap();

        assert!(session.clear().snapshot.is_empty());
        assert_eq!(session.stats().total, 0);
    }

    #[test]
    fn open_rejects_unusable_key() {
        let mut config = JournalConfig::default();
        config.storage.key = "../escape".to_owned();
        assert!(matches!(
            JournalSession::open(&config),
            Err(SessionError::Storage(StoreError::InvalidKey(_)))
        ));
    }
}
