//! Type-safe identifier for journal entries.
//!
//! Entry IDs are UUID v7 (time-ordered). `Uuid::now_v7` draws from a
//! process-wide context with a monotonic counter, so two entries created in
//! the same millisecond still get distinct, correctly ordered identifiers.
//!
//! Documents written by the first version of the journal used the creation
//! time in epoch milliseconds as a numeric `id`. Those are still accepted on
//! load and mapped deterministically into the UUID v7 space, so the same
//! legacy number always yields the same [`EntryId`]. Any other string or
//! number found in the `id` field is mapped onto a name-based UUID v5.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::{Builder, Uuid};

/// Namespace for IDs mapped from foreign string or number identifiers.
const EXTERNAL_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6a75_726e_616c_4000_8000_6964_6578_7431);

/// Namespace for replacement IDs derived from a repeated one.
const DERIVED_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6a75_726e_616c_4000_8000_6475_706c_6963);

/// Unique identifier for a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Map a legacy epoch-millisecond identifier into the UUID v7 space.
    ///
    /// The random section is zeroed, so the mapping is stable across loads.
    pub fn from_legacy_millis(millis: u64) -> Self {
        Self(Builder::from_unix_timestamp_millis(millis, &[0; 10]).into_uuid())
    }

    /// Map a foreign identifier (any string, or a number that is not a
    /// legacy timestamp) onto a stable UUID v5.
    pub fn from_external(name: &str) -> Self {
        Self(Uuid::new_v5(&EXTERNAL_ID_NAMESPACE, name.as_bytes()))
    }

    /// A stable identifier derived from `base` and `salt`.
    ///
    /// Used to give repeated IDs in a loaded document the same replacement
    /// on every load.
    pub fn derived(base: Self, salt: u64) -> Self {
        let mut name = base.0.as_bytes().to_vec();
        name.extend_from_slice(&salt.to_be_bytes());
        Self(Uuid::new_v5(&DERIVED_ID_NAMESPACE, &name))
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<EntryId> for Uuid {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

/// Wire forms an entry ID may take in a persisted document.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntryId {
    Uuid(Uuid),
    LegacyMillis(u64),
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match StoredEntryId::deserialize(deserializer)? {
            StoredEntryId::Uuid(id) => Self(id),
            StoredEntryId::LegacyMillis(millis) => Self::from_legacy_millis(millis),
            StoredEntryId::Text(text) => Self::from_external(&text),
            StoredEntryId::Number(number) => Self::from_external(&number.to_string()),
        })
    }
}
