//! Encoding and decoding of the persisted journal document.
//!
//! The document is a JSON array of entry records, newest first. Every
//! mutation rewrites the whole array.
//!
//! Decoding is lenient per record: a document that is not an array at all
//! fails as a whole, but a single record that cannot become a
//! [`JournalEntry`] is skipped and the rest survive. Records that repeat an
//! identifier already seen earlier in the document get a replacement derived
//! from that identifier and their position, so the decoded list always has
//! pairwise-unique IDs and reloading the same document yields the same ones.

use std::collections::BTreeSet;

use jurnal_types::{EntryId, JournalEntry};
use serde_json::Value;

use crate::error::StoreError;

/// The result of decoding a persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Entries in document order.
    pub entries: Vec<JournalEntry>,
    /// Records that could not be turned into entries.
    pub skipped: usize,
    /// Entries whose duplicate identifier was replaced.
    pub reassigned: usize,
}

/// Serialize `entries` into a document.
pub fn encode(entries: &[JournalEntry]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(entries)?)
}

/// Parse a document into entries.
///
/// # Errors
///
/// Returns [`StoreError::Serialization`] if `document` is not a JSON array.
pub fn decode(document: &str) -> Result<Decoded, StoreError> {
    let records: Vec<Value> = serde_json::from_str(document)?;
    let mut decoded = Decoded {
        entries: Vec::with_capacity(records.len()),
        ..Decoded::default()
    };
    let mut seen = BTreeSet::new();

    for (index, record) in records.into_iter().enumerate() {
        let mut entry = match serde_json::from_value::<JournalEntry>(record) {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(index, %error, "Skipping malformed journal record");
                decoded.skipped = decoded.skipped.saturating_add(1);
                continue;
            }
        };

        if seen.contains(&entry.id()) {
            let duplicate = entry.id();
            let mut salt = u64::try_from(index).unwrap_or(u64::MAX);
            while seen.contains(&entry.id()) {
                entry = entry.with_id(EntryId::derived(duplicate, salt));
                salt = salt.wrapping_add(1);
            }
            tracing::warn!(
                index,
                %duplicate,
                replacement = %entry.id(),
                "Reassigned duplicate entry id"
            );
            decoded.reassigned = decoded.reassigned.saturating_add(1);
        }

        seen.insert(entry.id());
        decoded.entries.push(entry);
    }

    Ok(decoded)
}
