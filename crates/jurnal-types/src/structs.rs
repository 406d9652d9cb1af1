//! Journal entry and its value types.
//!
//! A [`JournalEntry`] is immutable once built: its fields are private and
//! only readable through accessors. Every way of obtaining one, whether
//! [`JournalEntry::new`] for a fresh submission or deserialization from a
//! persisted document, goes through the same checks, so a stored entry
//! always has a non-empty thought and an intensity within bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Distortion, Emotion, ThoughtType};
use crate::ids::EntryId;

// ---------------------------------------------------------------------------
// Intensity
// ---------------------------------------------------------------------------

/// Emotion intensity on a 0-100 scale.
///
/// Construction clamps, so an out-of-range value can never be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(from = "i64")]
#[ts(export, export_to = "bindings/")]
pub struct Intensity(u8);

impl Intensity {
    /// Lowest intensity.
    pub const MIN: Self = Self(0);
    /// Highest intensity.
    pub const MAX: Self = Self(100);
    /// Starting position of the intensity slider.
    pub const DEFAULT: Self = Self(50);

    /// Build an intensity, clamping `value` into `[0, 100]`.
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        u8::try_from(bounded).map_or(Self::MAX, Self)
    }

    /// The intensity as a percentage.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Intensity {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl core::fmt::Display for Intensity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Journal entry
// ---------------------------------------------------------------------------

/// Reasons an entry cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// The automatic thought is empty after trimming.
    #[error("the automatic thought is empty")]
    EmptyThought,
}

/// The user-supplied content of a new entry.
///
/// Packs the entry fields into one struct so call sites name every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Free-text context; may be empty.
    pub situation: String,
    /// The main emotion.
    pub emotion: Emotion,
    /// How strong the emotion was.
    pub intensity: Intensity,
    /// The automatic thought; must be non-empty after trimming.
    pub thought: String,
    /// Rational/irrational rating.
    pub thought_type: ThoughtType,
    /// Attached cognitive distortion.
    pub distortion: Distortion,
}

/// One record in the automatic-thoughts journal.
///
/// Serializes to the persisted document layout: `id`, `date`, `situation`,
/// `emotion`, `intensity`, `thought`, `thoughtType`, `distortion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "StoredEntry")]
#[ts(export, export_to = "bindings/")]
pub struct JournalEntry {
    id: EntryId,
    #[serde(rename = "date")]
    created_at: DateTime<Utc>,
    situation: String,
    emotion: Emotion,
    intensity: Intensity,
    thought: String,
    thought_type: ThoughtType,
    distortion: Distortion,
}

impl JournalEntry {
    /// Build a new entry with a fresh [`EntryId`] stamped with the current time.
    ///
    /// `situation` and `thought` are trimmed.
    pub fn new(fields: NewEntry) -> Result<Self, EntryError> {
        Self::restore(EntryId::new(), Utc::now(), fields)
    }

    /// Rebuild an entry whose identity and creation time are already known.
    ///
    /// Applies the same checks and trimming as [`JournalEntry::new`].
    pub fn restore(
        id: EntryId,
        created_at: DateTime<Utc>,
        fields: NewEntry,
    ) -> Result<Self, EntryError> {
        let thought = fields.thought.trim();
        if thought.is_empty() {
            return Err(EntryError::EmptyThought);
        }

        Ok(Self {
            id,
            created_at,
            situation: fields.situation.trim().to_owned(),
            emotion: fields.emotion,
            intensity: fields.intensity,
            thought: thought.to_owned(),
            thought_type: fields.thought_type,
            distortion: fields.distortion,
        })
    }

    /// The same entry under a newly generated identifier.
    #[must_use]
    pub fn with_fresh_id(self) -> Self {
        Self {
            id: EntryId::new(),
            ..self
        }
    }

    /// The same entry under `id`.
    #[must_use]
    pub fn with_id(self, id: EntryId) -> Self {
        Self { id, ..self }
    }

    /// Unique identifier.
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// When the entry was created.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Free-text context; empty when none was given.
    pub fn situation(&self) -> &str {
        &self.situation
    }

    /// The main emotion.
    pub const fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// How strong the emotion was.
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// The automatic thought.
    pub fn thought(&self) -> &str {
        &self.thought
    }

    /// Rational/irrational rating.
    pub const fn thought_type(&self) -> ThoughtType {
        self.thought_type
    }

    /// Attached cognitive distortion.
    pub const fn distortion(&self) -> Distortion {
        self.distortion
    }
}

/// Persisted shape of an entry, validated into a [`JournalEntry`].
///
/// Only `id`, `date`, `emotion` and `thought` are mandatory; documents from
/// older versions may omit the rest.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: EntryId,
    date: DateTime<Utc>,
    #[serde(default)]
    situation: String,
    emotion: Emotion,
    #[serde(default)]
    intensity: Intensity,
    thought: String,
    #[serde(default)]
    thought_type: ThoughtType,
    #[serde(default)]
    distortion: Distortion,
}

impl TryFrom<StoredEntry> for JournalEntry {
    type Error = EntryError;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        Self::restore(
            stored.id,
            stored.date,
            NewEntry {
                situation: stored.situation,
                emotion: stored.emotion,
                intensity: stored.intensity,
                thought: stored.thought,
                thought_type: stored.thought_type,
                distortion: stored.distortion,
            },
        )
    }
}
