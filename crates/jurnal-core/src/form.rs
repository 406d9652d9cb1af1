//! The entry form: draft state, validation and submission.
//!
//! The form holds raw user input in a [`Draft`]. Emotion and distortion are
//! kept as the option labels the presentation layer hands over, with an
//! empty string meaning "nothing picked". [`FormController::submit`] turns a
//! valid draft into a [`JournalEntry`], appends it to the store and resets
//! the draft. An invalid draft is refused and left as it was.

use jurnal_store::{Commit, DuplicateId, EntryStore, Storage};
use jurnal_types::{Distortion, Emotion, EntryError, Intensity, JournalEntry, NewEntry, ThoughtType};
use tracing::{debug, warn};

/// Why a draft was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// No emotion was picked.
    #[error("an emotion is required")]
    MissingEmotion,

    /// The automatic thought is empty after trimming.
    #[error("the automatic thought is required")]
    MissingThought,

    /// The emotion label is not one of the offered options.
    #[error("unknown emotion {0:?}")]
    UnknownEmotion(String),

    /// The distortion label is not one of the offered options.
    #[error("unknown distortion {0:?}")]
    UnknownDistortion(String),
}

impl From<EntryError> for ValidationFailure {
    fn from(error: EntryError) -> Self {
        match error {
            EntryError::EmptyThought => Self::MissingThought,
        }
    }
}

/// Raw form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Free-text description of what happened.
    pub situation: String,
    /// Emotion label, empty when none is picked.
    pub emotion: String,
    /// Slider value. Clamped to 0..=100 on submit.
    pub intensity: i64,
    /// The automatic thought.
    pub thought: String,
    /// Rational/irrational rating, if any.
    pub thought_type: Option<ThoughtType>,
    /// Distortion label, empty when none is picked.
    pub distortion: String,
}

impl Draft {
    /// An empty draft with the slider at `intensity`.
    pub const fn new(intensity: i64) -> Self {
        Self {
            situation: String::new(),
            emotion: String::new(),
            intensity,
            thought: String::new(),
            thought_type: None,
            distortion: String::new(),
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new(i64::from(Intensity::DEFAULT.value()))
    }
}

/// A successful submission.
#[derive(Debug)]
pub struct Submitted {
    /// The entry as stored.
    pub entry: JournalEntry,
    /// The store mutation, including whether it was persisted.
    pub commit: Commit,
}

/// Owns the draft and turns it into journal entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    draft: Draft,
    default_intensity: i64,
}

impl FormController {
    /// A form whose slider starts at the standard default.
    pub fn new() -> Self {
        Self::with_default_intensity(i64::from(Intensity::DEFAULT.value()))
    }

    /// A form whose slider starts, and resets, at `intensity`, clamped to
    /// 0..=100.
    pub fn with_default_intensity(intensity: i64) -> Self {
        let intensity = i64::from(Intensity::clamped(intensity).value());
        Self {
            draft: Draft::new(intensity),
            default_intensity: intensity,
        }
    }

    /// The current draft.
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Set the situation text.
    pub fn set_situation(&mut self, situation: impl Into<String>) {
        self.draft.situation = situation.into();
    }

    /// Set the emotion label.
    pub fn set_emotion(&mut self, emotion: impl Into<String>) {
        self.draft.emotion = emotion.into();
    }

    /// Set the slider value.
    pub const fn set_intensity(&mut self, intensity: i64) {
        self.draft.intensity = intensity;
    }

    /// Set the automatic thought.
    pub fn set_thought(&mut self, thought: impl Into<String>) {
        self.draft.thought = thought.into();
    }

    /// Set or unset the rational/irrational rating.
    pub const fn set_thought_type(&mut self, thought_type: Option<ThoughtType>) {
        self.draft.thought_type = thought_type;
    }

    /// Set the distortion label.
    pub fn set_distortion(&mut self, distortion: impl Into<String>) {
        self.draft.distortion = distortion.into();
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.draft.emotion.trim().is_empty() && !self.draft.thought.trim().is_empty()
    }

    /// Check the draft and map it onto entry fields.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking required fields before
    /// option labels.
    pub fn validate(&self) -> Result<NewEntry, ValidationFailure> {
        let draft = &self.draft;
        let emotion_label = draft.emotion.trim();
        if emotion_label.is_empty() {
            return Err(ValidationFailure::MissingEmotion);
        }
        if draft.thought.trim().is_empty() {
            return Err(ValidationFailure::MissingThought);
        }

        let emotion = Emotion::from_label(emotion_label)
            .ok_or_else(|| ValidationFailure::UnknownEmotion(emotion_label.to_owned()))?;

        let distortion_label = draft.distortion.trim();
        let distortion = if distortion_label.is_empty() {
            Distortion::Unclassified
        } else {
            Distortion::from_label(distortion_label)
                .ok_or_else(|| ValidationFailure::UnknownDistortion(distortion_label.to_owned()))?
        };

        Ok(NewEntry {
            situation: draft.situation.clone(),
            emotion,
            intensity: Intensity::clamped(draft.intensity),
            thought: draft.thought.clone(),
            thought_type: draft.thought_type.unwrap_or_default(),
            distortion,
        })
    }

    /// Validate the draft, append the entry to `store` and reset the form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] when the draft is refused. The store
    /// and the draft are then left unchanged.
    pub fn submit<S: Storage>(
        &mut self,
        store: &mut EntryStore<S>,
    ) -> Result<Submitted, ValidationFailure> {
        let mut entry = JournalEntry::new(self.validate()?)?;

        let commit = loop {
            match store.append(entry.clone()) {
                Ok(commit) => break commit,
                Err(DuplicateId(id)) => {
                    warn!(%id, "Entry ID already taken; drawing a new one");
                    entry = entry.with_fresh_id();
                }
            }
        };

        debug!(
            id = %entry.id(),
            emotion = %entry.emotion(),
            persisted = commit.is_persisted(),
            "Submitted journal entry"
        );
        self.reset();
        Ok(Submitted { entry, commit })
    }

    /// Clear every field and put the slider back at its default.
    pub fn reset(&mut self) {
        self.draft = Draft::new(self.default_intensity);
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use jurnal_store::MemoryStorage;

    use super::*;

    fn store() -> EntryStore<MemoryStorage> {
        EntryStore::load(MemoryStorage::new(), "test-jurnal")
    }

    fn filled() -> FormController {
        let mut form = FormController::new();
        form.set_situation("  Ședință cu șeful  ");
        form.set_emotion("Frică");
        form.set_intensity(80);
        form.set_thought("  Sigur crede că sunt incompetent. ");
        form.set_thought_type(Some(ThoughtType::Irrational));
        form.set_distortion("Citirea gândurilor");
        form
    }

    #[test]
    fn new_form_is_empty_with_default_slider() {
        let form = FormController::new();
        assert_eq!(form.draft().intensity, 50);
        assert!(form.draft().emotion.is_empty());
        assert_eq!(form.draft().thought_type, None);
        assert!(!form.can_submit());
    }

    #[test]
    fn can_submit_needs_emotion_and_thought() {
        let mut form = FormController::new();
        form.set_emotion("Furie");
        assert!(!form.can_submit());
        form.set_thought("   ");
        assert!(!form.can_submit());
        form.set_thought("Nu e corect!");
        assert!(form.can_submit());
        form.set_emotion("");
        assert!(!form.can_submit());
    }

    #[test]
    fn submit_builds_trimmed_entry_and_resets() {
        let mut store = store();
        let mut form = filled();

        let submitted = form.submit(&mut store).unwrap();
        let entry = &submitted.entry;
        assert_eq!(entry.situation(), "Ședință cu șeful");
        assert_eq!(entry.thought(), "Sigur crede că sunt incompetent.");
        assert_eq!(entry.emotion(), Emotion::Frica);
        assert_eq!(entry.intensity().value(), 80);
        assert_eq!(entry.thought_type(), ThoughtType::Irrational);
        assert_eq!(entry.distortion(), Distortion::CitireaGandurilor);

        assert!(submitted.commit.is_persisted());
        assert_eq!(store.snapshot()[0], *entry);
        assert_eq!(*form.draft(), Draft::default());
    }

    #[test]
    fn missing_fields_leave_store_and_draft_untouched() {
        let mut store = store();
        let mut form = FormController::new();
        form.set_situation("ceva");
        form.set_thought("un gând");

        assert_eq!(form.submit(&mut store).err(), Some(ValidationFailure::MissingEmotion));
        assert!(store.is_empty());
        assert_eq!(form.draft().situation, "ceva");

        form.set_emotion("Tristețe");
        form.set_thought(" \t ");
        assert_eq!(form.submit(&mut store).err(), Some(ValidationFailure::MissingThought));
        assert!(store.is_empty());
        assert_eq!(form.draft().emotion, "Tristețe");
    }

    #[test]
    fn unknown_labels_are_refused() {
        let mut store = store();
        let mut form = filled();
        form.set_emotion("Plictiseală");
        assert_eq!(
            form.submit(&mut store).err(),
            Some(ValidationFailure::UnknownEmotion("Plictiseală".to_owned()))
        );

        let mut form = filled();
        form.set_distortion("Gândire magică");
        assert_eq!(
            form.submit(&mut store).err(),
            Some(ValidationFailure::UnknownDistortion("Gândire magică".to_owned()))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn optional_fields_default_to_unclassified() {
        let mut store = store();
        let mut form = FormController::new();
        form.set_emotion("Bucurie");
        form.set_thought("Am reușit.");

        let entry = form.submit(&mut store).unwrap().entry;
        assert_eq!(entry.thought_type(), ThoughtType::Unclassified);
        assert_eq!(entry.distortion(), Distortion::Unclassified);
        assert_eq!(entry.situation(), "");
        assert_eq!(entry.intensity(), Intensity::DEFAULT);
    }

    #[test]
    fn intensity_is_clamped_at_the_boundaries() {
        let mut store = store();
        for (raw, expected) in [(-5, 0), (0, 0), (100, 100), (150, 100)] {
            let mut form = filled();
            form.set_intensity(raw);
            let entry = form.submit(&mut store).unwrap().entry;
            assert_eq!(entry.intensity().value(), expected, "slider at {raw}");
        }
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn reset_uses_configured_default() {
        let mut store = store();
        let mut form = FormController::with_default_intensity(30);
        form.set_emotion("Furie");
        form.set_thought("Nu suport asta!");
        form.set_intensity(90);

        form.submit(&mut store).unwrap();
        assert_eq!(form.draft().intensity, 30);
    }

    #[test]
    fn default_intensity_is_clamped() {
        let mut store = store();
        let mut form = FormController::with_default_intensity(150);
        assert_eq!(form.draft().intensity, 100);

        form.set_emotion("Furie");
        form.set_thought("Nu suport asta!");
        form.submit(&mut store).unwrap();
        assert_eq!(form.draft().intensity, 100);

        assert_eq!(FormController::with_default_intensity(-20).draft().intensity, 0);
    }
}
