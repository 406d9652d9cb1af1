//! Journal logic for recording automatic thoughts.
//!
//! Sits on top of `jurnal-store` and turns form input into entries, entries
//! into statistics, and both into view models a presentation layer can
//! render directly.
//!
//! # Architecture
//!
//! ```text
//!   presentation layer (external)
//!        |  draft edits            ^  StatsPanel / EntryCard
//!        v                         |
//!   +----------------+      +-------------+
//!   | FormController |      |  aggregate  |
//!   +----------------+      +-------------+
//!        | append                  ^ snapshot
//!        v                         |
//!   +-------------------------------------+
//!   |     EntryStore  (jurnal-store)      |
//!   +-------------------------------------+
//!        |  whole-document rewrite
//!        v
//!     Storage (file / memory)
//! ```
//!
//! # Modules
//!
//! - [`aggregate`] -- Emotion, distortion and thought-type tallies
//! - [`config`] -- YAML configuration with environment overrides
//! - [`form`] -- Draft state, validation and submission
//! - [`session`] -- A store and a form wired from configuration
//! - [`telemetry`] -- `tracing` subscriber setup
//! - [`view`] -- Render-ready view models and help content

pub mod aggregate;
pub mod config;
pub mod form;
pub mod session;
pub mod telemetry;
pub mod view;

pub use config::JournalConfig;
pub use form::{Draft, FormController, Submitted, ValidationFailure};
pub use session::{JournalSession, SessionError};
pub use view::{CLEAR_CONFIRMATION_PROMPT, EntryCard, StatsPanel};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::aggregate::EmotionCount::export_all();
        let _ = crate::aggregate::DistortionCount::export_all();
        let _ = crate::aggregate::ThoughtTypeCounts::export_all();

        let _ = crate::view::PieSlice::export_all();
        let _ = crate::view::StatsPanel::export_all();
        let _ = crate::view::EntryCard::export_all();
        let _ = crate::view::DistortionExplainer::export_all();
        let _ = crate::view::PsychoEducation::export_all();
    }
}
