//! Shared type definitions for the automatic-thoughts journal.
//!
//! This crate is the single source of truth for the journal's data model.
//! Types defined here flow downstream to `TypeScript` via `ts-rs` for the
//! presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for entry identifiers
//! - [`enums`] -- Closed option sets (emotions, thought types, distortions)
//! - [`structs`] -- The journal entry and its intensity value

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Distortion, Emotion, ThoughtType};
pub use ids::EntryId;
pub use structs::{EntryError, Intensity, JournalEntry, NewEntry};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the bindings for every #[ts(export)] type into
        // `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::EntryId::export_all();

        let _ = crate::enums::Emotion::export_all();
        let _ = crate::enums::ThoughtType::export_all();
        let _ = crate::enums::Distortion::export_all();

        let _ = crate::structs::Intensity::export_all();
        let _ = crate::structs::JournalEntry::export_all();
    }
}
