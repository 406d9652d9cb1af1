//! Closed option sets for journal entries.
//!
//! Emotions and distortions serialize as their Romanian display labels, which
//! is also how the persisted document stores them. The order of `ALL` is the
//! order the form presents the options in; it carries no meaning for storage.
//!
//! The two "unclassified" values live on separate types:
//! [`ThoughtType::Unclassified`] says the thought was not rated on the
//! rational/irrational axis, [`Distortion::Unclassified`] says no distortion
//! was picked. They share a display label but never a value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Emotions
// ---------------------------------------------------------------------------

/// The main emotion felt in a situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Emotion {
    /// Joy.
    Bucurie,
    /// Calm.
    #[serde(rename = "Liniște")]
    Liniste,
    /// Sadness.
    #[serde(rename = "Tristețe")]
    Tristete,
    /// Anger.
    Furie,
    /// Fear.
    #[serde(rename = "Frică")]
    Frica,
    /// Shame.
    #[serde(rename = "Rușine")]
    Rusine,
    /// Guilt.
    #[serde(rename = "Vinovăție")]
    Vinovatie,
    /// Jealousy.
    Gelozie,
    /// Envy.
    Invidie,
    /// Pride.
    #[serde(rename = "Mândrie")]
    Mandrie,
    /// Disgust.
    Dezgust,
}

impl Emotion {
    /// Every emotion, in display order.
    pub const ALL: [Self; 11] = [
        Self::Bucurie,
        Self::Liniste,
        Self::Tristete,
        Self::Furie,
        Self::Frica,
        Self::Rusine,
        Self::Vinovatie,
        Self::Gelozie,
        Self::Invidie,
        Self::Mandrie,
        Self::Dezgust,
    ];

    /// The display label, identical to the persisted value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bucurie => "Bucurie",
            Self::Liniste => "Liniște",
            Self::Tristete => "Tristețe",
            Self::Furie => "Furie",
            Self::Frica => "Frică",
            Self::Rusine => "Rușine",
            Self::Vinovatie => "Vinovăție",
            Self::Gelozie => "Gelozie",
            Self::Invidie => "Invidie",
            Self::Mandrie => "Mândrie",
            Self::Dezgust => "Dezgust",
        }
    }

    /// Look up an emotion by its exact display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|emotion| emotion.label() == label)
    }
}

impl core::fmt::Display for Emotion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Thought classification
// ---------------------------------------------------------------------------

/// Where a thought sits on the rational/irrational axis.
///
/// Older documents stored the unrated case as `"necunoscut"`; it is accepted
/// on load and written back as `"unclassified"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ThoughtType {
    /// Flexible, realistic, tolerates the situation.
    Rational,
    /// Absolutist ("must", "can't stand it", "it's awful").
    Irrational,
    /// Not rated.
    #[default]
    #[serde(alias = "necunoscut")]
    Unclassified,
}

impl ThoughtType {
    /// The two ratings a user can actually pick, in display order.
    pub const CHOICES: [Self; 2] = [Self::Rational, Self::Irrational];

    /// The persisted value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rational => "rational",
            Self::Irrational => "irrational",
            Self::Unclassified => "unclassified",
        }
    }

    /// Whether the thought was rated at all.
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl core::fmt::Display for ThoughtType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Cognitive distortions
// ---------------------------------------------------------------------------

/// A named pattern of biased thinking attached to a thought.
///
/// Older documents stored the unpicked case as `"Neîncadrat"`; it is accepted
/// on load and written back as `"unclassified"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum Distortion {
    /// Catastrophizing.
    Catastrofare,
    /// All-or-nothing thinking.
    #[serde(rename = "Gândire alb-negru")]
    GandireAlbNegru,
    /// Mind reading.
    #[serde(rename = "Citirea gândurilor")]
    CitireaGandurilor,
    /// Fortune telling.
    #[serde(rename = "Prezicerea viitorului")]
    PrezicereaViitorului,
    /// Overgeneralization.
    #[serde(rename = "Generalizare excesivă")]
    GeneralizareExcesiva,
    /// Personalization.
    Personalizare,
    /// Global labelling.
    #[serde(rename = "Etichetare globală")]
    EtichetareGlobala,
    /// Rigid "musts".
    #[serde(rename = "„Trebuie” rigide")]
    TrebuieRigide,
    /// Any other distortion.
    #[serde(rename = "Alt tip de distorsiune")]
    AltTip,
    /// No distortion picked.
    #[default]
    #[serde(rename = "unclassified", alias = "Neîncadrat")]
    Unclassified,
}

impl Distortion {
    /// Every pickable distortion, in display order. Excludes the sentinel.
    pub const ALL: [Self; 9] = [
        Self::Catastrofare,
        Self::GandireAlbNegru,
        Self::CitireaGandurilor,
        Self::PrezicereaViitorului,
        Self::GeneralizareExcesiva,
        Self::Personalizare,
        Self::EtichetareGlobala,
        Self::TrebuieRigide,
        Self::AltTip,
    ];

    /// The display label. The sentinel reads as "Neîncadrat".
    pub const fn label(self) -> &'static str {
        match self {
            Self::Catastrofare => "Catastrofare",
            Self::GandireAlbNegru => "Gândire alb-negru",
            Self::CitireaGandurilor => "Citirea gândurilor",
            Self::PrezicereaViitorului => "Prezicerea viitorului",
            Self::GeneralizareExcesiva => "Generalizare excesivă",
            Self::Personalizare => "Personalizare",
            Self::EtichetareGlobala => "Etichetare globală",
            Self::TrebuieRigide => "„Trebuie” rigide",
            Self::AltTip => "Alt tip de distorsiune",
            Self::Unclassified => "Neîncadrat",
        }
    }

    /// Look up a pickable distortion by its exact display label.
    ///
    /// The sentinel is never returned; an unpicked distortion is an empty
    /// form value, not a label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|distortion| distortion.label() == label)
    }

    /// Whether a distortion was picked.
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl core::fmt::Display for Distortion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_labels_round_trip_through_serde() {
        for emotion in Emotion::ALL {
            let json = serde_json::to_string(&emotion).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", emotion.label()));
            assert_eq!(Emotion::from_label(emotion.label()), Some(emotion));
        }
    }

    #[test]
    fn unknown_emotion_label_is_rejected() {
        assert_eq!(Emotion::from_label("furie"), None);
        assert_eq!(Emotion::from_label(""), None);
        let parsed: Result<Emotion, _> = serde_json::from_str("\"Plictiseală\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn thought_type_accepts_legacy_sentinel() {
        let legacy: Result<ThoughtType, _> = serde_json::from_str("\"necunoscut\"");
        assert_eq!(legacy.ok(), Some(ThoughtType::Unclassified));
        let json = serde_json::to_string(&ThoughtType::Unclassified).unwrap_or_default();
        assert_eq!(json, "\"unclassified\"");
        assert_eq!(ThoughtType::default(), ThoughtType::Unclassified);
    }

    #[test]
    fn distortion_accepts_legacy_sentinel() {
        let legacy: Result<Distortion, _> = serde_json::from_str("\"Neîncadrat\"");
        assert_eq!(legacy.ok(), Some(Distortion::Unclassified));
        let rigid: Result<Distortion, _> = serde_json::from_str("\"„Trebuie” rigide\"");
        assert_eq!(rigid.ok(), Some(Distortion::TrebuieRigide));
    }

    #[test]
    fn distortion_sentinel_is_not_a_pickable_label() {
        assert_eq!(Distortion::from_label("Neîncadrat"), None);
        assert!(!Distortion::ALL.contains(&Distortion::Unclassified));
        assert!(Distortion::ALL.iter().all(|d| d.is_classified()));
    }

    #[test]
    fn option_sets_keep_display_order() {
        assert_eq!(Emotion::ALL.first(), Some(&Emotion::Bucurie));
        assert_eq!(Emotion::ALL.last(), Some(&Emotion::Dezgust));
        assert_eq!(Distortion::ALL.first(), Some(&Distortion::Catastrofare));
        assert_eq!(Distortion::ALL.last(), Some(&Distortion::AltTip));
    }
}
