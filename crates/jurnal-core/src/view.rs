//! Render-ready view models for the presentation layer.
//!
//! Nothing here draws anything. Each type is a plain projection of store
//! data (or static content) that a UI can show as-is, and each is exported
//! to TypeScript so a web front end reads the same shapes.

use chrono::{DateTime, Utc};
use jurnal_types::{EntryId, JournalEntry, ThoughtType};
use serde::Serialize;
use ts_rs::TS;

use crate::aggregate::{self, DistortionCount, EmotionCount, ThoughtTypeCounts};

/// Question shown before the whole journal is cleared.
pub const CLEAR_CONFIRMATION_PROMPT: &str =
    "Ești sigur că vrei să ștergi toate înregistrările din jurnal?";

/// Pie slice name for rational thoughts.
pub const RATIONAL_SERIES: &str = "Gânduri raționale";

/// Pie slice name for irrational thoughts.
pub const IRRATIONAL_SERIES: &str = "Gânduri iraționale";

// ---------------------------------------------------------------------------
// Statistics panel
// ---------------------------------------------------------------------------

/// One named slice of the thought-type pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PieSlice {
    /// Legend label.
    pub name: String,
    /// Slice size.
    pub value: usize,
}

/// Everything the statistics panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct StatsPanel {
    /// Number of entries in the journal.
    pub total: usize,
    /// Emotion frequency bars, first-seen order.
    pub emotion_bars: Vec<EmotionCount>,
    /// Rational versus irrational tallies.
    pub thought_types: ThoughtTypeCounts,
    /// The tallies as labelled pie slices, rational first.
    pub thought_type_pie: Vec<PieSlice>,
    /// Distortion frequency, first-seen order.
    pub distortions: Vec<DistortionCount>,
    /// Whether there is anything to plot in the emotion chart.
    pub has_emotion_data: bool,
    /// Whether the pie chart should be drawn.
    pub has_thought_type_data: bool,
}

impl StatsPanel {
    /// Compute the panel from a snapshot, newest entry first.
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let emotion_bars = aggregate::emotion_histogram(entries);
        let thought_types = aggregate::thought_type_counts(entries);
        let total = entries.len();

        Self {
            total,
            has_emotion_data: !emotion_bars.is_empty(),
            has_thought_type_data: total > 0,
            thought_type_pie: vec![
                PieSlice {
                    name: RATIONAL_SERIES.to_owned(),
                    value: thought_types.rational,
                },
                PieSlice {
                    name: IRRATIONAL_SERIES.to_owned(),
                    value: thought_types.irrational,
                },
            ],
            emotion_bars,
            thought_types,
            distortions: aggregate::distortion_histogram(entries),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry cards
// ---------------------------------------------------------------------------

/// One entry as shown in the journal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EntryCard {
    /// Stable key for list rendering.
    pub id: EntryId,
    /// `"{emotion} ({intensity}%)"`.
    pub headline: String,
    /// Creation time; the UI formats it for the local zone.
    pub date: DateTime<Utc>,
    /// The situation, omitted when it was left blank.
    pub situation: Option<String>,
    /// The automatic thought.
    pub thought: String,
    /// Human-readable thought rating.
    pub thought_type_label: String,
    /// Human-readable distortion.
    pub distortion_label: String,
}

impl EntryCard {
    /// Project an entry into its card.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        let situation = entry.situation();
        Self {
            id: entry.id(),
            headline: format!("{} ({}%)", entry.emotion(), entry.intensity()),
            date: entry.created_at(),
            situation: (!situation.is_empty()).then(|| situation.to_owned()),
            thought: entry.thought().to_owned(),
            thought_type_label: thought_type_label(entry.thought_type()).to_owned(),
            distortion_label: entry.distortion().label().to_owned(),
        }
    }
}

/// Cards for a whole snapshot, in list order.
pub fn entry_cards(entries: &[JournalEntry]) -> Vec<EntryCard> {
    entries.iter().map(EntryCard::from_entry).collect()
}

/// The card text for a thought rating.
pub const fn thought_type_label(thought_type: ThoughtType) -> &'static str {
    match thought_type {
        ThoughtType::Irrational => "Gând irațional (poate genera emoții nesănătoase)",
        ThoughtType::Rational => "Gând rațional (sprijină emoții sănătoase)",
        ThoughtType::Unclassified => "Neîncadrat",
    }
}

// ---------------------------------------------------------------------------
// Psycho-education
// ---------------------------------------------------------------------------

/// A distortion explained with a sample thought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DistortionExplainer {
    /// The distortion's name.
    pub name: String,
    /// What the pattern does.
    pub explanation: String,
    /// A thought showing it.
    pub example: String,
}

/// The static help section on automatic thoughts and distortions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PsychoEducation {
    /// Section heading.
    pub title: String,
    /// Introductory paragraphs.
    pub paragraphs: Vec<String>,
    /// Heading over the rational examples.
    pub rational_heading: String,
    /// Sample rational thoughts.
    pub rational_examples: Vec<String>,
    /// Heading over the irrational examples.
    pub irrational_heading: String,
    /// Sample irrational thoughts.
    pub irrational_examples: Vec<String>,
    /// Heading over the distortion list.
    pub distortions_heading: String,
    /// Explained distortions.
    pub distortions: Vec<DistortionExplainer>,
    /// Closing paragraph.
    pub closing: String,
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|&line| line.to_owned()).collect()
}

/// The help content shown next to the journal.
pub fn psycho_education() -> PsychoEducation {
    let explain = |name: &str, explanation: &str, example: &str| DistortionExplainer {
        name: name.to_owned(),
        explanation: explanation.to_owned(),
        example: example.to_owned(),
    };

    PsychoEducation {
        title: "Ce este un gând automat? Ce sunt distorsiunile cognitive?".to_owned(),
        paragraphs: owned(&[
            "Gândurile automate sunt propoziții scurte, rapide, care apar aproape instant în \
             minte atunci când trăim o situație. De multe ori nici nu ne dăm seama că „am gândit \
             ceva”, simțim direct emoția (furie, frică, tristețe). În CBT și REBT învățăm să \
             încetinim acest proces și să surprindem gândul care a declanșat emoția.",
            "Unele gânduri sunt raționale – realiste, flexibile – și duc la emoții sănătoase, \
             adaptative (frustrare, regret, îngrijorare moderată). Alte gânduri sunt iraționale \
             – rigide, de tip „trebuie”, „nu suport”, „este groaznic” – și duc la emoții \
             nesănătoase, dezadaptative (furie extremă, disperare, panică).",
        ]),
        rational_heading: "Exemple de gânduri raționale (emoții sănătoase)".to_owned(),
        rational_examples: owned(&[
            "„Nu îmi place ce s-a întâmplat, dar pot suporta.”",
            "„Ar fi fost mai bine să iasă altfel, dar pot învăța din asta.”",
            "„Mi-e teamă să nu greșesc, dar este normal să mai și greșesc.”",
            "„Aș prefera să fiu apreciat, dar nu toată lumea mă va plăcea.”",
        ]),
        irrational_heading: "Exemple de gânduri iraționale (emoții nesănătoase)".to_owned(),
        irrational_examples: owned(&[
            "„Este groaznic, nu ar trebui să fie așa niciodată!”",
            "„Nu suport să greșesc, ar însemna că sunt un ratat.”",
            "„Dacă mă critică, înseamnă că nu valorez nimic.”",
            "„Dacă mă părăsește, viața mea nu mai are sens.”",
        ]),
        distortions_heading: "Distorsiuni cognitive – câteva exemple".to_owned(),
        distortions: vec![
            explain(
                "Catastrofare",
                "exagerezi gravitatea",
                "„Este un dezastru total dacă nu reușesc.”",
            ),
            explain(
                "Gândire alb-negru",
                "vezi lucrurile doar în extreme",
                "„Ori sunt perfect, ori sunt un eșec.”",
            ),
            explain(
                "Citirea gândurilor",
                "ești sigur că știi ce gândesc ceilalți",
                "„Sigur crede că sunt prost.”",
            ),
            explain(
                "„Trebuie” rigide",
                "reguli dure pentru tine sau pentru alții",
                "„Oamenii nu ar trebui să facă niciodată greșeli.”",
            ),
        ],
        closing: "Jurnalul pe care îl folosești acum te ajută să observi treptat ce tipuri de \
                  distorsiuni apar cel mai des la tine. Pasul următor în terapie este să \
                  exersezi gânduri alternative, mai echilibrate."
            .to_owned(),
    }
}
