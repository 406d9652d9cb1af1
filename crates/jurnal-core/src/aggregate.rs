//! Aggregates derived from the entry list.
//!
//! Every function here is pure and total: it reads a slice of entries,
//! allocates its result, and never fails. Callers recompute after each
//! store mutation instead of caching. A journal holds at most a few
//! thousand entries, so a linear pass is always cheap and can never go
//! stale.

use jurnal_types::{Distortion, Emotion, JournalEntry, ThoughtType};
use serde::Serialize;
use ts_rs::TS;

/// How often one emotion occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmotionCount {
    /// The emotion.
    pub emotion: Emotion,
    /// Number of entries recording it.
    pub count: usize,
}

/// How often one distortion occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DistortionCount {
    /// The distortion.
    pub distortion: Distortion,
    /// Number of entries tagged with it.
    pub count: usize,
}

/// Rational and irrational thought tallies.
///
/// Unclassified thoughts count toward neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ThoughtTypeCounts {
    /// Entries rated rational.
    #[serde(rename = "rationalCount")]
    pub rational: usize,
    /// Entries rated irrational.
    #[serde(rename = "irrationalCount")]
    pub irrational: usize,
}

impl ThoughtTypeCounts {
    /// Entries rated either way.
    pub const fn classified(self) -> usize {
        self.rational.saturating_add(self.irrational)
    }
}

/// Count entries per emotion.
///
/// Buckets appear in the order their emotion is first met while scanning
/// `entries` front to back, which for a store snapshot means newest first.
pub fn emotion_histogram(entries: &[JournalEntry]) -> Vec<EmotionCount> {
    let mut counts: Vec<EmotionCount> = Vec::new();
    for entry in entries {
        let emotion = entry.emotion();
        match counts.iter_mut().find(|bucket| bucket.emotion == emotion) {
            Some(bucket) => bucket.count = bucket.count.saturating_add(1),
            None => counts.push(EmotionCount { emotion, count: 1 }),
        }
    }
    counts
}

/// Count entries per picked distortion, in first-seen order.
///
/// Entries without a distortion are left out.
pub fn distortion_histogram(entries: &[JournalEntry]) -> Vec<DistortionCount> {
    let mut counts: Vec<DistortionCount> = Vec::new();
    for distortion in entries
        .iter()
        .map(JournalEntry::distortion)
        .filter(|d| d.is_classified())
    {
        match counts.iter_mut().find(|bucket| bucket.distortion == distortion) {
            Some(bucket) => bucket.count = bucket.count.saturating_add(1),
            None => counts.push(DistortionCount {
                distortion,
                count: 1,
            }),
        }
    }
    counts
}

/// Tally rational and irrational thoughts.
pub fn thought_type_counts(entries: &[JournalEntry]) -> ThoughtTypeCounts {
    entries
        .iter()
        .fold(ThoughtTypeCounts::default(), |mut counts, entry| {
            match entry.thought_type() {
                ThoughtType::Rational => counts.rational = counts.rational.saturating_add(1),
                ThoughtType::Irrational => {
                    counts.irrational = counts.irrational.saturating_add(1);
                }
                ThoughtType::Unclassified => {}
            }
            counts
        })
}
