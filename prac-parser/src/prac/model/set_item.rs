//! One workout line inside a set

use super::group::{GroupLabel, GroupLabelOverflow, GroupVariation};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single item: the primary (group `A`) workout, an optional trailing note,
/// and the bracketed variations for groups `B`, `C`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetItem {
    #[serde(flatten)]
    pub primary: GroupVariation,
    pub note: Option<String>,
    variations: BTreeMap<GroupLabel, GroupVariation>,
}

impl SetItem {
    pub fn new(primary: GroupVariation) -> Self {
        Self {
            primary,
            note: None,
            variations: BTreeMap::new(),
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Attaches variations in order, labelling them `B`, `C`, ...
    pub fn with_variations<I>(mut self, variations: I) -> Result<Self, GroupLabelOverflow>
    where
        I: IntoIterator<Item = GroupVariation>,
    {
        self.variations.clear();
        for (ordinal, variation) in variations.into_iter().enumerate() {
            let label = GroupLabel::from_ordinal(ordinal).ok_or(GroupLabelOverflow)?;
            self.variations.insert(label, variation);
        }
        Ok(self)
    }

    pub fn reps(&self) -> u32 {
        self.primary.reps
    }

    pub fn distance(&self) -> u32 {
        self.primary.distance
    }

    pub fn desc(&self) -> &str {
        &self.primary.desc
    }

    pub fn intervals(&self) -> &[String] {
        &self.primary.intervals
    }

    pub fn variations(&self) -> &BTreeMap<GroupLabel, GroupVariation> {
        &self.variations
    }

    /// The workout for `group`. Groups without their own variation, and
    /// group `A` itself, get the primary definition.
    pub fn get_variation_for_group(&self, group: GroupLabel) -> &GroupVariation {
        if group.is_primary() {
            return &self.primary;
        }
        self.variations.get(&group).unwrap_or(&self.primary)
    }

    pub fn total_distance(&self, group: GroupLabel) -> u64 {
        self.get_variation_for_group(group).total_distance()
    }

    pub fn total_time(&self, group: GroupLabel) -> u64 {
        self.get_variation_for_group(group).total_time()
    }

    /// `A` plus every stored variation label, ascending.
    pub fn get_available_groups(&self) -> Vec<GroupLabel> {
        std::iter::once(GroupLabel::A)
            .chain(self.variations.keys().copied())
            .collect()
    }

    /// The primary workout followed by each variation in brackets, without
    /// indentation or note.
    pub fn workout_text(&self) -> String {
        let mut text = self.primary.to_string();
        for variation in self.variations.values() {
            text.push_str(&format!(" [{}]", variation));
        }
        text
    }
}

impl fmt::Display for SetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}", self.workout_text())?;
        if let Some(note) = &self.note {
            write!(f, " # {}", note)?;
        }
        Ok(())
    }
}
