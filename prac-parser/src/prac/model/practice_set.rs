//! Named, optionally repeated blocks of work

use super::group::GroupLabel;
use super::set_item::SetItem;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeSet {
    pub name: String,
    pub repeat: u32,
    pub items: Vec<SetItem>,
    /// Not populated by the parser; renderers may attach one.
    pub note: Option<String>,
}

impl PracticeSet {
    pub fn new(name: impl Into<String>, repeat: u32) -> Self {
        Self {
            name: name.into(),
            repeat,
            items: Vec::new(),
            note: None,
        }
    }

    pub fn with_items(mut self, items: Vec<SetItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sum of item distances for `group`, times the set repeat. Saturates at
    /// `u64::MAX`.
    pub fn total_distance(&self, group: GroupLabel) -> u64 {
        let once = self
            .items
            .iter()
            .map(|item| item.total_distance(group))
            .fold(0, u64::saturating_add);
        once.saturating_mul(u64::from(self.repeat))
    }

    /// Sum of item times for `group`, times the set repeat.
    pub fn total_time(&self, group: GroupLabel) -> u64 {
        let once = self
            .items
            .iter()
            .map(|item| item.total_time(group))
            .fold(0, u64::saturating_add);
        once.saturating_mul(u64::from(self.repeat))
    }

    pub fn get_available_groups(&self) -> Vec<GroupLabel> {
        let mut groups = BTreeSet::from([GroupLabel::A]);
        for item in &self.items {
            groups.extend(item.variations().keys().copied());
        }
        groups.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prac::model::GroupVariation;

    fn item(reps: u32, distance: u32, interval: &str) -> SetItem {
        SetItem::new(GroupVariation::new(
            reps,
            distance,
            "swim",
            vec![interval.to_string()],
        ))
    }

    #[test]
    fn empty_set_has_no_distance() {
        let set = PracticeSet::new("Warmup", 1);
        assert_eq!(set.total_distance(GroupLabel::A), 0);
        assert_eq!(set.get_available_groups(), vec![GroupLabel::A]);
    }

    #[test]
    fn repeat_multiplies_totals() {
        let set = PracticeSet::new("Main Set", 2)
            .with_items(vec![item(1, 200, "3:00"), item(3, 50, "1:00")]);
        assert_eq!(set.total_distance(GroupLabel::A), 700);
        assert_eq!(set.total_time(GroupLabel::A), 2 * (180 + 180));
    }

    #[test]
    fn groups_are_collected_across_items() {
        let c = GroupLabel::new('C').unwrap();
        let b = GroupLabel::new('B').unwrap();
        let with_two = item(1, 100, "1:30")
            .with_variations([
                GroupVariation::new(1, 75, "swim", vec![]),
                GroupVariation::new(1, 50, "swim", vec![]),
            ])
            .unwrap();
        let with_one = item(1, 100, "1:30")
            .with_variations([GroupVariation::new(1, 75, "swim", vec![])])
            .unwrap();
        let set = PracticeSet::new("Main", 1).with_items(vec![with_one, with_two]);
        assert_eq!(set.get_available_groups(), vec![GroupLabel::A, b, c]);
        assert_eq!(set.total_distance(c), 100 + 50);
    }

    #[test]
    fn huge_totals_saturate() {
        let max = item(u32::MAX, u32::MAX, "1:00");
        let set = PracticeSet::new("Main", 2).with_items(vec![max.clone(), max]);
        assert_eq!(set.total_distance(GroupLabel::A), u64::MAX);
        assert_eq!(set.total_time(GroupLabel::A), 2 * 2 * 60 * u64::from(u32::MAX));
    }
}
