//! Fluent assertions over a parsed workout
//!
//! Each assertion carries a context path (`workout:sets[1]:items[0]`) so a
//! failure says exactly where in the tree it happened.

use crate::prac::model::{GroupLabel, GroupVariation, PracticeSet, SetItem, Units};
use crate::prac::parsing::ParsedPractice;

pub fn assert_workout(parsed: &ParsedPractice) -> WorkoutAssertion<'_> {
    WorkoutAssertion {
        parsed,
        context: "workout".to_string(),
    }
}

fn group(letter: char) -> GroupLabel {
    GroupLabel::new(letter).unwrap_or_else(|| panic!("'{}' is not a group label", letter))
}

fn groups(letters: &[char]) -> Vec<GroupLabel> {
    letters.iter().copied().map(group).collect()
}

pub struct WorkoutAssertion<'a> {
    parsed: &'a ParsedPractice,
    context: String,
}

impl<'a> WorkoutAssertion<'a> {
    pub fn units(self, expected: Units) -> Self {
        assert_eq!(
            self.parsed.config.units, expected,
            "{}: Expected units {:?}",
            self.context, expected
        );
        self
    }
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.parsed.config.title.as_deref(),
            Some(expected),
            "{}: Expected title '{}'",
            self.context,
            expected
        );
        self
    }
    pub fn author(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.parsed.config.author.as_deref(),
            expected,
            "{}: Unexpected author",
            self.context
        );
        self
    }
    pub fn warning_lines(self, expected: &[usize]) -> Self {
        let actual: Vec<usize> = self.parsed.warnings.iter().map(|w| w.line).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected warnings on lines {:?}, got {:?}",
            self.context, expected, self.parsed.warnings
        );
        self
    }
    pub fn set_count(self, expected: usize) -> Self {
        let names: Vec<&str> = self.parsed.sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            self.parsed.sets.len(),
            expected,
            "{}: Expected {} sets, found [{}]",
            self.context,
            expected,
            names.join(", ")
        );
        self
    }
    pub fn groups(self, expected: &[char]) -> Self {
        assert_eq!(
            self.parsed.summary().get_all_groups(),
            groups(expected),
            "{}: Unexpected workout groups",
            self.context
        );
        self
    }
    pub fn total_distance(self, letter: char, expected: u64) -> Self {
        let actual = self.parsed.summary().total_distance(group(letter));
        assert_eq!(
            actual, expected,
            "{}: Expected group {} total distance {}, got {}",
            self.context, letter, expected, actual
        );
        self
    }
    pub fn total_time(self, letter: char, expected: u64) -> Self {
        let actual = self.parsed.summary().total_time(group(letter));
        assert_eq!(
            actual, expected,
            "{}: Expected group {} total time {}s, got {}s",
            self.context, letter, expected, actual
        );
        self
    }
    pub fn set<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SetAssertion<'a>),
    {
        let sets = &self.parsed.sets;
        assert!(
            index < sets.len(),
            "{}: Set index {} out of bounds (workout has {} sets)",
            self.context,
            index,
            sets.len()
        );
        assertion(SetAssertion {
            set: &sets[index],
            context: format!("{}:sets[{}]", self.context, index),
        });
        self
    }
}

pub struct SetAssertion<'a> {
    set: &'a PracticeSet,
    context: String,
}

impl<'a> SetAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.set.name, expected,
            "{}: Expected set name to be '{}', but got '{}'",
            self.context, expected, self.set.name
        );
        self
    }
    pub fn repeat(self, expected: u32) -> Self {
        assert_eq!(
            self.set.repeat, expected,
            "{}: Expected repeat x{}",
            self.context, expected
        );
        self
    }
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.set.items.len(),
            expected,
            "{}: Expected {} items, found {}",
            self.context,
            expected,
            self.set.items.len()
        );
        self
    }
    pub fn total_distance(self, letter: char, expected: u64) -> Self {
        let actual = self.set.total_distance(group(letter));
        assert_eq!(
            actual, expected,
            "{}: Expected group {} set distance {}, got {}",
            self.context, letter, expected, actual
        );
        self
    }
    pub fn groups(self, expected: &[char]) -> Self {
        assert_eq!(
            self.set.get_available_groups(),
            groups(expected),
            "{}: Unexpected set groups",
            self.context
        );
        self
    }
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let items = &self.set.items;
        assert!(
            index < items.len(),
            "{}: Item index {} out of bounds (set has {} items)",
            self.context,
            index,
            items.len()
        );
        assertion(ItemAssertion {
            item: &items[index],
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

pub struct ItemAssertion<'a> {
    item: &'a SetItem,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    pub fn reps(self, expected: u32) -> Self {
        assert_eq!(self.item.reps(), expected, "{}: Unexpected reps", self.context);
        self
    }
    pub fn distance(self, expected: u32) -> Self {
        assert_eq!(
            self.item.distance(),
            expected,
            "{}: Unexpected distance",
            self.context
        );
        self
    }
    pub fn desc(self, expected: &str) -> Self {
        assert_eq!(
            self.item.desc(),
            expected,
            "{}: Unexpected description",
            self.context
        );
        self
    }
    pub fn intervals(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.item.intervals(),
            expected,
            "{}: Unexpected intervals",
            self.context
        );
        self
    }
    pub fn note(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.item.note.as_deref(),
            expected,
            "{}: Unexpected note",
            self.context
        );
        self
    }
    pub fn groups(self, expected: &[char]) -> Self {
        assert_eq!(
            self.item.get_available_groups(),
            groups(expected),
            "{}: Unexpected item groups",
            self.context
        );
        self
    }
    /// Assert on the workout a group swims for this item; missing groups
    /// fall back to the primary definition, as they do for renderers.
    pub fn variation<F>(self, letter: char, assertion: F) -> Self
    where
        F: FnOnce(VariationAssertion<'a>),
    {
        assertion(VariationAssertion {
            variation: self.item.get_variation_for_group(group(letter)),
            context: format!("{}:group[{}]", self.context, letter),
        });
        self
    }
}

pub struct VariationAssertion<'a> {
    variation: &'a GroupVariation,
    context: String,
}

impl VariationAssertion<'_> {
    pub fn reps(self, expected: u32) -> Self {
        assert_eq!(self.variation.reps, expected, "{}: Unexpected reps", self.context);
        self
    }
    pub fn distance(self, expected: u32) -> Self {
        assert_eq!(
            self.variation.distance, expected,
            "{}: Unexpected distance",
            self.context
        );
        self
    }
    pub fn desc(self, expected: &str) -> Self {
        assert_eq!(
            self.variation.desc, expected,
            "{}: Unexpected description",
            self.context
        );
        self
    }
    pub fn intervals(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.variation.intervals, expected,
            "{}: Unexpected intervals",
            self.context
        );
        self
    }
}
