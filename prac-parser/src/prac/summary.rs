//! Workout summary
//!
//! Whole-workout aggregation per training group and the plain-text report.
//! A summary only borrows the parsed model, so any number of them can read
//! the same parse result.

use crate::prac::intervals::format_duration;
use crate::prac::model::{GroupLabel, PracticeSet, SetItem, WorkoutConfig};
use serde::Serialize;
use std::collections::BTreeSet;

/// Layout knobs for [`WorkoutSummary::format_workout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Title used when the document has no `title:`.
    pub default_title: String,
    pub rule_width: usize,
    pub set_rule_width: usize,
    /// Width of the rule between per-group reports in [`WorkoutSummary::render_all`].
    pub group_separator_width: usize,
    pub show_notes: bool,
    pub show_time: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            default_title: "SWIM WORKOUT".to_string(),
            rule_width: 50,
            set_rule_width: 30,
            group_separator_width: 60,
            show_notes: true,
            show_time: true,
        }
    }
}

/// Totals for one group across the whole workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTotals {
    pub group: GroupLabel,
    pub distance: u64,
    /// Whole seconds.
    pub time: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct WorkoutSummary<'a> {
    config: &'a WorkoutConfig,
    sets: &'a [PracticeSet],
}

impl<'a> WorkoutSummary<'a> {
    pub fn new(config: &'a WorkoutConfig, sets: &'a [PracticeSet]) -> Self {
        Self { config, sets }
    }

    pub fn config(&self) -> &'a WorkoutConfig {
        self.config
    }

    pub fn sets(&self) -> &'a [PracticeSet] {
        self.sets
    }

    /// `A` plus every group named anywhere in the workout, ascending.
    pub fn get_all_groups(&self) -> Vec<GroupLabel> {
        let mut groups = BTreeSet::from([GroupLabel::A]);
        for set in self.sets {
            groups.extend(set.get_available_groups());
        }
        groups.into_iter().collect()
    }

    pub fn total_distance(&self, group: GroupLabel) -> u64 {
        self.sets
            .iter()
            .map(|set| set.total_distance(group))
            .fold(0, u64::saturating_add)
    }

    pub fn total_time(&self, group: GroupLabel) -> u64 {
        self.sets
            .iter()
            .map(|set| set.total_time(group))
            .fold(0, u64::saturating_add)
    }

    pub fn group_totals(&self) -> Vec<GroupTotals> {
        self.get_all_groups()
            .into_iter()
            .map(|group| GroupTotals {
                group,
                distance: self.total_distance(group),
                time: self.total_time(group),
            })
            .collect()
    }

    /// Render the workout as text. With no group, every item is shown with
    /// its bracketed variations and totals are for group `A`; with a group,
    /// each item is shown as that group swims it.
    pub fn format_workout(&self, group: Option<GroupLabel>, options: &ReportOptions) -> String {
        let totals_group = group.unwrap_or(GroupLabel::A);
        let symbol = self.config.unit_symbol();
        let rule = "=".repeat(options.rule_width);
        let title = self
            .config
            .title
            .as_deref()
            .unwrap_or(&options.default_title)
            .to_uppercase();

        let mut lines = vec![rule.clone()];
        match group {
            Some(label) => lines.push(format!("{} - GROUP {}", title, label)),
            None => lines.push(title),
        }
        let metadata = [
            ("Coach", &self.config.author),
            ("Date", &self.config.date),
            ("Level", &self.config.level),
            ("Description", &self.config.description),
        ];
        for (label, value) in metadata {
            if let Some(value) = value {
                lines.push(format!("{}: {}", label, value));
            }
        }
        lines.push(format!("Units: {}", self.config.units.display_name()));
        lines.push(rule.clone());

        for set in self.sets {
            let repeat = if set.repeat > 1 {
                format!(" x{}", set.repeat)
            } else {
                String::new()
            };
            lines.push(format!("\n{}{}", set.name.to_uppercase(), repeat));
            lines.push("-".repeat(options.set_rule_width));
            for item in &set.items {
                lines.push(item_line(item, group, options.show_notes));
            }
            lines.push(format!(
                "Set Total: {}{}",
                set.total_distance(totals_group),
                symbol
            ));
            let set_time = set.total_time(totals_group);
            if options.show_time && set_time > 0 {
                lines.push(format!("Set Time: {}", format_duration(set_time)));
            }
        }

        lines.push(rule.clone());
        lines.push(format!(
            "WORKOUT TOTAL: {}{}",
            self.total_distance(totals_group),
            symbol
        ));
        let workout_time = self.total_time(totals_group);
        if options.show_time && workout_time > 0 {
            lines.push(format!("WORKOUT TIME: {}", format_duration(workout_time)));
        }
        lines.push(rule);

        lines.join("\n")
    }

    /// One combined report when the workout has a single group, otherwise
    /// one report per group in order, separated by a rule.
    pub fn render_all(&self, options: &ReportOptions) -> String {
        let groups = self.get_all_groups();
        if groups.len() == 1 {
            return self.format_workout(None, options);
        }
        let separator = format!("\n\n{}\n\n", "=".repeat(options.group_separator_width));
        groups
            .into_iter()
            .map(|group| self.format_workout(Some(group), options))
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

fn item_line(item: &SetItem, group: Option<GroupLabel>, show_notes: bool) -> String {
    let mut line = match group {
        Some(label) => format!("  {}", item.get_variation_for_group(label)),
        None => format!("  {}", item.workout_text()),
    };
    if let (true, Some(note)) = (show_notes, &item.note) {
        line.push_str(&format!(" # {}", note));
    }
    line
}
