//! Item line grammar
//!
//! An item line holds the group `A` workout plus one bracketed alternative
//! per additional group:
//!
//!   [REPSx]DISTANCE DESC[@ INTERVAL[/INTERVAL...]] [[REPSx]DISTANCE DESC[@ ...]] ...
//!
//! Brackets are lifted out first and labelled `B`, `C`, ... left to right;
//! what remains is the primary workout. Every part goes through the same
//! grammar and the same field checks.

use super::LineContext;
use crate::prac::error::{Field, ParseResult};
use crate::prac::intervals::is_valid_interval;
use crate::prac::lexing::SourceLine;
use crate::prac::model::{GroupLabel, GroupVariation, SetItem};
use once_cell::sync::Lazy;
use regex::Regex;

static GROUP_BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());
static WORKOUT_FIELDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([0-9]+)x)?([0-9]+)\s+([^@]+?)(?:\s*@\s*(.+))?$").unwrap()
});

/// Parse an indented line into a [`SetItem`]. The line's note becomes the
/// item note.
pub fn parse_item_line(line: &SourceLine<'_>) -> ParseResult<SetItem> {
    let ctx = LineContext::new(line.number, line.raw);
    let content = line.content.as_str();

    let brackets: Vec<&str> = GROUP_BRACKET
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if brackets.len() > GroupLabel::MAX_VARIATIONS {
        return Err(ctx.grammar(
            None,
            format!(
                "too many group variations (at most {})",
                GroupLabel::MAX_VARIATIONS
            ),
        ));
    }

    let primary_text = GROUP_BRACKET.replace_all(content, "");
    if primary_text.contains(|c: char| c == '[' || c == ']') {
        return Err(ctx.grammar(None, "unbalanced group bracket"));
    }
    let primary = parse_workout_fields(primary_text.trim(), None, &ctx)?;

    let mut variations = Vec::with_capacity(brackets.len());
    for (ordinal, text) in brackets.iter().enumerate() {
        let label = GroupLabel::from_ordinal(ordinal);
        variations.push(parse_workout_fields(text.trim(), label, &ctx)?);
    }

    SetItem::new(primary)
        .with_note(line.note.clone())
        .with_variations(variations)
        .map_err(|overflow| ctx.grammar(None, overflow.to_string()))
}

/// Parse `[REPSx]DISTANCE DESC[@ INTERVALS]` for one group. `group` is `None`
/// for the primary workout.
pub(crate) fn parse_workout_fields(
    text: &str,
    group: Option<GroupLabel>,
    ctx: &LineContext<'_>,
) -> ParseResult<GroupVariation> {
    let caps = WORKOUT_FIELDS.captures(text).ok_or_else(|| {
        let message = match group {
            None => "could not parse item line".to_string(),
            Some(label) => format!("could not parse item line for group {}", label),
        };
        ctx.grammar(group, message)
    })?;

    let reps = match caps.get(1) {
        Some(m) => parse_count(m.as_str(), Field::Reps, group, ctx)?,
        None => 1,
    };
    let distance = parse_count(&caps[2], Field::Distance, group, ctx)?;
    let desc = caps[3].trim();
    let intervals: Vec<String> = caps
        .get(4)
        .map(|m| m.as_str().split('/').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();

    if distance == 0 {
        return Err(ctx.field(
            group,
            Field::Distance,
            format!("{} must be positive (got 0)", subject(group, Field::Distance)),
        ));
    }
    if reps == 0 {
        return Err(ctx.field(
            group,
            Field::Reps,
            format!("{} must be positive (got 0)", subject(group, Field::Reps)),
        ));
    }
    if desc.is_empty() {
        return Err(ctx.field(
            group,
            Field::Description,
            format!("{} cannot be empty", subject(group, Field::Description)),
        ));
    }
    if let Some(bad) = intervals.iter().find(|token| !is_valid_interval(token)) {
        return Err(ctx.field(
            group,
            Field::Interval,
            format!(
                "{}invalid interval format '{}' (use :SS, MM:SS or H:MM:SS)",
                group.map_or(String::new(), |label| format!("group {} ", label)),
                bad
            ),
        ));
    }

    Ok(GroupVariation::new(reps, distance, desc, intervals))
}

/// Parse an unsigned count captured by a digits-only group.
pub(crate) fn parse_count(
    digits: &str,
    field: Field,
    group: Option<GroupLabel>,
    ctx: &LineContext<'_>,
) -> ParseResult<u32> {
    digits.parse().map_err(|_| {
        ctx.field(
            group,
            field,
            format!("{} {} is out of range", subject(group, field), digits),
        )
    })
}

fn subject(group: Option<GroupLabel>, field: Field) -> String {
    match group {
        Some(label) => format!("group {} {}", label, field),
        None => field.to_string(),
    }
}
