//! Training groups and per-group variations
//!
//! Every item belongs to group `A` by default. Bracketed alternatives on an
//! item line define the same item for groups `B`, `C`, ... in the order they
//! appear.

use crate::prac::intervals::interval_seconds;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A training group, always a single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupLabel(char);

impl GroupLabel {
    /// The primary group. Its workout is the undecorated item text.
    pub const A: GroupLabel = GroupLabel('A');

    /// Bracketed variations can name `B` through `Z`.
    pub const MAX_VARIATIONS: usize = 25;

    pub fn new(letter: char) -> Option<Self> {
        letter.is_ascii_uppercase().then_some(Self(letter))
    }

    /// Label for the `ordinal`-th bracket on a line: 0 is `B`, 24 is `Z`.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal >= Self::MAX_VARIATIONS {
            return None;
        }
        Some(Self((b'B' + ordinal as u8) as char))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_primary(self) -> bool {
        self == Self::A
    }
}

impl Default for GroupLabel {
    fn default() -> Self {
        Self::A
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid group label '{0}': expected a single letter A-Z")]
pub struct InvalidGroupLabel(pub String);

impl FromStr for GroupLabel {
    type Err = InvalidGroupLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter.to_ascii_uppercase())
                .ok_or_else(|| InvalidGroupLabel(s.to_string())),
            _ => Err(InvalidGroupLabel(s.to_string())),
        }
    }
}

impl Serialize for GroupLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raised when an item asks for more variations than there are letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("too many group variations (at most {max})", max = GroupLabel::MAX_VARIATIONS)]
pub struct GroupLabelOverflow;

/// One group's version of an item: `[REPSx]DISTANCE DESC[@ INTERVAL/...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupVariation {
    pub reps: u32,
    pub distance: u32,
    pub desc: String,
    pub intervals: Vec<String>,
}

impl GroupVariation {
    pub fn new(reps: u32, distance: u32, desc: impl Into<String>, intervals: Vec<String>) -> Self {
        Self {
            reps,
            distance,
            desc: desc.into(),
            intervals,
        }
    }

    pub fn total_distance(&self) -> u64 {
        u64::from(self.reps) * u64::from(self.distance)
    }

    /// The interval used as the per-rep pace, if any.
    pub fn pace_interval(&self) -> Option<&str> {
        self.intervals.first().map(String::as_str)
    }

    /// Seconds spent on this variation: reps times the first interval.
    /// Open-ended work (no interval) takes zero time.
    pub fn total_time(&self) -> u64 {
        self.pace_interval()
            .and_then(interval_seconds)
            .map_or(0, |seconds| seconds.saturating_mul(u64::from(self.reps)))
    }
}

impl fmt::Display for GroupVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reps > 1 {
            write!(f, "{}x", self.reps)?;
        }
        // `#` would open a comment when the line is read back.
        write!(f, "{} {}", self.distance, self.desc.replace('#', "\\#"))?;
        if !self.intervals.is_empty() {
            write!(f, " @ {}", self.intervals.join("/"))?;
        }
        Ok(())
    }
}
