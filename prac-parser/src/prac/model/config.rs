//! Document-level configuration

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Distance units for a workout. No conversion happens between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Meters,
    Yards,
}

impl Units {
    /// Canonical lowercase name: `meters` or `yards`.
    pub fn name(self) -> &'static str {
        match self {
            Units::Meters => "meters",
            Units::Yards => "yards",
        }
    }

    /// Suffix used after distances: `m` or `y`.
    pub fn symbol(self) -> &'static str {
        match self {
            Units::Meters => "m",
            Units::Yards => "y",
        }
    }

    /// Title-cased name used in reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Units::Meters => "Meters",
            Units::Yards => "Yards",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid units '{0}': must be 'meters', 'yards', 'm', or 'y'")]
pub struct InvalidUnits(pub String);

impl FromStr for Units {
    type Err = InvalidUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meters" | "m" => Ok(Units::Meters),
            "yards" | "y" => Ok(Units::Yards),
            _ => Err(InvalidUnits(s.to_string())),
        }
    }
}

/// Metadata collected from the leading `key: value` block of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WorkoutConfig {
    pub units: Units,
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
}

impl WorkoutConfig {
    pub fn new(units: Units) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    pub fn unit_symbol(&self) -> &'static str {
        self.units.symbol()
    }
}
