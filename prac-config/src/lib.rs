//! Shared configuration loader for the prac toolchain.
//!
//! `defaults/prac.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PracConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use prac_parser::ReportOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/prac.default.toml");

/// Top-level configuration consumed by prac applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PracConfig {
    pub report: ReportConfig,
}

/// Mirrors the knobs exposed by the workout report formatter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    pub default_title: String,
    pub rule_width: usize,
    pub set_rule_width: usize,
    pub group_separator_width: usize,
    pub show_notes: bool,
    pub show_time: bool,
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        ReportOptions {
            default_title: config.default_title.clone(),
            rule_width: config.rule_width,
            set_rule_width: config.set_rule_width,
            group_separator_width: config.group_separator_width,
            show_notes: config.show_notes,
            show_time: config.show_time,
        }
    }
}

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "prac.toml";

impl PracConfig {
    /// Layout options for `WorkoutSummary::format_workout` and `render_all`.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::from(&self.report)
    }
}

/// Builds a [`PracConfig`] from the embedded report defaults plus any user
/// TOML files and single-key overrides, later layers winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seed the report settings with `defaults/prac.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist, such as one named by `--config`.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file only if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `prac.toml` from `dir` if the directory has one.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        self.with_optional_file(path)
    }

    /// Override one report key, e.g. `("report.show_time", false)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize it. Rule widths of zero are
    /// rejected since the report would lose its section boundaries.
    pub fn build(self) -> Result<PracConfig, ConfigError> {
        let config: PracConfig = self.builder.build()?.try_deserialize()?;
        let widths = [
            ("report.rule_width", config.report.rule_width),
            ("report.set_rule_width", config.report.set_rule_width),
            ("report.group_separator_width", config.report.group_separator_width),
        ];
        if let Some((key, _)) = widths.iter().find(|(_, width)| *width == 0) {
            return Err(ConfigError::Message(format!("{} must be at least 1", key)));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded report defaults with no user layers.
pub fn load_defaults() -> Result<PracConfig, ConfigError> {
    Loader::new().build()
}
