// SPDX-License-Identifier: Unlicense

//! Which records get rendered, and how they are tagged.

use super::Level;

use enum_map::{enum_map, EnumMap};

use core::fmt;
use core::str::FromStr;

/// Least severe level rendered.
///
/// Numbered so that a record renders when `threshold >= level`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LevelFilter {
    /// Render nothing.
    Silent = 0,
    /// Errors only.
    Error = 30,
    /// Errors and milestones.
    Info = 40,
    /// Everything.
    Debug = 50,
}

impl LevelFilter {
    /// True if records at `level` pass this filter.
    pub fn allows(self, level: Level) -> bool {
        self as u8 >= level.value()
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => LevelFilter::Error,
            Level::Info => LevelFilter::Info,
            Level::Debug => LevelFilter::Debug,
        }
    }
}

/// A threshold name or number was not recognised.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseLevelError;

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of silent, error, info, debug, 0, 30, 40, 50")
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let filter = if s.eq_ignore_ascii_case("silent") || s == "0" {
            LevelFilter::Silent
        } else if s.eq_ignore_ascii_case("error") || s == "30" {
            LevelFilter::Error
        } else if s.eq_ignore_ascii_case("info") || s == "40" {
            LevelFilter::Info
        } else if s.eq_ignore_ascii_case("debug") || s == "50" {
            LevelFilter::Debug
        } else {
            return Err(ParseLevelError);
        };
        Ok(filter)
    }
}

/// Runtime logging configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Master switch.
    pub enabled: bool,
    /// Least severe level rendered.
    pub threshold: LevelFilter,
    /// Text printed for each level.
    pub tags: EnumMap<Level, &'static str>,
}

impl Config {
    /// Everything on, stock tags.
    pub fn new() -> Self {
        Config {
            enabled: true,
            threshold: LevelFilter::Debug,
            tags: enum_map! {
                Level::Debug => "DBG",
                Level::Info => "INFO",
                Level::Error => "ERR",
            },
        }
    }

    /// Nothing rendered.
    pub fn silent() -> Self {
        Config::new().with_enabled(false)
    }

    /// Replace the master switch.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replace the threshold.
    pub fn with_threshold(mut self, threshold: LevelFilter) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the tag of one level.
    pub fn with_tag(mut self, level: Level, tag: &'static str) -> Self {
        self.tags[level] = tag;
        self
    }

    /// Tag printed for `level`.
    pub fn tag(&self, level: Level) -> &'static str {
        self.tags[level]
    }

    /// True if a record at `level` is rendered.
    ///
    /// Always false when built without the `logging` feature.
    #[inline]
    pub fn renders(&self, level: Level) -> bool {
        cfg!(feature = "logging") && self.enabled && self.threshold.allows(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
