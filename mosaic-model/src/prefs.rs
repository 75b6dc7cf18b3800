//! Stored viewer preferences.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::selection::Sort;

/// Gallery column preference: a fixed count, or derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    #[default]
    Auto,
    Fixed(u16),
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Columns::Auto => f.write_str("auto"),
            Columns::Fixed(n) => write!(f, "{n}"),
        }
    }
}

// Persisted as either the string "auto" or a bare number, matching the
// preference files written by earlier builds.
impl Serialize for Columns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Columns::Auto => serializer.serialize_str("auto"),
            Columns::Fixed(n) => serializer.serialize_u16(*n),
        }
    }
}

impl<'de> Deserialize<'de> for Columns {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u16),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Count(0) => Ok(Columns::Auto),
            Raw::Count(n) => Ok(Columns::Fixed(n)),
            Raw::Text(s) if s == "auto" => Ok(Columns::Auto),
            Raw::Text(other) => Err(de::Error::custom(format!(
                "expected \"auto\" or a column count, got {other:?}"
            ))),
        }
    }
}

/// Viewer preferences persisted across sessions.
///
/// The default sort and minimum resolution here act as fallbacks when the URL
/// does not carry the corresponding parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub show_titles: bool,
    pub show_duration: bool,
    pub show_dates: bool,
    pub gallery_columns: Columns,
    pub sort: Sort,
    pub minimum_quality: u32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            show_titles: true,
            show_duration: true,
            show_dates: false,
            gallery_columns: Columns::Auto,
            sort: Sort::default(),
            minimum_quality: 0,
        }
    }
}
