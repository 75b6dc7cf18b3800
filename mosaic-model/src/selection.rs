//! Normalized description of what a gallery view is showing.
//!
//! A [`ResourceSelection`] is a pure value: two selections built from the same
//! URL parameters compare equal, which is what views use to suppress redundant
//! re-fetches on navigation events that did not change anything relevant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Fields the search API can sort on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Title,
    #[default]
    DateAdded,
    Duration,
    Size,
    Resolution,
    Random,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::DateAdded => "date_added",
            SortField::Duration => "duration",
            SortField::Size => "size",
            SortField::Resolution => "resolution",
            SortField::Random => "random",
        }
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "date_added" => Ok(SortField::DateAdded),
            "duration" => Ok(SortField::Duration),
            "size" => Ok(SortField::Size),
            "resolution" => Ok(SortField::Resolution),
            "random" => Ok(SortField::Random),
            other => Err(ModelError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(ModelError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort criteria carried in the `s` URL parameter as `field;direction`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Wire encoding used by the `s` URL parameter.
    pub fn as_param(&self) -> String {
        format!("{};{}", self.field, self.direction)
    }
}

impl FromStr for Sort {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once(';')
            .ok_or_else(|| ModelError::InvalidSort(s.to_string()))?;
        Ok(Sort {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// Open-ended duration range in seconds.
///
/// Wire format is `min-max` with either side optional: `"60-"`, `"-600"`,
/// `"60-600"`, or `"-"` for unbounded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct DurationFilter {
    pub min_seconds: Option<u64>,
    pub max_seconds: Option<u64>,
}

impl DurationFilter {
    pub fn new(min_seconds: Option<u64>, max_seconds: Option<u64>) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_seconds.is_none() && self.max_seconds.is_none()
    }

    /// Wire encoding; absent bounds are left empty.
    pub fn as_param(&self) -> String {
        let fmt_bound =
            |b: Option<u64>| b.map(|v| v.to_string()).unwrap_or_default();
        format!(
            "{}-{}",
            fmt_bound(self.min_seconds),
            fmt_bound(self.max_seconds)
        )
    }

    /// The same range with both bounds scaled to milliseconds, which is the
    /// unit the search API expects. Bounds near `u64::MAX` saturate; URL
    /// input must never panic here.
    pub fn to_millis(&self) -> Self {
        Self {
            min_seconds: self.min_seconds.map(|v| v.saturating_mul(1000)),
            max_seconds: self.max_seconds.map(|v| v.saturating_mul(1000)),
        }
    }
}

impl FromStr for DurationFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| ModelError::InvalidDuration(s.to_string()))?;
        let parse_bound = |part: &str| -> Result<Option<u64>, ModelError> {
            if part.is_empty() {
                return Ok(None);
            }
            part.parse::<u64>()
                .map(Some)
                .map_err(|_| ModelError::InvalidDuration(s.to_string()))
        };
        Ok(DurationFilter {
            min_seconds: parse_bound(min)?,
            max_seconds: parse_bound(max)?,
        })
    }
}

/// The normalized set of filters and sort criteria driving a result set.
///
/// Recomputed from the URL on every navigation event; structural equality is
/// the contract ([`PartialEq`] derives below), not reference identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceSelection {
    /// Free-text search query.
    pub query: Option<String>,
    /// Restrict results to a named playlist.
    pub playlist: Option<String>,
    /// Restrict results to a single tag. Forced absent when `untagged` is set.
    pub tag: Option<String>,
    /// Only resources carrying no tags at all.
    pub untagged: bool,
    /// Duration range in seconds.
    pub duration: Option<DurationFilter>,
    /// Minimum vertical resolution; 0 means no filter.
    pub minimum_quality: u32,
    pub sort: Sort,
}

impl ResourceSelection {
    /// A selection that only differs in its tag filter. `untagged` precedence
    /// applies: setting a tag clears the untagged flag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self.untagged = false;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }
}
