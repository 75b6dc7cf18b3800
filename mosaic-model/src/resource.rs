use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-editable metadata attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserMeta {
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One entry in a search result set.
///
/// The pagination core treats this as an opaque unit; only [`UserMeta`] is
/// ever rewritten locally, and only after a successful update round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    pub user_meta: UserMeta,
    pub content_type: String,
    pub size_bytes: u64,
    pub width: u32,
    pub height: u32,
    /// Present for video content, absent for still images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    pub time_added: DateTime<Utc>,
    pub thumbnail_url: String,
    pub content_url: String,
}

impl ResourceItem {
    /// Display title, falling back to the resource id when no user title is
    /// set.
    pub fn title(&self) -> &str {
        self.user_meta
            .title
            .as_deref()
            .unwrap_or(self.resource_id.as_str())
    }
}
