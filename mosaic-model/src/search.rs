//! Request and response shapes for the resource search API.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceItem;
use crate::selection::{SortDirection, SortField};

/// Query parameters for one page request against the search endpoint.
///
/// Optional members are omitted from the request entirely when unset, which
/// keeps request URLs canonical and cache-friendly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub offset: usize,
    pub n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub untagged: Option<bool>,
    pub sort_field: SortField,
    pub sort_dir: SortDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_res: Option<u32>,
    /// Duration range in milliseconds, `min-max` encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl SearchParams {
    /// The key/value pairs this request puts on the wire, in a fixed order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("offset", self.offset.to_string()),
            ("n", self.n.to_string()),
        ];
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(playlist) = &self.playlist {
            pairs.push(("playlist", playlist.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(untagged) = self.untagged {
            pairs.push(("untagged", untagged.to_string()));
        }
        pairs.push(("sort_field", self.sort_field.to_string()));
        pairs.push(("sort_dir", self.sort_dir.to_string()));
        if let Some(min_res) = self.min_res {
            pairs.push(("min_res", min_res.to_string()));
        }
        if let Some(d) = &self.d {
            pairs.push(("d", d.clone()));
        }
        pairs
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs().iter().any(|(k, _)| *k == key)
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub offset: usize,
    pub total: usize,
    pub results: Vec<ResourceItem>,
    /// Tag facets reported for the whole selection, not just this page.
    #[serde(default)]
    pub tags: Vec<String>,
}
