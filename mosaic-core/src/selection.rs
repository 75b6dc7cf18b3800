//! URL query-string handling for the selection model.
//!
//! Parsing is fail-soft throughout: malformed or missing parameters fall back
//! to their defaults and are never surfaced as errors. The inverse direction
//! omits parameters that equal their no-filter default so request URLs stay
//! canonical.

use mosaic_model::{
    DurationFilter, Prefs, ResourceSelection, SearchParams, Sort,
};
use url::form_urlencoded;

/// URL parameter names consumed by the selection model.
mod params {
    pub const QUERY: &str = "q";
    pub const PLAYLIST: &str = "playlist";
    pub const TAG: &str = "tag";
    pub const UNTAGGED: &str = "untagged";
    pub const DURATION: &str = "d";
    pub const MIN_QUALITY: &str = "vq";
    pub const SORT: &str = "s";
}

fn first_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Derive a [`ResourceSelection`] from a URL query string using default
/// preferences as the fallback layer.
pub fn selection_from_query(query: &str) -> ResourceSelection {
    selection_from_query_with_prefs(query, &Prefs::default())
}

/// Derive a [`ResourceSelection`] from a URL query string.
///
/// Stored preferences supply the sort order and minimum resolution when the
/// URL does not carry them. `untagged=true` (case-insensitive) takes
/// precedence over any `tag` parameter.
pub fn selection_from_query_with_prefs(
    query: &str,
    prefs: &Prefs,
) -> ResourceSelection {
    let query = query.strip_prefix('?').unwrap_or(query);

    let untagged = first_param(query, params::UNTAGGED)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));

    let tag = if untagged {
        None
    } else {
        non_empty(first_param(query, params::TAG))
    };

    let duration = first_param(query, params::DURATION)
        .and_then(|raw| raw.parse::<DurationFilter>().ok());

    let minimum_quality = first_param(query, params::MIN_QUALITY)
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(prefs.minimum_quality);

    let sort = first_param(query, params::SORT)
        .and_then(|raw| raw.parse::<Sort>().ok())
        .unwrap_or(prefs.sort);

    ResourceSelection {
        query: non_empty(first_param(query, params::QUERY)),
        playlist: non_empty(first_param(query, params::PLAYLIST)),
        tag,
        untagged,
        duration,
        minimum_quality,
        sort,
    }
}

/// Build the search request parameters for one page of a selection.
///
/// Parameters equal to the no-filter default are omitted entirely. The
/// duration range is converted from the seconds carried in the URL to the
/// milliseconds the API expects.
pub fn to_search_params(
    selection: &ResourceSelection,
    offset: usize,
    n: usize,
) -> SearchParams {
    SearchParams {
        offset,
        n,
        q: selection.query.clone(),
        playlist: selection.playlist.clone(),
        tag: if selection.untagged {
            None
        } else {
            selection.tag.clone()
        },
        untagged: selection.untagged.then_some(true),
        sort_field: selection.sort.field,
        sort_dir: selection.sort.direction,
        min_res: (selection.minimum_quality > 0)
            .then_some(selection.minimum_quality),
        d: selection.duration.map(|d| d.to_millis().as_param()),
    }
}

/// Set one parameter in a query string, preserving every other parameter and
/// its position. The first occurrence is rewritten in place; duplicates are
/// dropped.
pub fn set_query_param(query: &str, name: &str, value: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut pairs: Vec<(String, String)> =
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

    match pairs.iter().position(|(k, _)| k == name) {
        Some(index) => {
            pairs[index].1 = value.to_string();
            // Drop any further occurrences of the same name.
            let mut i = 0;
            pairs.retain(|(k, _)| {
                let keep = i <= index || k != name;
                i += 1;
                keep
            });
        }
        None => pairs.push((name.to_string(), value.to_string())),
    }

    encode_pairs(&pairs)
}

/// Remove a parameter from a query string, preserving everything else.
/// Used when a filter is reset to its default so URLs stay canonical.
pub fn clear_query_param(query: &str, name: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> =
        form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| k != name)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
    encode_pairs(&pairs)
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
