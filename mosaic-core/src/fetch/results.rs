//! Accumulated results for one selection's lifetime.

use mosaic_model::{ResourceItem, UserMeta};

/// Result list accumulated across pages, plus the server-reported total and
/// tag facets.
///
/// Append-only while a selection lives; replaced wholesale when the selection
/// changes. Local mutation is limited to user-metadata edits applied after a
/// successful update round trip, matched by resource id.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    results: Vec<ResourceItem>,
    total: usize,
    tags: Vec<String>,
}

impl PageState {
    pub fn results(&self) -> &[ResourceItem] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Next fetch offset; by construction the number of accumulated results.
    pub fn offset(&self) -> usize {
        self.results.len()
    }

    pub(crate) fn clear(&mut self) {
        self.results.clear();
        self.total = 0;
        self.tags.clear();
    }

    pub(crate) fn append(
        &mut self,
        items: Vec<ResourceItem>,
        total: usize,
        tags: Vec<String>,
    ) -> usize {
        let appended = items.len();
        self.results.extend(items);
        self.total = total;
        self.tags = tags;
        appended
    }

    /// Replace the user metadata of the matching item. Order and every other
    /// field stay untouched. Returns false for unknown ids.
    pub fn apply_meta(&mut self, resource_id: &str, meta: UserMeta) -> bool {
        match self
            .results
            .iter_mut()
            .find(|item| item.resource_id == resource_id)
        {
            Some(item) => {
                item.user_meta = meta;
                true
            }
            None => false,
        }
    }

    /// Apply a bulk tag update to every listed item present in the results.
    ///
    /// Removed tags are dropped first, then added tags are appended in
    /// first-seen order without duplicates. Returns how many items matched.
    pub fn apply_bulk_tags(
        &mut self,
        resource_ids: &[String],
        added: &[String],
        removed: &[String],
    ) -> usize {
        let mut matched = 0;
        for item in &mut self.results {
            if !resource_ids.contains(&item.resource_id) {
                continue;
            }
            matched += 1;
            let tags = &mut item.user_meta.tags;
            tags.retain(|tag| !removed.contains(tag));
            for tag in added {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        matched
    }

    /// Drop a deleted resource and shrink the known total accordingly.
    pub fn remove(&mut self, resource_id: &str) -> bool {
        let before = self.results.len();
        self.results.retain(|item| item.resource_id != resource_id);
        let removed = self.results.len() < before;
        if removed {
            self.total = self.total.saturating_sub(1);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: &str, tags: &[&str]) -> ResourceItem {
        ResourceItem {
            resource_id: id.to_string(),
            bucket_id: None,
            user_meta: UserMeta {
                title: Some(format!("title-{id}")),
                description: None,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            content_type: "video/mp4".to_string(),
            size_bytes: 1024,
            width: 1920,
            height: 1080,
            duration_ms: Some(60_000),
            time_added: Utc::now(),
            thumbnail_url: format!("/thumbnails/{id}.webp"),
            content_url: format!("/content/{id}.mp4"),
        }
    }

    fn state_with(items: Vec<ResourceItem>) -> PageState {
        let mut state = PageState::default();
        let total = items.len();
        state.append(items, total, vec![]);
        state
    }

    #[test]
    fn apply_meta_touches_only_the_matching_item() {
        let mut state = state_with(vec![item("a", &[]), item("b", &[])]);
        let updated = state.apply_meta(
            "b",
            UserMeta {
                title: Some("renamed".to_string()),
                description: None,
                tags: vec![],
            },
        );
        assert!(updated);
        assert_eq!(state.results()[0].user_meta.title.as_deref(), Some("title-a"));
        assert_eq!(state.results()[1].user_meta.title.as_deref(), Some("renamed"));
    }

    #[test]
    fn apply_meta_unknown_id_is_a_noop() {
        let mut state = state_with(vec![item("a", &[])]);
        assert!(!state.apply_meta("missing", UserMeta::default()));
    }

    #[test]
    fn bulk_tags_update_subset_preserving_order() {
        let ids: Vec<String> = vec!["b".to_string(), "d".to_string()];
        let mut state = state_with(vec![
            item("a", &["old"]),
            item("b", &["old"]),
            item("c", &["old"]),
            item("d", &["old", "keep"]),
            item("e", &["old"]),
        ]);

        let matched = state.apply_bulk_tags(
            &ids,
            &["new".to_string()],
            &["old".to_string()],
        );

        assert_eq!(matched, 2);
        let tags: Vec<&[String]> = state
            .results()
            .iter()
            .map(|r| r.user_meta.tags.as_slice())
            .collect();
        assert_eq!(tags[0], &["old".to_string()]);
        assert_eq!(tags[1], &["new".to_string()]);
        assert_eq!(tags[2], &["old".to_string()]);
        assert_eq!(tags[3], &["keep".to_string(), "new".to_string()]);
        assert_eq!(tags[4], &["old".to_string()]);
        // Order of the result list itself is untouched.
        let order: Vec<&str> = state
            .results()
            .iter()
            .map(|r| r.resource_id.as_str())
            .collect();
        assert_eq!(order, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn bulk_tags_never_duplicate_existing_tags() {
        let ids = vec!["a".to_string()];
        let mut state = state_with(vec![item("a", &["keep"])]);
        state.apply_bulk_tags(&ids, &["keep".to_string()], &[]);
        assert_eq!(state.results()[0].user_meta.tags, vec!["keep".to_string()]);
    }

    #[test]
    fn remove_shrinks_total() {
        let mut state = state_with(vec![item("a", &[]), item("b", &[])]);
        assert!(state.remove("a"));
        assert_eq!(state.total(), 1);
        assert_eq!(state.offset(), 1);
        assert!(!state.remove("a"));
        assert_eq!(state.total(), 1);
    }
}
