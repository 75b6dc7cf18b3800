//! The gallery feed: one selection, one coordinator, one API handle.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use mosaic_core::fetch::{
    ApplyOutcome, FetchCoordinator, FetchPhase, PageRequest, PageSizePolicy,
};
use mosaic_core::{
    DEFAULT_FETCH_MARGIN, DEFAULT_TILE_SIZE, ElementScrollMetrics,
    PageScrollMetrics, columns_for_width, element_scroll_should_fetch,
    page_scroll_should_fetch, to_search_params,
};
use mosaic_model::{Capabilities, ResourceItem, ResourceSelection, UserMeta};

use crate::api::ResourceApi;
use crate::error::ApiError;

/// Drives paginated loading for a single view instance.
///
/// Holding `&mut self` across the fetch await point makes the
/// at-most-one-in-flight rule structural; on top of that, every request
/// carries the generation it was issued for, so a response that outlives its
/// selection is dropped instead of appended.
pub struct GalleryFeed {
    api: Arc<dyn ResourceApi>,
    coordinator: FetchCoordinator,
    selection: ResourceSelection,
    fetch_margin: f32,
    tile_size: f32,
}

impl fmt::Debug for GalleryFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryFeed")
            .field("selection", &self.selection)
            .field("phase", &self.coordinator.phase())
            .field("results", &self.coordinator.results().len())
            .finish_non_exhaustive()
    }
}

impl GalleryFeed {
    pub fn new(api: Arc<dyn ResourceApi>, policy: PageSizePolicy) -> Self {
        Self {
            api,
            coordinator: FetchCoordinator::new(policy),
            selection: ResourceSelection::default(),
            fetch_margin: DEFAULT_FETCH_MARGIN,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    pub fn selection(&self) -> &ResourceSelection {
        &self.selection
    }

    pub fn results(&self) -> &[ResourceItem] {
        self.coordinator.results()
    }

    pub fn tags(&self) -> &[String] {
        self.coordinator.tags()
    }

    pub fn total(&self) -> usize {
        self.coordinator.total()
    }

    pub fn phase(&self) -> FetchPhase {
        self.coordinator.phase()
    }

    /// Switch to a new selection and load its first page.
    ///
    /// Structurally equal selections are suppressed (no reset, no fetch) so
    /// navigation events that did not change any relevant parameter keep the
    /// accumulated results. Returns whether a reset happened.
    pub async fn set_selection(
        &mut self,
        selection: ResourceSelection,
    ) -> Result<bool, ApiError> {
        if selection == self.selection {
            debug!("selection unchanged, keeping current results");
            return Ok(false);
        }
        self.selection = selection;
        self.refresh().await?;
        Ok(true)
    }

    /// Unconditionally restart pagination for the current selection.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        match self.coordinator.reset() {
            Some(request) => self.execute(request).await,
            None => Ok(()),
        }
    }

    /// Load the next page if the coordinator is idle.
    pub async fn fetch_more(&mut self) -> Result<(), ApiError> {
        match self.coordinator.request_more() {
            Some(request) => self.execute(request).await,
            None => Ok(()),
        }
    }

    /// Window-level scroll tick.
    pub async fn on_page_scroll(
        &mut self,
        metrics: PageScrollMetrics,
    ) -> Result<(), ApiError> {
        if page_scroll_should_fetch(metrics, self.fetch_margin) {
            self.fetch_more().await?;
        }
        Ok(())
    }

    /// Scroll tick of a container element that owns its own scrollbar.
    pub async fn on_element_scroll(
        &mut self,
        metrics: ElementScrollMetrics,
    ) -> Result<(), ApiError> {
        if element_scroll_should_fetch(metrics) {
            self.fetch_more().await?;
        }
        Ok(())
    }

    /// Container resize: recompute the grid column count, fetching right away
    /// when extra columns open up space below the fold.
    pub async fn on_resize(&mut self, width: f32) -> Result<(), ApiError> {
        let columns = columns_for_width(width, self.tile_size);
        match self.coordinator.set_columns(columns) {
            Some(request) => self.execute(request).await,
            None => Ok(()),
        }
    }

    /// List-view viewport measurement, feeding first-page sizing. The first
    /// measurement after a deferred reset issues the initial page.
    pub async fn set_viewport_height(
        &mut self,
        viewport_height: f32,
    ) -> Result<(), ApiError> {
        match self.coordinator.set_viewport_height(viewport_height) {
            Some(request) => self.execute(request).await,
            None => Ok(()),
        }
    }

    async fn execute(&mut self, request: PageRequest) -> Result<(), ApiError> {
        let params =
            to_search_params(&self.selection, request.offset, request.limit);
        match self.api.find_resources(params).await {
            Ok(response) => {
                if self.coordinator.apply(&request, response)
                    == ApplyOutcome::Stale
                {
                    debug!(offset = request.offset, "dropped stale page");
                }
                Ok(())
            }
            Err(err) => {
                warn!(offset = request.offset, error = %err, "page fetch failed");
                self.coordinator.fail(&request);
                Err(err)
            }
        }
    }

    // Mutations. All of them hit the server first and only rewrite local
    // state once the round trip succeeded; a failure leaves the accumulated
    // results exactly as they were.

    /// Replace one resource's user metadata.
    pub async fn update_meta(
        &mut self,
        capabilities: Capabilities,
        resource_id: &str,
        meta: UserMeta,
    ) -> Result<bool, ApiError> {
        require_admin(capabilities)?;
        self.api.update_user_meta(resource_id, meta.clone()).await?;
        Ok(self.coordinator.apply_meta(resource_id, meta))
    }

    /// Delete one resource and drop it from the accumulated results.
    pub async fn delete(
        &mut self,
        capabilities: Capabilities,
        resource_id: &str,
    ) -> Result<bool, ApiError> {
        require_admin(capabilities)?;
        self.api.delete_resource(resource_id).await?;
        Ok(self.coordinator.remove(resource_id))
    }

    /// Add/remove tags across a set of resources. Returns how many of the
    /// currently displayed items were affected.
    pub async fn bulk_update_tags(
        &mut self,
        capabilities: Capabilities,
        resource_ids: Vec<String>,
        added: Vec<String>,
        removed: Vec<String>,
    ) -> Result<usize, ApiError> {
        require_admin(capabilities)?;
        self.api
            .bulk_update_tags(resource_ids.clone(), added.clone(), removed.clone())
            .await?;
        Ok(self
            .coordinator
            .apply_bulk_tags(&resource_ids, &added, &removed))
    }
}

fn require_admin(capabilities: Capabilities) -> Result<(), ApiError> {
    if capabilities.admin {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}
