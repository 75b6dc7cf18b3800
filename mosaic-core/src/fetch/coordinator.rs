//! The per-view pagination state machine.

use mosaic_model::{ResourceItem, SearchResponse, UserMeta};
use tracing::debug;

use super::policy::PageSizePolicy;
use super::results::PageState;

/// Where the coordinator sits between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No request in flight; more results may exist.
    Idle,
    /// One request in flight; further trigger events are ignored.
    Fetching,
    /// Every result for the current selection has been loaded.
    EndReached,
}

/// A page the coordinator wants fetched.
///
/// Carries the generation it was issued for; a response is only applied when
/// its request's generation still matches, so pages belonging to a superseded
/// selection are discarded instead of leaking into the new result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub offset: usize,
    pub limit: usize,
}

/// What applying a response did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Results were appended; `end_reached` reports the resulting phase.
    Appended { appended: usize, end_reached: bool },
    /// The response belonged to a superseded selection (or a request that was
    /// no longer outstanding) and was dropped.
    Stale,
}

/// State machine governing when the next page of one view is requested.
///
/// Owned exclusively by a single view instance; the transitions are pure and
/// the only asynchronous boundary (the fetch itself) lives with the caller.
#[derive(Debug)]
pub struct FetchCoordinator {
    policy: PageSizePolicy,
    state: PageState,
    phase: FetchPhase,
    generation: u64,
}

impl FetchCoordinator {
    pub fn new(policy: PageSizePolicy) -> Self {
        Self {
            policy,
            state: PageState::default(),
            phase: FetchPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        self.phase == FetchPhase::Fetching
    }

    pub fn is_end_reached(&self) -> bool {
        self.phase == FetchPhase::EndReached
    }

    pub fn results(&self) -> &[ResourceItem] {
        self.state.results()
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    pub fn tags(&self) -> &[String] {
        self.state.tags()
    }

    pub fn offset(&self) -> usize {
        self.state.offset()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policy(&self) -> PageSizePolicy {
        self.policy
    }

    /// Start over for a new selection: clears accumulated results and issues
    /// the initial page request.
    ///
    /// Returns `None` only when the policy currently sizes pages at zero
    /// (grid auto-layout before the first width measurement); the initial
    /// request is then issued by the first [`set_columns`] call instead.
    ///
    /// [`set_columns`]: FetchCoordinator::set_columns
    pub fn reset(&mut self) -> Option<PageRequest> {
        self.generation += 1;
        self.state.clear();
        let limit = self.policy.page_size(0);
        if limit == 0 {
            self.phase = FetchPhase::Idle;
            debug!(
                generation = self.generation,
                "reset with zero page size, waiting for layout"
            );
            return None;
        }
        self.phase = FetchPhase::Fetching;
        Some(PageRequest {
            generation: self.generation,
            offset: 0,
            limit,
        })
    }

    /// Ask for the next page. No-op unless Idle: while Fetching this is how
    /// duplicate in-flight requests are prevented, and after EndReached there
    /// is nothing left to ask for.
    pub fn request_more(&mut self) -> Option<PageRequest> {
        if self.phase != FetchPhase::Idle {
            return None;
        }
        let offset = self.state.offset();
        let limit = self.policy.page_size(offset);
        if limit == 0 {
            return None;
        }
        self.phase = FetchPhase::Fetching;
        Some(PageRequest {
            generation: self.generation,
            offset,
            limit,
        })
    }

    /// Update the grid column count after a container resize.
    ///
    /// An increase can reveal empty tiles below the fold that were previously
    /// under the fetch threshold, so it immediately attempts another page
    /// (still subject to the Idle guard).
    pub fn set_columns(&mut self, columns: usize) -> Option<PageRequest> {
        let PageSizePolicy::Grid {
            columns: current,
            rows_per_batch,
        } = self.policy
        else {
            return None;
        };
        if columns == current {
            return None;
        }
        self.policy = PageSizePolicy::Grid {
            columns,
            rows_per_batch,
        };
        if columns > current && !self.is_end_reached() {
            return self.request_more();
        }
        None
    }

    /// Update the viewport height used to size a list view's first page.
    ///
    /// When the first page was deferred because the viewport had no height
    /// yet (zero-size page at reset), the first real measurement issues it
    /// here, like [`set_columns`] does for the unmeasured grid. Resizes after
    /// results exist never fetch.
    ///
    /// [`set_columns`]: FetchCoordinator::set_columns
    pub fn set_viewport_height(
        &mut self,
        viewport_height: f32,
    ) -> Option<PageRequest> {
        let PageSizePolicy::List {
            row_height,
            batch_size,
            ..
        } = self.policy
        else {
            return None;
        };
        self.policy = PageSizePolicy::List {
            viewport_height,
            row_height,
            batch_size,
        };
        if self.state.offset() == 0 && !self.is_end_reached() {
            return self.request_more();
        }
        None
    }

    /// Apply a page response for a previously issued request.
    ///
    /// Responses from a superseded generation are discarded. An empty page
    /// while the server still reports more results returns the coordinator to
    /// Idle (transient inconsistency, retried on the next trigger event); a
    /// non-empty short page ends pagination even when the reported total
    /// claims otherwise, since that total may already be stale.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        response: SearchResponse,
    ) -> ApplyOutcome {
        if request.generation != self.generation
            || self.phase != FetchPhase::Fetching
        {
            debug!(
                request_generation = request.generation,
                current_generation = self.generation,
                phase = ?self.phase,
                "discarding stale page response"
            );
            return ApplyOutcome::Stale;
        }

        let total = response.total;
        let appended =
            self.state.append(response.results, total, response.tags);

        let exhausted = self.state.offset() >= total;
        let short_page = appended > 0 && appended < request.limit;
        let end_reached = exhausted || short_page;

        self.phase = if end_reached {
            FetchPhase::EndReached
        } else {
            FetchPhase::Idle
        };

        debug!(
            offset = self.state.offset(),
            total,
            appended,
            end_reached,
            "applied page response"
        );

        ApplyOutcome::Appended {
            appended,
            end_reached,
        }
    }

    /// Record a failed fetch: back to Idle so the next scroll or resize event
    /// retries, accumulated results untouched.
    pub fn fail(&mut self, request: &PageRequest) {
        if request.generation == self.generation
            && self.phase == FetchPhase::Fetching
        {
            self.phase = FetchPhase::Idle;
        }
    }

    // Local mutations, applied by callers after a successful round trip.

    pub fn apply_meta(&mut self, resource_id: &str, meta: UserMeta) -> bool {
        self.state.apply_meta(resource_id, meta)
    }

    pub fn apply_bulk_tags(
        &mut self,
        resource_ids: &[String],
        added: &[String],
        removed: &[String],
    ) -> usize {
        self.state.apply_bulk_tags(resource_ids, added, removed)
    }

    pub fn remove(&mut self, resource_id: &str) -> bool {
        self.state.remove(resource_id)
    }
}
