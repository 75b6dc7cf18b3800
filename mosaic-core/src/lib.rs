//! # Mosaic Core
//!
//! Framework-independent core of the Mosaic media gallery: the pieces every
//! grid or list view shares, factored out of the views themselves.
//!
//! - [`selection`]: translate a URL query string into a normalized
//!   [`mosaic_model::ResourceSelection`] and back into search parameters or an
//!   updated URL.
//! - [`fetch`]: the per-view pagination state machine (Idle / Fetching /
//!   EndReached) with at-most-one-in-flight request coordination and
//!   stale-response rejection.
//! - [`layout`]: grid column derivation from viewport width.
//! - [`trigger`]: scroll and resize predicates deciding when the next page
//!   should be requested.
//!
//! Nothing here performs I/O; the coordinator hands out [`fetch::PageRequest`]
//! values and consumes [`mosaic_model::SearchResponse`] values, leaving the
//! transport to the caller.

pub mod fetch;
pub mod layout;
pub mod selection;
pub mod trigger;

pub use fetch::{
    ApplyOutcome, FetchCoordinator, FetchPhase, PageRequest, PageSizePolicy,
};
pub use layout::{DEFAULT_TILE_SIZE, columns_for_width};
pub use selection::{
    clear_query_param, selection_from_query, selection_from_query_with_prefs,
    set_query_param, to_search_params,
};
pub use trigger::{
    DEFAULT_FETCH_MARGIN, ElementScrollMetrics, PageScrollMetrics,
    element_scroll_should_fetch, page_scroll_should_fetch,
};
