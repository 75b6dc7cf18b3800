//! Paginated fetch coordination.
//!
//! One [`FetchCoordinator`] is owned by one view instance. It hands out
//! [`PageRequest`] values describing the next page to load and consumes the
//! responses, enforcing the two correctness properties every gallery view
//! relies on: at most one request in flight at a time, and responses from a
//! superseded selection are never appended to the current result list.

mod coordinator;
mod policy;
mod results;

pub use coordinator::{
    ApplyOutcome, FetchCoordinator, FetchPhase, PageRequest,
};
pub use policy::{
    DEFAULT_LIST_ROW_HEIGHT, GRID_ROWS_PER_BATCH, LIST_BATCH_SIZE,
    PageSizePolicy,
};
pub use results::PageState;
