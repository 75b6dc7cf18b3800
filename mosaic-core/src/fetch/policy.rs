//! Page-size policies.
//!
//! The first page is sized from viewport geometry so one screen fills in a
//! single round trip; subsequent pages use a fixed batch independent of the
//! viewport.

/// Fixed batch size for list-view pages after the first.
pub const LIST_BATCH_SIZE: usize = 32;

/// Rows fetched per grid batch; multiplied by the current column count.
pub const GRID_ROWS_PER_BATCH: usize = 8;

/// Row height the list view renders at.
pub const DEFAULT_LIST_ROW_HEIGHT: f32 = 36.0;

/// How many items one page request asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSizePolicy {
    /// List view: first page fills the viewport, later pages use a fixed
    /// batch.
    List {
        viewport_height: f32,
        row_height: f32,
        batch_size: usize,
    },
    /// Grid view: every page is `columns * rows_per_batch` tiles. A column
    /// count of zero (auto layout before the first measurement) yields
    /// zero-sized pages, which are never dispatched.
    Grid {
        columns: usize,
        rows_per_batch: usize,
    },
}

impl PageSizePolicy {
    pub fn list(viewport_height: f32) -> Self {
        PageSizePolicy::List {
            viewport_height,
            row_height: DEFAULT_LIST_ROW_HEIGHT,
            batch_size: LIST_BATCH_SIZE,
        }
    }

    pub fn grid(columns: usize) -> Self {
        PageSizePolicy::Grid {
            columns,
            rows_per_batch: GRID_ROWS_PER_BATCH,
        }
    }

    /// Page size for a request starting at `offset`.
    pub fn page_size(&self, offset: usize) -> usize {
        match *self {
            PageSizePolicy::List {
                viewport_height,
                row_height,
                batch_size,
            } => {
                if offset == 0 {
                    if row_height <= 0.0 {
                        return batch_size;
                    }
                    (viewport_height / row_height).ceil().max(0.0) as usize
                } else {
                    batch_size
                }
            }
            PageSizePolicy::Grid {
                columns,
                rows_per_batch,
            } => columns * rows_per_batch,
        }
    }
}
