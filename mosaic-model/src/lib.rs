//! Core data model definitions shared across Mosaic crates.

pub mod error;
pub mod prefs;
pub mod resource;
pub mod search;
pub mod selection;
pub mod session;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use prefs::{Columns, Prefs};
pub use resource::{ResourceItem, UserMeta};
pub use search::{SearchParams, SearchResponse};
pub use selection::{
    DurationFilter, ResourceSelection, Sort, SortDirection, SortField,
};
pub use session::Capabilities;
