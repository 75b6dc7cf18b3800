//! # Mosaic Client
//!
//! The asynchronous boundary of the Mosaic gallery: a reqwest-based
//! [`ApiClient`] for the resource search and mutation endpoints, and the
//! [`GalleryFeed`] driver that pairs a [`mosaic_core::FetchCoordinator`] with
//! an API handle to actually load pages.
//!
//! Capability checks are explicit: mutation helpers take a
//! [`mosaic_model::Capabilities`] value instead of consulting any ambient
//! session state.

pub mod api;
pub mod config;
pub mod error;
pub mod feed;

pub use api::{ApiClient, AuthToken, ResourceApi};
pub use config::ClientConfig;
pub use error::ApiError;
pub use feed::GalleryFeed;
