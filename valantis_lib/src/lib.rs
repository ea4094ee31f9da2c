//! Orchestration layer for the Valantis catalog client.
//!
//! Wraps the `valantis_api` crate with the catalog store state machine,
//! result-set deduplication, and pagination over the current result set.

pub mod dedup;
pub mod error;
pub mod paginator;
pub mod store;

pub use valantis_api;
pub use valantis_api::types;
pub use valantis_api::{Client, FilterQuery};

pub use dedup::dedupe;
pub use error::CatalogError;
pub use paginator::{page_view, PageView, PAGE_SIZE};
pub use store::{CatalogStore, FilterField, Status};
