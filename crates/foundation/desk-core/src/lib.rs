//! desk-core — domain model and in-memory store for the listing
//! review dashboard.
//!
//! Holds the `Listing` record, its moderation status, and the
//! `ListingStore` that the web binary mutates through the review API.
//! This crate is synchronous and lock-free; callers that share a store
//! across tasks wrap it in their own synchronization (desk-web keeps it
//! behind a `tokio::sync::RwLock` inside its `AppState`).

pub mod error;
pub mod listing;
pub mod store;

pub use error::StoreError;
pub use listing::{Listing, ListingStatus, ListingUpdate};
pub use store::ListingStore;
