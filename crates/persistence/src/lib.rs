//! Persistence layer for the Camera Sentinel backend.
//!
//! This crate contains:
//! - The HTTP client for the external document store
//! - Document definitions (wire mappings for stored records)
//! - The document-store implementation of the domain event store

pub mod client;
pub mod documents;
pub mod event_store;

pub use client::{DocumentClient, StoreConfig};
pub use event_store::DocumentEventStore;
