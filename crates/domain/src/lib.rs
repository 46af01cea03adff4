//! Domain layer for the Camera Sentinel backend.
//!
//! This crate contains:
//! - Domain models (SecurityZone, RawDetection, SecurityEvent)
//! - Business logic services (authorization, classification, ingestion)
//! - Domain error types

pub mod models;
pub mod services;
