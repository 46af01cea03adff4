//! Shared utilities for the Camera Sentinel backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic for request payloads

pub mod validation;
