//! HTTP route handlers.

pub mod detections;
pub mod events;
pub mod health;
pub mod zones;
