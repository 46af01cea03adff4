//! Domain services for Camera Sentinel.
//!
//! Services contain business logic that operates on domain models.

pub mod analyzer;
pub mod authorization;
pub mod classifier;
pub mod event_store;
pub mod ingestion;

pub use analyzer::{AnalyzerConfig, AnalyzerError, FrameAnalyzer, StubAnalyzer};
pub use authorization::is_authorized_time;
pub use classifier::classify;
pub use event_store::{EventStore, MemoryEventStore, StoreError};
pub use ingestion::{EventIngestionPipeline, IngestionRequest, PipelineError};
