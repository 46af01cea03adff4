//! Event ingestion pipeline: analyze a frame, classify each detection, and
//! persist the resulting security events.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use validator::Validate;

use crate::models::detection::RawDetection;
use crate::models::event::SecurityEvent;
use crate::models::zone::SecurityZone;
use crate::services::analyzer::{AnalyzerError, FrameAnalyzer};
use crate::services::classifier;
use crate::services::event_store::{EventStore, StoreError};

/// Errors surfaced by the ingestion pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request could not be interpreted; nothing was analyzed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The analyzer failed; nothing was persisted.
    #[error(transparent)]
    Analysis(#[from] AnalyzerError),
    /// A persistence call failed; earlier events of the same invocation
    /// remain written.
    #[error(transparent)]
    Persistence(#[from] StoreError),
    /// Detection details could not be encoded for storage.
    #[error("failed to encode detection details: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Validated input for one pipeline invocation.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    pub frame: String,
    pub camera_name: String,
    pub timestamp: DateTime<Utc>,
    pub zones: Vec<SecurityZone>,
}

/// Orchestrates one frame-analysis invocation: analyze, classify, persist.
///
/// Stateless across invocations and safe to share; both collaborators are
/// injected.
pub struct EventIngestionPipeline {
    analyzer: Arc<dyn FrameAnalyzer>,
    store: Arc<dyn EventStore>,
}

impl EventIngestionPipeline {
    pub fn new(analyzer: Arc<dyn FrameAnalyzer>, store: Arc<dyn EventStore>) -> Self {
        Self { analyzer, store }
    }

    /// Runs the pipeline for one request and returns the detections found.
    ///
    /// Analyzer output is validated up front; one invalid detection fails the
    /// whole invocation before anything is written. Persistence is sequential
    /// and aborts on the first failed write; events already written in this
    /// invocation stay in the store while the invocation itself reports
    /// failure.
    pub async fn handle(
        &self,
        request: &IngestionRequest,
    ) -> Result<Vec<RawDetection>, PipelineError> {
        let detections = self
            .analyzer
            .analyze(&request.frame, &request.zones)
            .await?;

        for detection in &detections {
            detection
                .validate()
                .map_err(|e| AnalyzerError::Inference(format!("invalid detection: {}", e)))?;
        }

        if detections.is_empty() {
            tracing::debug!(camera = %request.camera_name, "No detections in frame");
            return Ok(detections);
        }

        tracing::info!(
            camera = %request.camera_name,
            count = detections.len(),
            "Persisting security events"
        );

        for detection in &detections {
            let severity = classifier::classify(detection);
            let event = SecurityEvent::from_detection(
                detection,
                &request.camera_name,
                request.timestamp,
                severity,
            )?;

            if let Err(err) = self.store.create(&event).await {
                tracing::error!(
                    camera = %request.camera_name,
                    event_type = %event.event_type,
                    severity = %severity,
                    error = %err,
                    "Failed to persist security event, aborting invocation"
                );
                return Err(err.into());
            }

            tracing::debug!(
                event_id = %event.id,
                event_type = %event.event_type,
                severity = %severity,
                "Security event persisted"
            );
        }

        Ok(detections)
    }
}
