//! Frame analysis capability.
//!
//! Abstraction over the detection model that inspects camera frames. The
//! pipeline is constructible with any implementation; production currently
//! ships the inert stub until a real model is wired in.

use serde::Deserialize;
use thiserror::Error;

use crate::models::detection::RawDetection;
use crate::models::zone::SecurityZone;

/// Errors surfaced by a frame analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analyzer backend could not be reached or is not loaded.
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),
    /// Analysis ran but failed on this frame.
    #[error("frame analysis failed: {0}")]
    Inference(String),
}

/// Tuning knobs handed to analyzers at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Minimum confidence a real analyzer reports detections at.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Seconds an object must stay put before it counts as loitering.
    #[serde(default = "default_loitering_threshold_secs")]
    pub loitering_threshold_secs: u64,
}

fn default_confidence_threshold() -> f64 {
    0.7
}

fn default_loitering_threshold_secs() -> u64 {
    30
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            loitering_threshold_secs: default_loitering_threshold_secs(),
        }
    }
}

/// Frame analyzer trait, the boundary to the detection model.
#[async_trait::async_trait]
pub trait FrameAnalyzer: Send + Sync {
    /// Analyzes one frame against the given zones and returns the raw
    /// detections found. An empty list is a normal outcome.
    async fn analyze(
        &self,
        frame: &str,
        zones: &[SecurityZone],
    ) -> Result<Vec<RawDetection>, AnalyzerError>;
}

/// Stub frame analyzer for development and testing.
///
/// Returns a canned detection list (empty by default) without looking at the
/// frame.
#[derive(Debug, Clone, Default)]
pub struct StubAnalyzer {
    config: AnalyzerConfig,
    detections: Vec<RawDetection>,
    simulate_failure: bool,
}

impl StubAnalyzer {
    /// Create the inert stub; never reports detections.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            detections: Vec::new(),
            simulate_failure: false,
        }
    }

    /// Create a stub that reports the given detections for every frame.
    pub fn returning(detections: Vec<RawDetection>) -> Self {
        Self {
            config: AnalyzerConfig::default(),
            detections,
            simulate_failure: false,
        }
    }

    /// Create a stub that fails every analysis.
    pub fn failing() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            detections: Vec::new(),
            simulate_failure: true,
        }
    }
}

#[async_trait::async_trait]
impl FrameAnalyzer for StubAnalyzer {
    async fn analyze(
        &self,
        frame: &str,
        zones: &[SecurityZone],
    ) -> Result<Vec<RawDetection>, AnalyzerError> {
        if self.simulate_failure {
            tracing::warn!(frame = %frame, "Stub analyzer simulating failure");
            return Err(AnalyzerError::Inference("Simulated failure".to_string()));
        }

        tracing::debug!(
            frame = %frame,
            zones = zones.len(),
            detections = self.detections.len(),
            confidence_threshold = self.config.confidence_threshold,
            loitering_threshold_secs = self.config.loitering_threshold_secs,
            "Stub analyzer returning canned detections"
        );

        Ok(self.detections.clone())
    }
}
