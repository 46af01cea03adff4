//! Domain models for Camera Sentinel.

pub mod analysis;
pub mod detection;
pub mod event;
pub mod zone;

pub use analysis::{AnalyzeFrameRequest, AnalyzeFrameResponse};
pub use detection::{Direction, EventDetails, Position, RawDetection, SecurityEventType};
pub use event::{
    EventFilter, EventPage, EventStatsResponse, ListEventsQuery, ListEventsResponse,
    SecurityEvent, SecurityEventResponse, Severity, SeverityCounts, StatsQuery,
};
pub use zone::{ActiveHours, SecurityZone, ZoneCoordinates, ZoneType};
