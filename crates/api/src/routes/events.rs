//! Security event query endpoint handlers.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Duration, Utc};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    EventFilter, EventStatsResponse, ListEventsQuery, ListEventsResponse, SecurityEventResponse,
    Severity, SeverityCounts, StatsQuery,
};

/// List persisted security events, newest first.
///
/// GET /api/v1/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    query.validate()?;

    let filter = EventFilter {
        camera_name: query.camera_name,
        severity: query.severity,
        event_type: query.event_type,
        since: None,
        limit: query.limit,
    };

    let page = state.store.list(&filter).await?;

    let events: Vec<SecurityEventResponse> = page
        .events
        .into_iter()
        .map(SecurityEventResponse::from)
        .collect();

    Ok(Json(ListEventsResponse {
        events,
        total: page.total,
    }))
}

/// Summarize persisted events by severity.
///
/// GET /api/v1/events/stats
pub async fn event_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<EventStatsResponse>, ApiError> {
    query.validate()?;

    let since = query
        .since_hours
        .map(|hours| Utc::now() - Duration::hours(i64::from(hours)));

    let mut by_severity = SeverityCounts::default();
    for severity in [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ] {
        let page = state
            .store
            .list(&EventFilter {
                severity: Some(severity),
                since,
                limit: 1,
                ..EventFilter::default()
            })
            .await?;

        match severity {
            Severity::Low => by_severity.low = page.total,
            Severity::Medium => by_severity.medium = page.total,
            Severity::High => by_severity.high = page.total,
            Severity::Critical => by_severity.critical = page.total,
        }
    }

    let total = by_severity.low + by_severity.medium + by_severity.high + by_severity.critical;

    Ok(Json(EventStatsResponse {
        total,
        by_severity,
        since_hours: query.since_hours,
    }))
}
