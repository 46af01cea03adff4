//! Zone status endpoint handlers.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::app::AppState;
use domain::models::SecurityZone;
use domain::services::is_authorized_time;

/// A configured zone plus whether it is enforced right now.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStatusResponse {
    #[serde(flatten)]
    pub zone: SecurityZone,
    pub currently_active: bool,
}

/// Response for the zone listing.
#[derive(Debug, Clone, Serialize)]
pub struct ListZonesResponse {
    pub zones: Vec<ZoneStatusResponse>,
    pub total: usize,
}

/// List the configured default zones with their live enforcement status.
///
/// GET /api/v1/zones
pub async fn list_zones(State(state): State<AppState>) -> Json<ListZonesResponse> {
    let now = Utc::now();

    let zones: Vec<ZoneStatusResponse> = state
        .zones
        .iter()
        .map(|zone| ZoneStatusResponse {
            currently_active: zone.enabled && is_authorized_time(zone, now),
            zone: zone.clone(),
        })
        .collect();

    let total = zones.len();
    Json(ListZonesResponse { zones, total })
}
