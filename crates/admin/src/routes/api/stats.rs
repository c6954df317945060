//! Overview statistics API handler.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::RequireManager;
use crate::services::dashboard::{
    Activity, DashboardStats, RECENT_ACTIVITY, TOP_ITEMS, TopItem, top_items,
};
use crate::state::AppState;

/// Build the stats router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(stats))
}

/// Response for the overview statistics.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub recent_activity: Vec<Activity>,
    pub top_items: Vec<TopItem>,
}

/// Overview statistics; managers only.
///
/// GET /api/stats
///
/// # Errors
///
/// Returns `AppError::Catalog` if the catalog cannot be listed.
#[instrument(skip(manager, state), fields(user_id = %manager.0.id))]
pub async fn stats(
    manager: RequireManager,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let items = state.catalog().list()?;

    Ok(Json(StatsResponse {
        stats: DashboardStats::compute(&items),
        recent_activity: RECENT_ACTIVITY.to_vec(),
        top_items: top_items(&items, TOP_ITEMS),
    }))
}
