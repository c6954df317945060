//! JSON API handlers for the admin panel.

pub mod session;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(session::router())
        .merge(stats::router())
}
