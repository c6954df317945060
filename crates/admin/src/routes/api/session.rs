//! Session and navigation state API handlers.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use inventory_pro_core::ItemId;

use crate::middleware::{ExistingClient, RequireIdentity};
use crate::services::SessionSnapshot;
use crate::services::navigation::{NavEntry, Screen, visible_screens};
use crate::state::AppState;

/// Build the session router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/session", get(session))
        .route("/api/navigation", get(navigation))
}

/// Current session snapshot; empty for browsers without a client context.
///
/// GET /api/session
pub async fn session(ExistingClient(client): ExistingClient) -> Json<SessionSnapshot> {
    Json(client.map(|client| client.snapshot()).unwrap_or_default())
}

/// Response for the navigation state.
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub active_screen: Screen,
    pub edit_target: Option<ItemId>,
    pub screens: Vec<NavEntry>,
}

/// Active screen and the entries visible to the signed-in role.
///
/// GET /api/navigation
pub async fn navigation(auth: RequireIdentity) -> Json<NavigationResponse> {
    let mut state = auth.client.navigation();
    state.enforce_role(auth.identity.role);

    Json(NavigationResponse {
        active_screen: state.screen(),
        edit_target: state.edit_target().map(|item| item.id),
        screens: visible_screens(auth.identity.role),
    })
}
