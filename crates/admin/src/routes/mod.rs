//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! # Root view
//! GET  /                       - Loading, sign-in, or chrome + active screen
//!                                (catalog filters: ?q=&category=)
//!
//! # Auth
//! POST /auth/login             - Check credentials (single-flight)
//! POST /auth/logout            - Sign out
//!
//! # Navigation
//! POST /navigate               - Follow a navigation bar entry
//! POST /catalog/new            - Open the editor for a new item
//! POST /catalog/{id}/edit      - Open the editor for an existing item
//! POST /editor/save            - Validate and save the editor form
//! POST /editor/cancel          - Leave the editor
//!
//! # Preferences
//! POST /theme/toggle           - Flip light/dark theme
//!
//! # API
//! GET  /api/session            - Session snapshot
//! GET  /api/navigation         - Active screen and visible entries
//! GET  /api/stats              - Overview statistics (managers only)
//! ```
//!
//! Every mutating route redirects back to `/`.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod editor;
pub mod home;
pub mod navigation;
pub mod theme;

use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::state::AppState;

/// Build the complete page and API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .merge(auth::router())
        .merge(navigation::router())
        .merge(catalog::router())
        .merge(editor::router())
        .merge(theme::router())
        .merge(api::router())
}

/// Redirect back to the root view after a state change.
pub(crate) fn back_home() -> Response {
    Redirect::to("/").into_response()
}
