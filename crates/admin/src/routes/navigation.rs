//! Navigation bar route.

use axum::{Form, Router, response::Response, routing::post};
use serde::Deserialize;
use tracing::instrument;

use crate::middleware::RequireIdentity;
use crate::routes::back_home;
use crate::state::AppState;

/// Build the navigation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/navigate", post(navigate))
}

/// Navigation form.
#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    #[serde(default)]
    pub screen: String,
}

/// Follow a navigation bar entry.
///
/// POST /navigate
///
/// Unknown screens land on the role's default screen.
#[instrument(skip(auth), fields(client = %auth.client.id()))]
pub async fn navigate(auth: RequireIdentity, Form(form): Form<NavigateForm>) -> Response {
    auth.client
        .navigate(|nav, role| nav.select_raw(&form.screen, role));
    back_home()
}
