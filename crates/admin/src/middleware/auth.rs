//! Client context and authentication extractors.
//!
//! Handlers never look up per-browser state themselves: they receive the
//! client context, identity or theme through the extractors below.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use uuid::Uuid;

use inventory_pro_core::{Identity, Role};

use crate::error::AppError;
use crate::models::session::keys;
use crate::services::{ClientContext, CookiePreferences, ThemeStore};
use crate::state::AppState;

/// Extractor for the client context of the requesting browser, creating
/// one if the browser has none.
///
/// Only sign-in uses this; every other handler looks contexts up with
/// [`ExistingClient`] so anonymous traffic never adds registry entries.
pub struct Client(pub Arc<ClientContext>);

impl FromRequestParts<AppState> for Client {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = request_session(parts)?;

        let id = match session.get::<Uuid>(keys::CLIENT_ID).await? {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                session.insert(keys::CLIENT_ID, id).await?;
                id
            }
        };

        Ok(Self(state.clients().get_or_create(id).await))
    }
}

/// Extractor for the client context of the requesting browser, if it has
/// one. Never writes to the session or the registry.
pub struct ExistingClient(pub Option<Arc<ClientContext>>);

impl FromRequestParts<AppState> for ExistingClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = request_session(parts)?;

        let client = match session.get::<Uuid>(keys::CLIENT_ID).await? {
            Some(id) => state.clients().get(id).await,
            None => None,
        };

        Ok(Self(client))
    }
}

// Set by SessionManagerLayer
fn request_session(parts: &Parts) -> Result<&Session, AppError> {
    parts
        .extensions
        .get::<Session>()
        .ok_or_else(|| AppError::Internal("session layer missing".to_string()))
}

/// Extractor that requires a signed-in identity.
///
/// Without one, HTML requests are redirected to the root view (which shows
/// the sign-in screen) and API requests get 401 Unauthorized.
pub struct RequireIdentity {
    pub client: Arc<ClientContext>,
    pub identity: Identity,
}

/// Error returned when an identity or role is required.
#[derive(Debug)]
pub enum IdentityRejection {
    /// Redirect to the sign-in screen (for HTML requests).
    RedirectToSignIn,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// Signed in, but the role may not use this resource.
    Forbidden,
    /// The client context could not be resolved.
    Failed(AppError),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToSignIn => Redirect::to("/").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Only managers can access this resource",
            )
                .into_response(),
            Self::Failed(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireIdentity {
    type Rejection = IdentityRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ExistingClient(client) = ExistingClient::from_request_parts(parts, state)
            .await
            .map_err(IdentityRejection::Failed)?;

        let signed_in = client.and_then(|client| {
            let identity = client.session().identity()?;
            Some((client, identity))
        });

        match signed_in {
            Some((client, identity)) => Ok(Self { client, identity }),
            None if parts.uri.path().starts_with("/api/") => Err(IdentityRejection::Unauthorized),
            None => Err(IdentityRejection::RedirectToSignIn),
        }
    }
}

/// Extractor that requires a signed-in manager.
///
/// Unauthenticated requests are rejected as for [`RequireIdentity`]; other
/// roles get 403 Forbidden.
pub struct RequireManager(pub Identity);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = IdentityRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireIdentity { identity, .. } =
            RequireIdentity::from_request_parts(parts, state).await?;

        if identity.role != Role::Manager {
            return Err(IdentityRejection::Forbidden);
        }

        Ok(Self(identity))
    }
}

/// Extractor for the theme preference stored in the request's cookies.
pub struct CurrentTheme(pub ThemeStore<CookiePreferences>);

impl FromRequestParts<AppState> for CurrentTheme {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let prefs = CookiePreferences::from_headers(&parts.headers, state.config().is_secure());
        Ok(Self(ThemeStore::init(prefs)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AdminConfig;
    use crate::middleware::create_session_layer;

    async fn whoami(RequireIdentity { identity, .. }: RequireIdentity) -> String {
        identity.name
    }

    async fn stats(RequireManager(identity): RequireManager) -> String {
        identity.name
    }

    async fn theme(CurrentTheme(theme): CurrentTheme) -> String {
        theme.theme().to_string()
    }

    fn app() -> Router {
        app_with(AppState::init(AdminConfig::default()))
    }

    fn app_with(state: AppState) -> Router {
        let layer = create_session_layer(state.sessions().clone(), state.config());
        Router::new()
            .route("/whoami", get(whoami))
            .route("/api/stats", get(stats))
            .route("/theme", get(theme))
            .with_state(state)
            .layer(layer)
    }

    #[tokio::test]
    async fn test_anonymous_html_redirects() {
        let response = app()
            .oneshot(Request::get("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }

    #[tokio::test]
    async fn test_anonymous_requests_create_no_client() {
        let state = AppState::init(AdminConfig::default());
        let app = app_with(state.clone());

        for path in ["/whoami", "/api/stats", "/whoami"] {
            let response = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert!(response.headers().get("set-cookie").is_none());
        }
        assert_eq!(state.clients().live_count().await, 0);
        assert!(state.sessions().is_empty().await);
    }

    #[tokio::test]
    async fn test_anonymous_api_unauthorized() {
        let response = app()
            .oneshot(Request::get("/api/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_theme_from_cookie() {
        let response = app()
            .oneshot(
                Request::get("/theme")
                    .header("cookie", "inventory_theme=dark")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"dark");
    }
}
