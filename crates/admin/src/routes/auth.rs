//! Authentication route handlers.
//!
//! Sign-in runs the credential check on its own task so a dropped request
//! cannot cut it short; the session store clears `pending` either way.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{Client, CurrentTheme, ExistingClient};
use crate::routes::back_home;
use crate::services::SessionError;
use crate::services::auth::{DEMO_KEEPER_EMAIL, DEMO_MANAGER_EMAIL, DEMO_SECRET};
use crate::services::theme::Theme;
use crate::state::AppState;

/// Message shown for rejected credentials.
pub const REJECTED_MESSAGE: &str = "Invalid credentials. Try: manager@inventory.com or \
     keeper@inventory.com with password: password123";

/// Message shown when the credential service failed.
pub const UNAVAILABLE_MESSAGE: &str =
    "The sign-in service is unavailable right now. Please try again shortly.";

/// Message shown when a sign-in is already running for this browser.
pub const IN_FLIGHT_MESSAGE: &str = "A sign-in is already in progress.";

/// Sign-in screen template.
#[derive(Template, WebTemplate)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub theme: Theme,
    pub email: String,
    pub error: Option<&'static str>,
    pub unavailable: bool,
    pub in_flight: bool,
    pub demo_manager: &'static str,
    pub demo_keeper: &'static str,
    pub demo_secret: &'static str,
}

impl SignInTemplate {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self {
            theme,
            email: String::new(),
            error: None,
            unavailable: false,
            in_flight: false,
            demo_manager: DEMO_MANAGER_EMAIL,
            demo_keeper: DEMO_KEEPER_EMAIL,
            demo_secret: DEMO_SECRET,
        }
    }

    #[must_use]
    fn with_error(mut self, email: String, error: &'static str) -> Self {
        self.email = email;
        self.error = Some(error);
        self
    }
}

/// Shown while a credential check is in flight; reloads itself.
#[derive(Template, WebTemplate)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub theme: Theme,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Sign-in form.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Check credentials and sign in.
///
/// POST /auth/login
///
/// # Errors
///
/// Returns `AppError::Internal` if the login task panicked.
#[instrument(skip(client, theme, form), fields(client = %client.id()))]
pub async fn login(
    Client(client): Client,
    CurrentTheme(theme): CurrentTheme,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = form.email.trim().to_string();
    let secret = SecretString::from(form.password);
    let theme = theme.theme();

    let task = tokio::spawn({
        let client = Arc::clone(&client);
        let email = email.clone();
        async move { client.login(&email, &secret).await }
    });
    let outcome = task
        .await
        .map_err(|e| AppError::Internal(format!("login task failed: {e}")))?;

    match outcome {
        Ok(true) => {
            if let Some(identity) = client.session().identity() {
                set_sentry_user(identity.id.as_i32(), Some(identity.email.as_str()));
                tracing::info!(user_id = %identity.id, role = %identity.role, "Signed in");
            }
            Ok(back_home())
        }
        Ok(false) => {
            tracing::info!("Credentials rejected");
            let page = SignInTemplate::new(theme).with_error(email, REJECTED_MESSAGE);
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
        Err(SessionError::LoginInFlight) => {
            tracing::info!("Sign-in already in flight");
            let mut page = SignInTemplate::new(theme).with_error(email, IN_FLIGHT_MESSAGE);
            page.in_flight = true;
            Ok((StatusCode::CONFLICT, page).into_response())
        }
        Err(SessionError::Verifier(e)) => {
            tracing::warn!(error = %e, "Credential service unavailable");
            let mut page = SignInTemplate::new(theme).with_error(email, UNAVAILABLE_MESSAGE);
            page.unavailable = true;
            Ok((StatusCode::SERVICE_UNAVAILABLE, page).into_response())
        }
    }
}

/// Sign out.
///
/// POST /auth/logout
#[instrument(skip(client))]
pub async fn logout(ExistingClient(client): ExistingClient) -> Response {
    if let Some(client) = client {
        client.logout();
        clear_sentry_user();
        tracing::info!(client = %client.id(), "Signed out");
    }
    back_home()
}
