//! Theme toggle route.

use axum::{
    Form, Router,
    http::{HeaderValue, header, uri::PathAndQuery},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    routing::post,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::CurrentTheme;
use crate::state::AppState;

/// Build the theme router.
pub fn router() -> Router<AppState> {
    Router::new().route("/theme/toggle", post(toggle))
}

/// Theme toggle form.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub return_to: Option<String>,
}

/// Flip the theme and store it in a long-lived cookie.
///
/// POST /theme/toggle
///
/// # Errors
///
/// Returns `AppError::Preference` if the cookie cannot be written.
#[instrument(skip(store))]
pub async fn toggle(
    CurrentTheme(mut store): CurrentTheme,
    Form(form): Form<ToggleForm>,
) -> Result<Response, AppError> {
    let target = safe_return_path(form.return_to.as_deref());
    let theme = store.toggle()?;
    tracing::debug!(%theme, "Theme toggled");

    let cookies = store
        .into_preferences()
        .into_set_cookie_headers()?
        .into_iter()
        .map(|value| (header::SET_COOKIE, value));

    Ok((AppendHeaders(cookies), Redirect::to(target)).into_response())
}

/// Only same-origin absolute paths that are valid as a `Location` header
/// are followed; anything else goes to `/`.
fn safe_return_path(raw: Option<&str>) -> &str {
    raw.filter(|path| {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path.contains('\\')
            && !path.chars().any(char::is_control)
            && path.parse::<PathAndQuery>().is_ok()
            && HeaderValue::from_str(path).is_ok()
    })
    .unwrap_or("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/?q=cable")), "/?q=cable");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_path(None), "/");
    }

    #[test]
    fn test_safe_return_path_rejects_control_characters() {
        assert_eq!(safe_return_path(Some("/ok\nX-Injected: 1")), "/");
        assert_eq!(safe_return_path(Some("/ok\r\n")), "/");
        assert_eq!(safe_return_path(Some("/tab\there")), "/");
        assert_eq!(safe_return_path(Some("/\u{7f}")), "/");
        assert_eq!(safe_return_path(Some("/?q=usb&category=Cables")), "/?q=usb&category=Cables");
    }
}
