//! Root view.
//!
//! One page renders whatever the client's state calls for: the loading
//! screen while a sign-in is in flight, the sign-in screen without an
//! identity (or without a client context at all), or the chrome around the
//! active screen.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::{CurrentTheme, ExistingClient};
use crate::routes::auth::{LoadingTemplate, SignInTemplate};
use crate::routes::catalog::CatalogQuery;
use crate::routes::{catalog, dashboard, editor};
use crate::services::navigation::{NavigationState, View, resolve_view};
use crate::state::AppState;

/// Render the root view.
///
/// GET /
///
/// # Errors
///
/// Returns `AppError::Catalog` if the active screen needs the catalog and it
/// cannot be read.
#[instrument(skip(client, theme, state, uri))]
pub async fn index(
    ExistingClient(client): ExistingClient,
    CurrentTheme(theme): CurrentTheme,
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
    uri: Uri,
) -> Result<Response, AppError> {
    let theme = theme.theme();
    let return_to = uri
        .path_and_query()
        .map_or("/", |path_and_query| path_and_query.as_str());

    let view = client.map_or(View::SignIn, |client| {
        resolve_view(&client.snapshot(), &client.navigation())
    });

    let response = match view {
        View::Loading => LoadingTemplate { theme }.into_response(),
        View::SignIn => SignInTemplate::new(theme).into_response(),
        View::Screen {
            identity,
            state: navigation,
        } => match navigation {
            NavigationState::Overview => {
                dashboard::page(&state, &identity, theme, return_to)?.into_response()
            }
            NavigationState::Catalog => {
                catalog::page(&state, &identity, theme, &query, return_to)?.into_response()
            }
            NavigationState::ItemEditor { target } => {
                editor::page(&identity, theme, target.as_ref(), return_to).into_response()
            }
        },
    };

    Ok(response)
}
