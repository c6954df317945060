//! Item editor screen.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::instrument;

use inventory_pro_core::{Identity, Item};

use crate::components::Chrome;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{CurrentTheme, RequireIdentity};
use crate::models::{FieldErrors, ItemForm};
use crate::routes::back_home;
use crate::routes::catalog::CategoryOption;
use crate::services::catalog::EDITOR_CATEGORIES;
use crate::services::navigation::{NavigationState, Screen};
use crate::services::theme::Theme;
use crate::state::AppState;

/// Item editor template.
#[derive(Template, WebTemplate)]
#[template(path = "item_editor.html")]
pub struct ItemEditorTemplate {
    pub chrome: Chrome,
    pub theme: Theme,
    pub editing: bool,
    pub form: ItemForm,
    pub errors: FieldErrors,
    pub categories: Vec<CategoryOption>,
}

/// Build the editor screen, prefilled from `target` when editing.
#[must_use]
pub fn page(
    identity: &Identity,
    theme: Theme,
    target: Option<&Item>,
    return_to: &str,
) -> ItemEditorTemplate {
    let form = target.map(ItemForm::from_item).unwrap_or_default();
    ItemEditorTemplate {
        chrome: Chrome::new(identity, Screen::ItemEditor, theme, return_to),
        theme,
        editing: target.is_some(),
        categories: category_choices(&form.category),
        form,
        errors: FieldErrors::default(),
    }
}

fn category_choices(selected: &str) -> Vec<CategoryOption> {
    EDITOR_CATEGORIES
        .iter()
        .map(|category| CategoryOption {
            value: (*category).to_string(),
            label: (*category).to_string(),
            selected: *category == selected,
        })
        .collect()
}

/// Build the editor router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/editor/save", post(save))
        .route("/editor/cancel", post(cancel))
}

/// Validate and save the editor form.
///
/// POST /editor/save
///
/// Invalid input re-renders the editor with 422 and per-field messages.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the catalog rejects the save.
#[instrument(skip(auth, theme, state, form), fields(client = %auth.client.id()))]
pub async fn save(
    auth: RequireIdentity,
    CurrentTheme(theme): CurrentTheme,
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    let NavigationState::ItemEditor { target } = auth.client.navigation() else {
        tracing::debug!("Save outside the editor ignored");
        return Ok(back_home());
    };

    match form.validate() {
        Ok(draft) => {
            state.catalog().save(target.as_ref().map(|item| item.id), &draft)?;
            auth.client.navigate(|nav, _| nav.finish_editing());
            Ok(back_home())
        }
        Err(errors) => {
            tracing::debug!(?errors, "Item form rejected");
            let page = ItemEditorTemplate {
                categories: category_choices(&form.category),
                form,
                errors,
                ..page(&auth.identity, theme.theme(), target.as_ref(), "/")
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
    }
}

/// Leave the editor without saving.
///
/// POST /editor/cancel
#[instrument(skip(auth), fields(client = %auth.client.id()))]
pub async fn cancel(auth: RequireIdentity) -> Response {
    auth.client.navigate(|nav, _| {
        if nav.screen() == Screen::ItemEditor {
            nav.finish_editing();
        }
    });
    back_home()
}
