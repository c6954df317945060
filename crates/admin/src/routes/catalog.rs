//! Catalog screen and the routes that open the editor from it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::Response,
    routing::post,
};
use serde::Deserialize;
use tracing::instrument;

use inventory_pro_core::{Identity, Item, ItemId, StockStatus};

use crate::components::Chrome;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireIdentity;
use crate::routes::back_home;
use crate::services::catalog::{ALL_CATEGORIES, CatalogFilter, category_options};
use crate::services::navigation::Screen;
use crate::services::theme::Theme;
use crate::state::AppState;

/// Catalog query string.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Item card for templates.
#[derive(Debug, Clone)]
pub struct ItemCardView {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub quantity: u32,
    pub total_value: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<&Item> for ItemCardView {
    fn from(item: &Item) -> Self {
        let status = item.stock_status();
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            price: item.unit_price.to_string(),
            quantity: item.quantity,
            total_value: item.stock_value().to_string(),
            status_label: status.label(),
            status_class: match status {
                StockStatus::OutOfStock => "out",
                StockStatus::LowStock => "low",
                StockStatus::InStock => "ok",
            },
        }
    }
}

/// Category `<option>` for templates.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Catalog template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub chrome: Chrome,
    pub theme: Theme,
    pub query: String,
    pub categories: Vec<CategoryOption>,
    pub items: Vec<ItemCardView>,
    pub total: usize,
}

/// Build the catalog screen.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the catalog cannot be listed.
pub fn page(
    state: &AppState,
    identity: &Identity,
    theme: Theme,
    query: &CatalogQuery,
    return_to: &str,
) -> Result<CatalogTemplate, AppError> {
    let all = state.catalog().list()?;
    let filter = CatalogFilter::new(query.q.as_deref(), query.category.as_deref());
    let selected = filter.category.as_deref().unwrap_or(ALL_CATEGORIES);

    let categories = category_options(&all)
        .into_iter()
        .map(|value| CategoryOption {
            label: if value == ALL_CATEGORIES {
                "All Categories".to_string()
            } else {
                value.clone()
            },
            selected: value == selected,
            value,
        })
        .collect();

    Ok(CatalogTemplate {
        chrome: Chrome::new(identity, Screen::Catalog, theme, return_to),
        theme,
        query: filter.text.clone(),
        categories,
        items: filter.apply(&all).into_iter().map(ItemCardView::from).collect(),
        total: all.len(),
    })
}

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog/new", post(new_item))
        .route("/catalog/{id}/edit", post(edit_item))
}

/// Open the editor for a new item.
///
/// POST /catalog/new
#[instrument(skip(auth), fields(client = %auth.client.id()))]
pub async fn new_item(auth: RequireIdentity) -> Response {
    auth.client.navigate(|nav, _| nav.begin_add());
    back_home()
}

/// Open the editor for an existing item.
///
/// POST /catalog/{id}/edit
///
/// # Errors
///
/// Returns `AppError::Catalog` with 404 if the item does not exist.
#[instrument(skip(auth, state), fields(client = %auth.client.id()))]
pub async fn edit_item(
    auth: RequireIdentity,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let item = state.catalog().get(ItemId::new(id))?;
    auth.client.navigate(move |nav, _| nav.begin_edit(item));
    Ok(back_home())
}
