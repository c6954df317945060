//! Overview screen.

use askama::Template;
use askama_web::WebTemplate;

use inventory_pro_core::Identity;

use crate::components::Chrome;
use crate::error::AppError;
use crate::filters;
use crate::services::dashboard::{
    Activity, DashboardStats, RECENT_ACTIVITY, TOP_ITEMS, TopItem, top_items,
};
use crate::services::navigation::Screen;
use crate::services::theme::Theme;
use crate::state::AppState;

/// Overview template.
#[derive(Template, WebTemplate)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    pub chrome: Chrome,
    pub theme: Theme,
    pub stats: DashboardStats,
    pub recent_activity: Vec<Activity>,
    pub top_items: Vec<TopItem>,
}

/// Build the overview screen for `identity`.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the catalog cannot be listed.
pub fn page(
    state: &AppState,
    identity: &Identity,
    theme: Theme,
    return_to: &str,
) -> Result<OverviewTemplate, AppError> {
    let items = state.catalog().list()?;

    Ok(OverviewTemplate {
        chrome: Chrome::new(identity, Screen::Overview, theme, return_to),
        theme,
        stats: DashboardStats::compute(&items),
        recent_activity: RECENT_ACTIVITY.to_vec(),
        top_items: top_items(&items, TOP_ITEMS),
    })
}
