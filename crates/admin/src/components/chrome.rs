//! Header and navigation shown around every signed-in screen.

use inventory_pro_core::{Identity, Role};

use crate::services::navigation::{Screen, visible_screens};
use crate::services::theme::Theme;

/// Signed-in identity for templates.
#[derive(Debug, Clone)]
pub struct IdentityView {
    pub name: String,
    pub email: String,
    pub role_label: &'static str,
    pub is_manager: bool,
}

impl From<&Identity> for IdentityView {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            email: identity.email.to_string(),
            role_label: identity.role.label(),
            is_manager: identity.role == Role::Manager,
        }
    }
}

/// Navigation bar entry.
#[derive(Debug, Clone)]
pub struct NavItemView {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub active: bool,
}

/// Page chrome: header, navigation bar and theme toggle.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub identity: IdentityView,
    pub nav: Vec<NavItemView>,
    pub theme: Theme,
    pub return_to: String,
}

impl Chrome {
    /// Build the chrome for `identity` with `active` highlighted.
    #[must_use]
    pub fn new(identity: &Identity, active: Screen, theme: Theme, return_to: &str) -> Self {
        let nav = visible_screens(identity.role)
            .into_iter()
            .map(|entry| NavItemView {
                id: entry.id(),
                label: entry.label(),
                description: entry.description(),
                active: entry.screen() == active,
            })
            .collect();

        Self {
            identity: IdentityView::from(identity),
            nav,
            theme,
            return_to: return_to.to_string(),
        }
    }

    /// Label of the theme toggle button.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}
