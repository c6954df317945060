//! Screen navigation and the role gate.
//!
//! [`NavigationState`] is the per-client screen state machine. The edit
//! target only exists inside [`NavigationState::ItemEditor`], so a target can
//! never outlive the editor.
//!
//! Every transition is followed by [`NavigationState::enforce_role`], which
//! moves a role off any screen it may not see. Unknown screen identifiers
//! resolve through the same [`default_screen_for`] fallback.

use serde::Serialize;

use inventory_pro_core::{Identity, Item, Role};

use super::session::SessionSnapshot;

/// The screens that can be rendered inside the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Overview,
    Catalog,
    ItemEditor,
}

impl Screen {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Catalog => "catalog",
            Self::ItemEditor => "item-editor",
        }
    }

    /// Whether `role` may see this screen.
    #[must_use]
    pub const fn permits(self, role: Role) -> bool {
        match self {
            Self::Overview => matches!(role, Role::Manager),
            Self::Catalog | Self::ItemEditor => true,
        }
    }
}

/// Entries of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavEntry {
    Overview,
    Catalog,
    NewItem,
}

impl NavEntry {
    /// Identifier posted by the navigation form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Catalog => "catalog",
            Self::NewItem => "new-item",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Dashboard",
            Self::Catalog => "Products",
            Self::NewItem => "Add Product",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Overview => "Overview & Analytics",
            Self::Catalog => "View Inventory",
            Self::NewItem => "Add New Item",
        }
    }

    /// Screen this entry leads to.
    #[must_use]
    pub const fn screen(self) -> Screen {
        match self {
            Self::Overview => Screen::Overview,
            Self::Catalog => Screen::Catalog,
            Self::NewItem => Screen::ItemEditor,
        }
    }

    /// Parse a posted identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        [Self::Overview, Self::Catalog, Self::NewItem]
            .into_iter()
            .find(|entry| entry.id() == id.trim())
    }
}

/// Navigation entries shown to `role`, in display order.
#[must_use]
pub fn visible_screens(role: Role) -> Vec<NavEntry> {
    [NavEntry::Overview, NavEntry::Catalog, NavEntry::NewItem]
        .into_iter()
        .filter(|entry| entry.screen().permits(role))
        .collect()
}

/// Landing screen for `role`, also used for any unrecognised screen.
#[must_use]
pub const fn default_screen_for(role: Role) -> NavigationState {
    match role {
        Role::Manager => NavigationState::Overview,
        Role::StoreKeeper => NavigationState::Catalog,
    }
}

/// Current screen of one client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigationState {
    #[default]
    Overview,
    Catalog,
    /// `target` is `Some` when editing an existing item, `None` when adding.
    ItemEditor { target: Option<Item> },
}

impl NavigationState {
    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Overview => Screen::Overview,
            Self::Catalog => Screen::Catalog,
            Self::ItemEditor { .. } => Screen::ItemEditor,
        }
    }

    #[must_use]
    pub const fn edit_target(&self) -> Option<&Item> {
        match self {
            Self::ItemEditor { target } => target.as_ref(),
            Self::Overview | Self::Catalog => None,
        }
    }

    /// Follow a navigation bar entry. Any edit target is dropped.
    pub fn select(&mut self, entry: NavEntry) {
        *self = match entry {
            NavEntry::Overview => Self::Overview,
            NavEntry::Catalog => Self::Catalog,
            NavEntry::NewItem => Self::ItemEditor { target: None },
        };
    }

    /// Follow a posted navigation identifier, falling back to the role's
    /// landing screen when it is not recognised.
    pub fn select_raw(&mut self, id: &str, role: Role) {
        match NavEntry::from_id(id) {
            Some(entry) => self.select(entry),
            None => {
                tracing::debug!(screen = %id, "Unknown screen, using role default");
                *self = default_screen_for(role);
            }
        }
    }

    /// Open the editor for a new item.
    pub fn begin_add(&mut self) {
        *self = Self::ItemEditor { target: None };
    }

    /// Open the editor prefilled with `item`.
    pub fn begin_edit(&mut self, item: Item) {
        *self = Self::ItemEditor { target: Some(item) };
    }

    /// Leave the editor after save or cancel.
    pub fn finish_editing(&mut self) {
        *self = Self::Catalog;
    }

    /// Move `role` off a screen it may not see. Returns whether it moved.
    pub fn enforce_role(&mut self, role: Role) -> bool {
        if self.screen().permits(role) {
            false
        } else {
            *self = default_screen_for(role);
            true
        }
    }
}

/// What the root view renders for a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A credential check is in flight.
    Loading,
    /// No identity; the sign-in screen is shown without chrome.
    SignIn,
    /// Chrome around the active screen.
    Screen {
        identity: Identity,
        state: NavigationState,
    },
}

/// Derive the view from session and navigation state.
///
/// The role gate is applied here as well, so a screen the identity may not
/// see is never rendered even if the stored state is stale.
#[must_use]
pub fn resolve_view(session: &SessionSnapshot, navigation: &NavigationState) -> View {
    if session.pending {
        return View::Loading;
    }
    let Some(identity) = session.identity.clone() else {
        return View::SignIn;
    };
    let mut state = navigation.clone();
    state.enforce_role(identity.role);
    View::Screen { identity, state }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use inventory_pro_core::{Email, ItemId, Price, UserId};

    use super::*;

    fn identity(role: Role) -> Identity {
        Identity::new(
            UserId::new(1),
            Email::parse("someone@inventory.com").unwrap(),
            "Someone",
            role,
        )
    }

    fn item() -> Item {
        Item {
            id: ItemId::new(3),
            name: "USB-C Cable".to_string(),
            category: "Cables".to_string(),
            unit_price: Price::from_cents(2_000),
            quantity: 89,
            description: "High-speed USB-C charging cable".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2024, 1, 19).unwrap(),
        }
    }

    #[test]
    fn test_visible_screens_by_role() {
        assert_eq!(
            visible_screens(Role::Manager),
            vec![NavEntry::Overview, NavEntry::Catalog, NavEntry::NewItem]
        );
        assert_eq!(
            visible_screens(Role::StoreKeeper),
            vec![NavEntry::Catalog, NavEntry::NewItem]
        );
    }

    #[test]
    fn test_default_screen() {
        assert_eq!(default_screen_for(Role::Manager), NavigationState::Overview);
        assert_eq!(default_screen_for(Role::StoreKeeper), NavigationState::Catalog);
    }

    #[test]
    fn test_edit_sets_target_and_add_clears_it() {
        let mut state = NavigationState::Catalog;
        state.begin_edit(item());
        assert_eq!(state.screen(), Screen::ItemEditor);
        assert_eq!(state.edit_target().unwrap().id, ItemId::new(3));

        state.begin_add();
        assert_eq!(state.screen(), Screen::ItemEditor);
        assert!(state.edit_target().is_none());
    }

    #[test]
    fn test_finish_editing_returns_to_catalog() {
        let mut state = NavigationState::Overview;
        state.begin_edit(item());
        state.finish_editing();
        assert_eq!(state, NavigationState::Catalog);
        assert!(state.edit_target().is_none());
    }

    #[test]
    fn test_nav_selection_clears_target() {
        for entry in [NavEntry::Overview, NavEntry::Catalog, NavEntry::NewItem] {
            let mut state = NavigationState::ItemEditor {
                target: Some(item()),
            };
            state.select(entry);
            assert_eq!(state.screen(), entry.screen());
            assert!(state.edit_target().is_none());
        }
    }

    #[test]
    fn test_unknown_screen_falls_back_to_role_default() {
        let mut state = NavigationState::Catalog;
        state.select_raw("settings", Role::Manager);
        assert_eq!(state, NavigationState::Overview);

        let mut state = NavigationState::ItemEditor {
            target: Some(item()),
        };
        state.select_raw("", Role::StoreKeeper);
        assert_eq!(state, NavigationState::Catalog);
    }

    #[test]
    fn test_keeper_is_moved_off_overview() {
        let mut state = NavigationState::Overview;
        assert!(state.enforce_role(Role::StoreKeeper));
        assert_eq!(state, NavigationState::Catalog);

        let mut state = NavigationState::Overview;
        assert!(!state.enforce_role(Role::Manager));
        assert_eq!(state, NavigationState::Overview);

        let mut state = NavigationState::ItemEditor { target: None };
        assert!(!state.enforce_role(Role::StoreKeeper));
    }

    #[test]
    fn test_resolve_view() {
        let nav = NavigationState::Overview;
        assert_eq!(
            resolve_view(&SessionSnapshot::default(), &nav),
            View::SignIn
        );

        let pending = SessionSnapshot {
            identity: None,
            pending: true,
        };
        assert_eq!(resolve_view(&pending, &nav), View::Loading);

        let keeper = SessionSnapshot {
            identity: Some(identity(Role::StoreKeeper)),
            pending: false,
        };
        match resolve_view(&keeper, &nav) {
            View::Screen { state, .. } => assert_eq!(state, NavigationState::Catalog),
            other => panic!("unexpected view {other:?}"),
        }

        let manager = SessionSnapshot {
            identity: Some(identity(Role::Manager)),
            pending: false,
        };
        match resolve_view(&manager, &nav) {
            View::Screen { state, identity } => {
                assert_eq!(state, NavigationState::Overview);
                assert_eq!(identity.role, Role::Manager);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_nav_entry_ids() {
        assert_eq!(NavEntry::from_id("new-item"), Some(NavEntry::NewItem));
        assert_eq!(NavEntry::from_id(" catalog "), Some(NavEntry::Catalog));
        assert_eq!(NavEntry::from_id("item-editor"), None);
    }
}
