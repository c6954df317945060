//! Business logic services for the admin panel.
//!
//! # Services
//!
//! - `auth` - Credential verification behind a replaceable trait
//! - `catalog` - Item catalog provider and filtering
//! - `clients` - Per-browser client contexts
//! - `dashboard` - Overview statistics
//! - `navigation` - Screen state machine and role gate
//! - `preferences` - Durable cookie-backed preferences
//! - `session` - Single-flight session store
//! - `theme` - Light/dark theme preference

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod navigation;
pub mod preferences;
pub mod session;
pub mod theme;

pub use auth::{CredentialVerifier, DemoVerifier, SessionError, VerifierError};
pub use catalog::{CatalogError, CatalogFilter, CatalogProvider, DemoCatalog};
pub use clients::{ClientContext, ClientRegistry};
pub use dashboard::DashboardStats;
pub use navigation::{NavEntry, NavigationState, Screen, View, resolve_view};
pub use preferences::{CookiePreferences, MemoryPreferences, PreferenceError, PreferenceStore};
pub use session::{SessionSnapshot, SessionStore};
pub use theme::{Theme, ThemeStore};
