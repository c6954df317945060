//! HTTP middleware and extractors for the admin panel.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, attach request data)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions backed by a moka cache)
//!
//! Client context and identity checks are extractors in [`auth`].

pub mod auth;
pub mod session;

pub use auth::{
    Client, CurrentTheme, ExistingClient, IdentityRejection, RequireIdentity, RequireManager,
};
pub use session::{SESSION_COOKIE_NAME, SessionRecords, create_session_layer};
