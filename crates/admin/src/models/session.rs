//! Values kept in the browser's `tower-sessions` session.
//!
//! The session only carries the client context ID; identity and navigation
//! state stay in the [`ClientRegistry`](crate::services::ClientRegistry).

/// Session keys.
pub mod keys {
    /// Key for the client context ID (`Uuid`).
    pub const CLIENT_ID: &str = "client_id";
}
