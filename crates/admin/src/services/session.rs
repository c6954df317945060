//! Per-client session store.
//!
//! Holds the current identity and the pending flag of the credential check.
//! State lives in a `watch` channel so readers never block and the
//! single-flight claim is one atomic check-and-set.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde::Serialize;
use tokio::sync::watch;

use inventory_pro_core::Identity;

use super::auth::{CredentialVerifier, SessionError};

/// Point-in-time view of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Signed-in identity, if any.
    pub identity: Option<Identity>,
    /// True only while a credential check is in flight.
    pub pending: bool,
}

/// Session store for one client context.
pub struct SessionStore {
    state: watch::Sender<SessionSnapshot>,
    verifier: Arc<dyn CredentialVerifier>,
    delay: Duration,
}

impl SessionStore {
    /// Create an empty store.
    ///
    /// `delay` is slept before each credential check to stand in for a
    /// network round trip.
    #[must_use]
    pub fn init(verifier: Arc<dyn CredentialVerifier>, delay: Duration) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            state,
            verifier,
            delay,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    /// Watch for session changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Check credentials and sign in on success.
    ///
    /// Returns `Ok(true)` when the identity was set and `Ok(false)` when the
    /// credentials were rejected. A rejected attempt leaves the identity
    /// untouched. `pending` is cleared on every exit path, including when
    /// the returned future is dropped.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LoginInFlight` if another call is outstanding,
    /// or `SessionError::Verifier` if the verifier failed.
    pub async fn login(&self, email: &str, secret: &SecretString) -> Result<bool, SessionError> {
        let claimed = self.state.send_if_modified(|session| {
            if session.pending {
                false
            } else {
                session.pending = true;
                true
            }
        });
        if !claimed {
            return Err(SessionError::LoginInFlight);
        }
        let guard = PendingGuard { state: &self.state };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.verifier.verify(email, secret).await? {
            Some(identity) => {
                guard.resolve(Some(identity));
                Ok(true)
            }
            None => {
                guard.resolve(None);
                Ok(false)
            }
        }
    }

    /// Sign out. Clears the identity and nothing else.
    pub fn logout(&self) {
        self.state.send_modify(|session| session.identity = None);
    }

    /// Release the session when its client context is discarded.
    pub fn teardown(&self) {
        self.state.send_modify(|session| {
            session.identity = None;
            session.pending = false;
        });
    }
}

/// Clears `pending` when the login attempt ends, however it ends.
struct PendingGuard<'a> {
    state: &'a watch::Sender<SessionSnapshot>,
}

impl PendingGuard<'_> {
    /// Finish the attempt, installing `identity` if one was verified.
    fn resolve(self, identity: Option<Identity>) {
        self.state.send_modify(|session| {
            if identity.is_some() {
                session.identity = identity;
            }
            session.pending = false;
        });
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|session| {
            let was_pending = session.pending;
            session.pending = false;
            was_pending
        });
    }
}
