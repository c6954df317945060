//! Per-browser client contexts.
//!
//! Each browser session owns one [`ClientContext`]: its session store and
//! its navigation state. Contexts live in a [`ClientRegistry`] keyed by the
//! ID stored in the browser's session cookie and are torn down when they
//! go idle or the server shuts down.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::notification::RemovalCause;
use secrecy::SecretString;
use tokio::sync::watch;
use uuid::Uuid;

use inventory_pro_core::Role;

use super::auth::{CredentialVerifier, SessionError};
use super::navigation::{NavigationState, default_screen_for};
use super::session::{SessionSnapshot, SessionStore};

/// State owned by one browser session.
pub struct ClientContext {
    id: Uuid,
    session: SessionStore,
    navigation: watch::Sender<NavigationState>,
}

impl ClientContext {
    #[must_use]
    pub fn new(id: Uuid, verifier: Arc<dyn CredentialVerifier>, login_delay: Duration) -> Self {
        let (navigation, _) = watch::channel(NavigationState::default());
        Self {
            id,
            session: SessionStore::init(verifier, login_delay),
            navigation,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.navigation.borrow().clone()
    }

    /// Sign in and, on success, land on the role's default screen.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(&self, email: &str, secret: &SecretString) -> Result<bool, SessionError> {
        let accepted = self.session.login(email, secret).await?;
        if accepted && let Some(identity) = self.session.identity() {
            self.navigation
                .send_replace(default_screen_for(identity.role));
        }
        Ok(accepted)
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    /// Apply a navigation change followed by the role gate.
    ///
    /// Without an identity the change is ignored.
    pub fn navigate(&self, change: impl FnOnce(&mut NavigationState, Role)) {
        let Some(identity) = self.session.identity() else {
            return;
        };
        self.navigation.send_modify(|state| {
            change(state, identity.role);
            if state.enforce_role(identity.role) {
                tracing::debug!(
                    client = %self.id,
                    role = %identity.role,
                    "Redirected to role default screen"
                );
            }
        });
    }

    /// Drop the identity and reset navigation.
    pub fn teardown(&self) {
        self.session.teardown();
        self.navigation.send_replace(NavigationState::default());
    }
}

/// All live client contexts.
#[derive(Clone)]
pub struct ClientRegistry {
    contexts: Cache<Uuid, Arc<ClientContext>>,
    verifier: Arc<dyn CredentialVerifier>,
    login_delay: Duration,
}

impl ClientRegistry {
    /// Contexts unused for `idle` are torn down and evicted. Idle expiry is
    /// the only eviction path; the registry has no capacity bound.
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>, login_delay: Duration, idle: Duration) -> Self {
        let contexts = Cache::builder()
            .time_to_idle(idle)
            .eviction_listener(|id, context: Arc<ClientContext>, cause| {
                if cause != RemovalCause::Replaced {
                    tracing::debug!(client = %id, ?cause, "Client context evicted");
                    context.teardown();
                }
            })
            .build();

        Self {
            contexts,
            verifier,
            login_delay,
        }
    }

    /// Look up a context, creating a fresh one for unknown IDs.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<ClientContext> {
        self.contexts
            .get_with(id, async {
                tracing::debug!(client = %id, "Client context created");
                Arc::new(ClientContext::new(
                    id,
                    Arc::clone(&self.verifier),
                    self.login_delay,
                ))
            })
            .await
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ClientContext>> {
        self.contexts.get(&id).await
    }

    /// Number of live contexts once pending evictions have run.
    pub async fn live_count(&self) -> u64 {
        self.contexts.run_pending_tasks().await;
        self.contexts.entry_count()
    }

    /// Tear down every context.
    pub async fn teardown(&self) {
        for (_, context) in self.contexts.iter() {
            context.teardown();
        }
        self.contexts.invalidate_all();
        self.contexts.run_pending_tasks().await;
    }
}
