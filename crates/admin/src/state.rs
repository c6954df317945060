//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::middleware::SessionRecords;
use crate::services::{CatalogProvider, ClientRegistry, CredentialVerifier, DemoCatalog, DemoVerifier};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the process-wide pieces: configuration,
/// the item catalog, the client registry and the session records.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: Arc<dyn CatalogProvider>,
    clients: ClientRegistry,
    sessions: SessionRecords,
}

impl AppState {
    /// Create the state with the demo verifier and catalog.
    #[must_use]
    pub fn init(config: AdminConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(DemoVerifier::new()),
            Arc::new(DemoCatalog::new()),
        )
    }

    /// Create the state around explicit collaborators.
    #[must_use]
    pub fn with_parts(
        config: AdminConfig,
        verifier: Arc<dyn CredentialVerifier>,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        let clients = ClientRegistry::new(verifier, config.login_delay, config.session_idle);
        let sessions = SessionRecords::new(config.session_idle);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                clients,
                sessions,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.inner.catalog.as_ref()
    }

    #[must_use]
    pub fn clients(&self) -> &ClientRegistry {
        &self.inner.clients
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionRecords {
        &self.inner.sessions
    }

    /// Tear down every client context. Called on shutdown.
    pub async fn teardown(&self) {
        tracing::info!("Tearing down client contexts");
        self.inner.clients.teardown().await;
    }
}
