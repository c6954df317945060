//! Integration tests for Inventory Pro.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p inventory-pro-integration-tests
//! ```
//!
//! Each test boots the real router on an ephemeral port and drives it with a
//! cookie-aware HTTP client, the same way a browser would.
//!
//! # Test Categories
//!
//! - `sign_in` - Credential checks, single-flight, landing screens
//! - `navigation` - Role gate, editor transitions, API views
//! - `theme` - Durable theme preference

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{Client, Response};

use inventory_pro_admin::config::AdminConfig;
use inventory_pro_admin::state::AppState;

pub use inventory_pro_admin::services::auth::{DEMO_KEEPER_EMAIL, DEMO_MANAGER_EMAIL, DEMO_SECRET};

/// Login delay used by default in tests.
pub const TEST_LOGIN_DELAY: Duration = Duration::from_millis(50);

/// A running panel plus a browser-like client.
pub struct TestContext {
    pub client: Client,
    pub addr: SocketAddr,
    pub state: AppState,
}

impl TestContext {
    /// Boot the panel with the demo verifier and catalog.
    pub async fn new() -> Self {
        Self::with_config(AdminConfig {
            login_delay: TEST_LOGIN_DELAY,
            ..AdminConfig::default()
        })
        .await
    }

    pub async fn with_config(config: AdminConfig) -> Self {
        Self::with_state(AppState::init(config)).await
    }

    /// Boot the panel around prepared state.
    pub async fn with_state(state: AppState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = inventory_pro_admin::app(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            client: browser(),
            addr,
            state,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A second browser with its own cookie jar.
    #[must_use]
    pub fn new_browser(&self) -> Client {
        browser()
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET failed")
    }

    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST failed")
    }

    /// Submit the sign-in form; redirects are followed.
    pub async fn sign_in(&self, email: &str, password: &str) -> Response {
        self.post("/auth/login", &[("email", email), ("password", password)])
            .await
    }

    /// Give this browser a client context by failing one sign-in.
    ///
    /// Anonymous reads never create one, so tests that race requests from a
    /// single browser call this first.
    pub async fn open_client(&self) {
        let resp = self.sign_in("nobody@inventory.com", "-").await;
        assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    }

    /// Fetch a JSON API endpoint.
    pub async fn json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = self.get(path).await;
        let status = response.status();
        let body = response.json().await.unwrap_or(serde_json::Value::Null);
        (status, body)
    }
}

fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
