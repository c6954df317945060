//! Credential verification.
//!
//! The session store talks to a [`CredentialVerifier`] only, so the demo
//! account check below can be swapped for a real identity provider without
//! touching routing or session code.

mod error;

pub use error::{SessionError, VerifierError};

use futures::future::BoxFuture;
use secrecy::{ExposeSecret, SecretString};

use inventory_pro_core::{Email, Identity, Role, UserId};

/// Checks an `(identifier, secret)` pair.
pub trait CredentialVerifier: Send + Sync {
    /// Resolve the identity for the given credentials.
    ///
    /// Returns `Ok(None)` for unknown or wrong credentials.
    ///
    /// # Errors
    ///
    /// Returns `VerifierError` only when the check itself could not be made.
    fn verify<'a>(
        &'a self,
        email: &'a str,
        secret: &'a SecretString,
    ) -> BoxFuture<'a, Result<Option<Identity>, VerifierError>>;
}

/// Shared password of both demo accounts.
pub const DEMO_SECRET: &str = "password123";

/// Demo manager account email.
pub const DEMO_MANAGER_EMAIL: &str = "manager@inventory.com";

/// Demo store keeper account email.
pub const DEMO_KEEPER_EMAIL: &str = "keeper@inventory.com";

/// A hard-coded account known to [`DemoVerifier`].
struct DemoAccount {
    identity: Identity,
    secret: SecretString,
}

/// Placeholder verifier accepting the two demo accounts.
pub struct DemoVerifier {
    accounts: Vec<DemoAccount>,
}

impl DemoVerifier {
    /// Build the verifier with the manager and store keeper accounts.
    #[must_use]
    pub fn new() -> Self {
        let accounts = [
            (1, DEMO_MANAGER_EMAIL, "Morgan Reyes", Role::Manager),
            (2, DEMO_KEEPER_EMAIL, "Sam Patel", Role::StoreKeeper),
        ]
        .into_iter()
        .filter_map(|(id, email, name, role)| {
            let email = Email::parse(email).ok()?;
            Some(DemoAccount {
                identity: Identity::new(UserId::new(id), email, name, role),
                secret: SecretString::from(DEMO_SECRET),
            })
        })
        .collect();

        Self { accounts }
    }

    fn lookup(&self, email: &str, secret: &SecretString) -> Option<Identity> {
        let email = Email::parse(email).ok()?;
        self.accounts
            .iter()
            .find(|account| {
                account.identity.email == email
                    && account.secret.expose_secret() == secret.expose_secret()
            })
            .map(|account| account.identity.clone())
    }
}

impl Default for DemoVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for DemoVerifier {
    fn verify<'a>(
        &'a self,
        email: &'a str,
        secret: &'a SecretString,
    ) -> BoxFuture<'a, Result<Option<Identity>, VerifierError>> {
        Box::pin(async move { Ok(self.lookup(email, secret)) })
    }
}
