//! Authentication error types.

use thiserror::Error;

/// Failure of the credential verifier itself.
///
/// Rejected credentials are not an error; they are `Ok(None)` from
/// [`super::CredentialVerifier::verify`].
#[derive(Debug, Clone, Error)]
pub enum VerifierError {
    /// The verifier could not be reached or did not answer in time.
    #[error("credential service unavailable: {0}")]
    Unavailable(String),
}

/// Errors from [`crate::services::SessionStore::login`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// Another sign-in for the same client is still in flight.
    #[error("a sign-in is already in progress")]
    LoginInFlight,

    /// The verifier failed; the session is left as it was.
    #[error(transparent)]
    Verifier(#[from] VerifierError),
}
