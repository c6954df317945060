//! Authenticated identity.

use serde::{Deserialize, Serialize};

use super::{Email, Role, UserId};

/// The signed-in user.
///
/// Created by a successful credential check and dropped on sign-out; it is
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub fn new(id: UserId, email: Email, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email,
            name: name.into(),
            role,
        }
    }
}
