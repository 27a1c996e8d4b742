//! User entity - an authenticated principal known to the system.

use crate::{CoreError, Result as CoreErrorResult, derive_user_id};

use serde::{Deserialize, Serialize};

/// A user as persisted by a [`UsersStore`](crate::UsersStore).
///
/// `id` is derived from the other three fields and is never taken from
/// client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Provider-supplied login name
    pub username: String,
    /// Identity provider, e.g. "GitHub" or "Heroku"
    pub provider: String,
    /// Authentication mechanism, e.g. "OAuth2" or "LDAP"
    pub scheme: String,
}

impl User {
    /// Create a user with its canonical id derived from the identity triple
    pub fn new(username: String, provider: String, scheme: String) -> Self {
        let id = derive_user_id(&scheme, &provider, &username);
        Self {
            id,
            username,
            provider,
            scheme,
        }
    }

    /// The id this user would be assigned from its current fields
    pub fn canonical_id(&self) -> String {
        derive_user_id(&self.scheme, &self.provider, &self.username)
    }

    /// Check that every part of the identity triple is present
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::missing_field("username"));
        }
        if self.provider.trim().is_empty() {
            return Err(CoreError::missing_field("provider"));
        }
        if self.scheme.trim().is_empty() {
            return Err(CoreError::missing_field("scheme"));
        }
        Ok(())
    }
}
