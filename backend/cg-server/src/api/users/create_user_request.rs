use cg_core::{Result as CoreErrorResult, User};

use serde::Deserialize;

/// Body of POST /chronograf/v1/users.
///
/// Any `id` in the body is ignored; the store assigns it.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub provider: Option<String>,

    #[serde(default)]
    pub scheme: Option<String>,
}

impl CreateUserRequest {
    /// Build the user to hand to the store, rejecting a partial identity
    #[track_caller]
    pub fn into_user(self) -> CoreErrorResult<User> {
        let user = User::new(
            self.username.unwrap_or_default(),
            self.provider.unwrap_or_default(),
            self.scheme.unwrap_or_default(),
        );
        user.validate()?;
        Ok(user)
    }
}
