use crate::{ResourceLinks, USERS_PATH, UserDto};

use cg_core::User;

use serde::Serialize;

/// List of users response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
    pub links: ResourceLinks,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserDto::from).collect(),
            links: ResourceLinks {
                self_link: USERS_PATH.to_string(),
            },
        }
    }
}
