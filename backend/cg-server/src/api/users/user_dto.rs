use crate::ResourceLinks;

use cg_core::User;

use serde::Serialize;

/// Root of the users collection
pub const USERS_PATH: &str = "/chronograf/v1/users";

/// Path of a single user resource, with the id URL-escaped
pub fn user_self_link(id: &str) -> String {
    format!("{}/{}", USERS_PATH, urlencoding::encode(id))
}

/// User representation returned to clients.
///
/// Exactly `id`, `username`, `provider`, `scheme` and `links`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub provider: String,
    pub scheme: String,
    pub links: ResourceLinks,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        let links = ResourceLinks {
            self_link: user_self_link(&u.id),
        };
        Self {
            id: u.id,
            username: u.username,
            provider: u.provider,
            scheme: u.scheme,
            links,
        }
    }
}
