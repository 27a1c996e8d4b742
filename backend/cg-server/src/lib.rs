pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::resource_id::ResourceId,
    users::{
        create_user_request::CreateUserRequest,
        resource_links::ResourceLinks,
        user_dto::{USERS_PATH, UserDto, user_self_link},
        user_list_response::UserListResponse,
        users::{create_user, delete_user, get_user, list_users},
    },
};
pub use routes::build_router;
pub use state::AppState;
