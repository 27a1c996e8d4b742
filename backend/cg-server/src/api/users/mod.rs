pub mod create_user_request;
pub mod resource_links;
pub mod user_dto;
pub mod user_list_response;
#[allow(clippy::module_inception)]
pub mod users;
