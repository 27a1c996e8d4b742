//! User REST API handlers
//!
//! Each handler makes exactly one store call and turns its outcome into a
//! single response. Store errors are classified by `ApiError`'s conversion.

use crate::api::response_writer;
use crate::{ApiResult, AppState, CreateUserRequest, ResourceId, UserDto, UserListResponse};

use axum::{extract::State, http::StatusCode, response::Response};
use bytes::Bytes;

/// GET /chronograf/v1/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Response> {
    let users = state.users.all().await?;

    log::debug!("Listed {} users via REST API", users.len());

    Ok(response_writer::json(
        StatusCode::OK,
        UserListResponse::from(users),
    ))
}

/// GET /chronograf/v1/users/{id}
///
/// The lookup key is whatever id the dispatch layer supplied; the store
/// resolves it.
pub async fn get_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Response> {
    let user = state.users.get(&id).await?;

    log::debug!("Fetched user {} (lookup key {})", user.id, id);

    Ok(response_writer::json(StatusCode::OK, UserDto::from(user)))
}

/// POST /chronograf/v1/users
///
/// The body is decoded by hand so that malformed JSON, a missing content type
/// and missing identity fields all come back as JSON 400s.
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let req: CreateUserRequest = serde_json::from_slice(&body)?;
    let user = req.into_user()?;

    let created = state.users.add(user).await?;

    log::info!("Created user {} via REST API", created.id);

    let dto = UserDto::from(created);
    let location = dto.links.self_link.clone();
    Ok(response_writer::created(&location, dto))
}

/// DELETE /chronograf/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Response> {
    state.users.delete(&id).await?;

    log::info!("Deleted user {} via REST API", id);

    Ok(response_writer::no_content())
}
