//! Shared response encoding for success and error paths.
//!
//! Every JSON body leaves through [`json`], so the content type is always
//! exactly `application/json`.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Encode `body` as JSON with the given status
pub fn json<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// 201 Created with a `Location` header pointing at the new resource
pub fn created<T: Serialize>(location: &str, body: T) -> Response {
    let mut response = json(StatusCode::CREATED, body);

    match HeaderValue::from_str(location) {
        Ok(value) => {
            response.headers_mut().insert(LOCATION, value);
        }
        Err(e) => log::warn!("Skipping Location header for {}: {}", location, e),
    }

    response
}

/// 204 No Content with an empty body
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
