//! JSON responses for requests the router cannot dispatch

use crate::ApiError;

use std::panic::Location;

use axum::http::{Method, Uri};
use error_location::ErrorLocation;

/// No route matches the path
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No resource at {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// The path matches but the method does not
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        message: format!("{} is not supported on {}", method, uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}
