//! Extraction of the target resource id.
//!
//! The dispatch layer can hand a handler its target in two ways: a middleware
//! may attach a [`ResourceId`] to the request extensions before the handler
//! runs, or the router may capture it as the `{id}` path parameter. Handlers
//! take a `ResourceId` and never care which one was used.

use crate::ApiError;

use std::collections::HashMap;
use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use error_location::ErrorLocation;

/// Route parameter carrying the resource id
pub const ID_PARAM: &str = "id";

/// Opaque id of the resource a request targets.
///
/// Checks request extensions first. If none was attached, falls back to the
/// `id` path parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId(pub String);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            if let Some(id) = parts.extensions.get::<ResourceId>() {
                log::debug!("Using resource id from request context: {}", id.0);
                return Ok(id.clone());
            }

            let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::BadRequest {
                    message: format!("Missing resource id: {}", e.body_text()),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            match params.get(ID_PARAM) {
                Some(id) if !id.is_empty() => Ok(ResourceId(id.clone())),
                _ => Err(ApiError::BadRequest {
                    message: format!("Missing '{}' route parameter", ID_PARAM),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
