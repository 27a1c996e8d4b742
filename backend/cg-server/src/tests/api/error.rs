use crate::ApiError;

use cg_core::{CoreError, StoreError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "scheme is required".into(),
        field: Some("scheme".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "scheme");
}

#[tokio::test]
async fn test_conflict_error_returns_409() {
    let error = ApiError::Conflict {
        message: "User OAuth2-GitHub-bob already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_non_empty_body() {
    let error = ApiError::Internal {
        message: "Users store operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!body.is_empty());
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_store_errors_map_to_statuses() {
    let cases = [
        (StoreError::not_found("x"), StatusCode::NOT_FOUND),
        (StoreError::conflict("x"), StatusCode::CONFLICT),
        (StoreError::backend("x"), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (store_error, expected) in cases {
        let api_err: ApiError = store_error.into();
        assert_eq!(api_err.status(), expected);
    }
}

#[test]
fn test_core_validation_error_keeps_field() {
    let api_err: ApiError = CoreError::missing_field("username").into();

    match api_err {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("username")),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_json_error_converts_to_bad_request() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let api_err: ApiError = json_err.into();

    match api_err {
        ApiError::BadRequest { message, .. } => assert!(message.contains("Invalid JSON")),
        other => panic!("Expected BadRequest error, got {:?}", other),
    }
}
