#![allow(dead_code)]

//! Test infrastructure for cg-server API tests

use cg_core::{StoreError, StoreResult, User, UsersStore};
use cg_db::InMemoryUsersStore;
use cg_server::{AppState, build_router};

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Store whose every operation fails with a backend error
pub struct FailingUsersStore;

#[async_trait]
impl UsersStore for FailingUsersStore {
    async fn all(&self) -> StoreResult<Vec<User>> {
        Err(StoreError::backend("store offline"))
    }

    async fn get(&self, _id: &str) -> StoreResult<User> {
        Err(StoreError::backend("store offline"))
    }

    async fn add(&self, _user: User) -> StoreResult<User> {
        Err(StoreError::backend("store offline"))
    }

    async fn delete(&self, _id: &str) -> StoreResult<()> {
        Err(StoreError::backend("store offline"))
    }
}

/// Router over a fresh in-memory store
pub fn create_test_app() -> Router {
    build_router(AppState::new(Arc::new(InMemoryUsersStore::new())))
}

/// Router over a store that always fails
pub fn create_failing_app() -> Router {
    build_router(AppState::new(Arc::new(FailingUsersStore)))
}

/// Send one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
