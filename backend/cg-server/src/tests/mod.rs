
use crate::AppState;

use cg_core::{StoreError, StoreResult, User, UsersStore};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use http_body_util::BodyExt;

type LookupFn = Box<dyn Fn(&str) -> StoreResult<User> + Send + Sync>;
type AddFn = Box<dyn Fn(User) -> StoreResult<User> + Send + Sync>;
type DeleteFn = Box<dyn Fn(&str) -> StoreResult<()> + Send + Sync>;

/// Scriptable users store that records every call it receives
#[derive(Default)]
pub(crate) struct FakeUsersStore {
    get_fn: Option<LookupFn>,
    add_fn: Option<AddFn>,
    delete_fn: Option<DeleteFn>,
    calls: Mutex<Vec<String>>,
    added: Mutex<Vec<User>>,
}

impl FakeUsersStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_get(
        mut self,
        f: impl Fn(&str) -> StoreResult<User> + Send + Sync + 'static,
    ) -> Self {
        self.get_fn = Some(Box::new(f));
        self
    }

    pub(crate) fn with_add(
        mut self,
        f: impl Fn(User) -> StoreResult<User> + Send + Sync + 'static,
    ) -> Self {
        self.add_fn = Some(Box::new(f));
        self
    }

    pub(crate) fn with_delete(
        mut self,
        f: impl Fn(&str) -> StoreResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.delete_fn = Some(Box::new(f));
        self
    }

    /// Calls in order, formatted as "op:argument"
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Users passed to `add`, as received
    pub(crate) fn added(&self) -> Vec<User> {
        self.added.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UsersStore for FakeUsersStore {
    async fn all(&self) -> StoreResult<Vec<User>> {
        self.record("all".to_string());
        Ok(Vec::new())
    }

    async fn get(&self, id: &str) -> StoreResult<User> {
        self.record(format!("get:{}", id));
        match self.get_fn {
            Some(ref f) => f(id),
            None => Err(StoreError::backend("get not scripted")),
        }
    }

    async fn add(&self, user: User) -> StoreResult<User> {
        self.record(format!("add:{}", user.id));
        self.added.lock().unwrap().push(user.clone());
        match self.add_fn {
            Some(ref f) => f(user),
            None => Err(StoreError::backend("add not scripted")),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.record(format!("delete:{}", id));
        match self.delete_fn {
            Some(ref f) => f(id),
            None => Err(StoreError::backend("delete not scripted")),
        }
    }
}

pub(crate) fn state_with(store: Arc<FakeUsersStore>) -> AppState {
    AppState::new(store)
}

/// Drain a response body into JSON
pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
