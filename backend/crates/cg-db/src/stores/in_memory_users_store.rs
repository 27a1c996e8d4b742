//! Process-local users store.

use cg_core::{StoreError, StoreResult, User, UsersStore};

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Users held in a map keyed by canonical id. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryUsersStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUsersStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsersStore for InMemoryUsersStore {
    async fn all(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn get(&self, id: &str) -> StoreResult<User> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn add(&self, user: User) -> StoreResult<User> {
        let user = User {
            id: user.canonical_id(),
            ..user
        };

        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(StoreError::conflict(user.id));
        }
        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
