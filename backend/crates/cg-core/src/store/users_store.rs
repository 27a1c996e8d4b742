use crate::{StoreResult, User};

use async_trait::async_trait;

/// Persistence capability for users.
///
/// Implementations own all user state and their own locking. The API layer
/// only ever reaches users through this trait.
#[async_trait]
pub trait UsersStore: Send + Sync {
    /// List every stored user, ordered by id
    async fn all(&self) -> StoreResult<Vec<User>>;

    /// Resolve `id` to a user, or `StoreError::NotFound`
    async fn get(&self, id: &str) -> StoreResult<User>;

    /// Persist a new user and return its canonical form.
    ///
    /// The returned user carries the id the store assigned; any id on the
    /// input is ignored. A user with the same identity triple already present
    /// yields `StoreError::Conflict`.
    async fn add(&self, user: User) -> StoreResult<User>;

    /// Remove the user with `id`, or `StoreError::NotFound`
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
