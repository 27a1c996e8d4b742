pub mod error;
pub mod identifier;
pub mod models;
pub mod store;


pub use error::{CoreError, Result};
pub use identifier::derive_user_id;
pub use models::user::User;
pub use store::store_error::{Result as StoreResult, StoreError};
pub use store::users_store::UsersStore;
