pub mod connection;
pub mod error;
pub mod stores;


pub use connection::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use stores::in_memory_users_store::InMemoryUsersStore;
pub use stores::sqlite_users_store::SqliteUsersStore;
