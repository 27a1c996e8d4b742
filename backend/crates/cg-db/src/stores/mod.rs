pub mod in_memory_users_store;
pub mod sqlite_users_store;
