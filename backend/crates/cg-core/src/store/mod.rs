pub mod store_error;
pub mod users_store;
