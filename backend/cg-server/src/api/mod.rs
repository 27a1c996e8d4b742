pub mod error;
pub mod extractors;
pub mod fallback;
pub mod response_writer;
pub mod users;
