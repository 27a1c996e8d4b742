use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific field
    #[track_caller]
    pub fn missing_field(field: &str) -> Self {
        CoreError::Validation {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
