use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Outcomes a users store may report besides success.
///
/// Callers only distinguish `NotFound` and `Conflict`; everything else is a
/// backend failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("User already exists: {id} {location}")]
    Conflict { id: String, location: ErrorLocation },

    #[error("Store failure: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        StoreError::NotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(id: S) -> Self {
        StoreError::Conflict {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type Result<T> = StdResult<T, StoreError>;
