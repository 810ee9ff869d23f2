//! Error types for finboard-data

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record #{index} ({id}): {message}")]
    InvalidRecord {
        index: usize,
        id: String,
        message: String,
    },

    #[error("Duplicate transaction id: {id}")]
    DuplicateId { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl DataError {
    pub(crate) fn invalid(index: usize, id: &str, message: impl Into<String>) -> Self {
        DataError::InvalidRecord {
            index,
            id: id.to_string(),
            message: message.into(),
        }
    }
}
