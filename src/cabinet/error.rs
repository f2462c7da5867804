use crate::model::{RecordField, RecordId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CabinetError {
    #[error("{reason}")]
    Validation { field: RecordField, reason: String },

    #[error("There is no record with this Id - {0}")]
    RecordNotFound(RecordId),

    #[error("{reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CabinetError {
    pub fn validation(field: RecordField, reason: impl Into<String>) -> Self {
        CabinetError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        CabinetError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CabinetError>;
