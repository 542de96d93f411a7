#![deny(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid role id: {0:?}")]
    InvalidRoleId(String),
    #[error("invalid project id: {0:?}")]
    InvalidProjectId(String),
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
