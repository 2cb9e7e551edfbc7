//! Error types for calgrid operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
