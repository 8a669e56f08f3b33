//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidInput`] thrown when a submitted snapshot is malformed or
//!   incomplete (missing income, negative or non-numeric amounts, ...).
//! - [`NoDataAvailable`] thrown when a derivation is requested before any
//!   snapshot has been uploaded.
//!
//!  [`InvalidInput`]: EngineError::InvalidInput
//!  [`NoDataAvailable`]: EngineError::NoDataAvailable
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No data uploaded")]
    NoDataAvailable,
}
