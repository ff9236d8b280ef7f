use std::fmt;
use thiserror::Error;

/// Which bounded structure an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Registry,
    History,
    Alerts,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Registry => write!(f, "Medication registry"),
            Container::History => write!(f, "Medication history"),
            Container::Alerts => write!(f, "Refill alert queue"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MedError {
    #[error("Medication with ID {0} not found")]
    NotFound(i32),

    #[error("Medication with ID {0} already exists")]
    Duplicate(i32),

    #[error("{container} is full (capacity {capacity})")]
    Full { container: Container, capacity: usize },

    #[error("{0} is empty")]
    Empty(Container),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, MedError>;

impl From<std::collections::TryReserveError> for MedError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::ResourceExhausted(err.to_string())
    }
}

impl From<std::io::Error> for MedError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for MedError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
