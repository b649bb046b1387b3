use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to allocate coefficient table: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Unknown window shape: {0}")]
    UnknownShape(String),
    #[error("Invalid window parameter: {0}")]
    InvalidParameter(String),
}
