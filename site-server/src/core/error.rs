use thiserror::Error;

/// Startup and runtime errors for the HTTP server itself.
///
/// Handler-level failures use [`crate::utils::AppError`]; this type
/// covers the paths where there is no HTTP response to attach an error
/// to (bind failure, state initialization, shutdown).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server lifecycle code.
pub type Result<T> = std::result::Result<T, ServerError>;
