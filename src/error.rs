//! Error types for td
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, no data directory)
//! - 3: Rejected by validation (length, charset, duplicate title)
//! - 4: Operation failed (IO, corrupt data)

use thiserror::Error;

/// Exit codes for td CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const VALIDATION_REJECTED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for td operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No data directory available; pass --data-dir or set TD_DATA_DIR")]
    NoDataDir,

    // Validation rejections (exit code 3)
    #[error("{0}")]
    Validation(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::InvalidArgument(_) | Error::NoDataDir => exit_codes::USER_ERROR,

            // Validation rejections
            Error::Validation(_) => exit_codes::VALIDATION_REJECTED,

            // Operation failures
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::OperationFailed(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for td operations
pub type Result<T> = std::result::Result<T, Error>;
