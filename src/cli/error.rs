//! CLI-level errors (wraps data and config errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::errors::DataError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Data(#[from] DataError),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Data(e) => match e {
                DataError::FileNotFound(_) | DataError::NotAFile(_) => crate::exitcode::NOINPUT,
                DataError::Read { .. } => crate::exitcode::IOERR,
                DataError::InvalidKey { .. } | DataError::InvalidOp { .. } => {
                    crate::exitcode::DATAERR
                }
            },
        }
    }
}
