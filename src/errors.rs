//! Data-loading errors shared by the tree and roster loaders

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key at {path}:{line}: {text:?}")]
    InvalidKey {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("invalid roster operation at {path}:{line}: {reason}")]
    InvalidOp {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

pub type DataResult<T> = Result<T, DataError>;
