//! Error types for the game shell.
//!
//! The game controller itself never fails; these cover the terminal, the
//! config file and logging setup around it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TyperError {
    /// stdin is not attached to a terminal
    #[error("stdin must be a tty")]
    NotATty,

    /// A session must last at least one second
    #[error("session duration must be at least 1 second, got {0}")]
    InvalidDuration(u32),

    /// Config file exists but could not be decoded
    #[error("cannot parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config could not be encoded for saving
    #[error("cannot encode config: {0}")]
    ConfigEncode(#[from] serde_json::Error),

    #[error("could not set up logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TyperError>;
