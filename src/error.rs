//! Error types shared by the engine, catalog and store.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The match cannot start (empty item pool, bad settings).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// An operation was called in a state that does not allow it.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}

/// Failure of the persistence layer. Never retried.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("could not encode or decode the leaderboard table")]
    Codec(#[from] bincode::Error),
    #[error("the storage backend rejected the write")]
    Rejected,
}
