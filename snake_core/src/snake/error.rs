use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("invalid hex message {message:?}: {source}")]
    InvalidHex {
        message: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("superposition probability must lie in [0, 1], got {0}")]
    InvalidSuperposition(f64),

    #[error("expected {expected} entries in {list}, got {actual}")]
    MismatchedExpectations {
        list: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("stage '{0}' cannot be inverted")]
    NotInvertible(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnakeError>;
