use std::fmt;

/// Result type for yell-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The frame source produced fewer caller frames than call-site resolution needs
    InsufficientDepth { required: usize, found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InsufficientDepth { required, found } => write!(
                f,
                "Call-site resolution needs at least {} caller frame(s), found {}",
                required, found
            ),
        }
    }
}

impl std::error::Error for Error {}
