use thiserror::Error;

/// Errors reported by the query functions in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The inputs do not describe a valid query, e.g. `weights` and `values`
    /// of different lengths.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates an `InvalidInput` error from anything string-like.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for knapsack and subset-sum operations
pub type Result<T> = std::result::Result<T, Error>;
