use thiserror::Error;

/// Errors raised while collecting input from the user
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please enter a valid number of seconds.")]
    InvalidSeconds,

    #[error("Please enter a valid number of loops.")]
    InvalidLoops,

    #[error("Please select one of the listed actions.")]
    InvalidAction,

    #[error("Input closed before a value was entered")]
    Closed,
}

impl Error {
    /// Whether the user can fix this by typing something else
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::InvalidSeconds | Error::InvalidLoops | Error::InvalidAction
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
