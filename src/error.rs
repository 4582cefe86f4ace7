//! Error types shared by all engines.
use thiserror::Error;


/// Errors that can occur in this crate.
///
/// Algorithmic "no solution" outcomes
/// (no valid split, no path, unsolvable puzzle)
/// are not errors; they are encoded in the returned values.
#[derive(Error, Debug)]
pub enum MiniLabError {
    /// Malformed hyperparameters or input data.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was invoked in the wrong lifecycle state.
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Failed to write a DOT file or a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize a model or a configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}


impl MiniLabError {
    /// Shorthand for [`MiniLabError::InvalidArgument`].
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }
}


/// Convenience Result type for this crate.
pub type Result<T> = std::result::Result<T, MiniLabError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MiniLabError::invalid("need at least 1 sample");
        assert_eq!(
            format!("{err}"),
            "Invalid argument: need at least 1 sample"
        );

        let err = MiniLabError::InvalidState("not initialized");
        assert!(format!("{err}").contains("not initialized"));
    }
}
