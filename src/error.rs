use thiserror::Error;

/// Errors raised while loading, saving, or writing normalized models.
#[derive(Debug, Error)]
pub enum TidyError {
    /// Filesystem failure, with the path or action that failed.
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted when the error occurred.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The model JSON could not be parsed or serialized.
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Output name rejected because it would escape the output directory.
    #[error("Invalid output name '{name}': {reason}")]
    InvalidOutputName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl TidyError {
    /// Wrap an I/O error with a short description of the failed action.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        TidyError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TidyError>;
