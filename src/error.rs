use thiserror::Error;

/// Everything that can stop a line-balancing run.
///
/// All of these are fatal: the caller logs the error and exits.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid {field}: {input:?} is not a valid {expected}")]
    Parse {
        field: String,
        input: String,
        expected: &'static str,
    },

    #[error("input ended while waiting for {0}")]
    UnexpectedEof(String),

    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("invalid {field}: {reason}")]
    Invalid { field: String, reason: String },

    #[error("config file not found at {0}")]
    ConfigNotFound(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LineError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LineError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
