use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoemError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("Submission {0} not found")]
    SubmissionNotFound(u64),

    #[error("Context lookup failed: {message}")]
    Lookup { message: String },

    #[error("Outcome delivery failed: {message}")]
    Outcome { message: String },
}

pub type Result<T> = std::result::Result<T, PoemError>;
