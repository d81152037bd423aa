use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmError {
    #[error("token acquisition failed: {0}")]
    Token(String),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("ARM returned status {status} for {url}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("ARM operation failed ({status}): {message}")]
    OperationFailed { status: String, message: String },

    #[error("ARM operation timed out after {polls} polls: {url}")]
    OperationTimedOut { polls: usize, url: String },
}
