use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid resource id '{id}': {message}")]
    InvalidResourceId { id: String, message: String },
}
