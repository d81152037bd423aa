use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", vars.join(", "))]
    MissingEnv { vars: Vec<String> },

    #[error("invalid value for {var}: {message}")]
    InvalidEnv { var: String, message: String },

    #[error("acceptance tests are gated on TF_ACC; set TF_ACC=1 to run them")]
    AcceptanceDisabled,
}
