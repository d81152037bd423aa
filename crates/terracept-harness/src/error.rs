use terracept_arm::ArmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// A resource address or attribute the check expected was not in the
    /// harness state.
    #[error("state lookup failed for {address}: {message}")]
    StateLookup { address: String, message: String },

    /// The remote API rejected or failed a call; the cause is surfaced
    /// unchanged.
    #[error("remote API error: {0}")]
    Remote(#[from] ArmError),

    /// A verified condition did not hold (resource missing after create,
    /// present after destroy, attribute mismatch).
    #[error("{0}")]
    PostCondition(String),

    /// A terraform invocation failed outright.
    #[error("terraform {operation} failed: {message}")]
    Terraform { operation: String, message: String },

    #[error("workspace error: {0}")]
    Workspace(String),
}
