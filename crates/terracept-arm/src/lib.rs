//! Thin, strongly-typed client for the Azure Resource Manager REST API.
//!
//! This is the remote half of every existence/destruction check: resources
//! are created by terraform, but verified (and, for disappearance tests,
//! deleted out-of-band) through this client. Read and delete only — the
//! harness never creates resources through ARM directly.

pub mod client;
pub mod error;
pub mod token;

pub use client::{ArmClient, BaseUrls, NETWORK_API_VERSION};
pub use error::ArmError;
pub use token::{StaticToken, TokenProvider};
