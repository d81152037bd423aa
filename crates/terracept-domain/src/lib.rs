pub mod error;
pub mod id;
pub mod types;

mod tests;

pub use error::DomainError;
pub use id::ResourceId;
pub use types::{Locations, TestData};
