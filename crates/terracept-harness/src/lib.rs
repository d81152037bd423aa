//! Test-case driver: step sequencing, state inspection, and the terraform
//! process boundary.
//!
//! A [`TestCase`] is a named sequence of [`TestStep`]s over one root
//! resource. The [`Runner`] materializes each step's fixture into a
//! workspace, drives `terraform init/apply/plan/destroy`, snapshots state
//! with `terraform show -json`, and evaluates the step's [`Check`]s. Cases
//! always end in a destroy, optionally followed by a remote destruction
//! check.

pub mod case;
pub mod check;
pub mod error;
pub mod report;
pub mod runner;
pub mod state;

pub use case::{StepKind, TestCase, TestStep};
pub use check::{attr, attr_of, attr_set, attr_set_of, exists, Check, CheckContext, TestResource};
pub use error::HarnessError;
pub use report::{RunReport, StepOutcome, StepReport};
pub use runner::Runner;
pub use state::{Attributes, StateSnapshot};
