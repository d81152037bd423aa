use std::sync::Arc;

use terracept_domain::TestData;

use crate::check::{Check, TestResource};

/// What the runner does with a step's configuration.
pub enum StepKind {
    /// `terraform apply`, then run the step's checks against fresh state.
    Apply,
    /// `terraform plan -detailed-exitcode` must report an empty plan —
    /// verifies the previous apply left nothing to import or change.
    ImportCheck,
    /// `terraform apply` must fail and its output must contain the given
    /// text. Used by requires-import cases.
    ExpectError { contains: String },
    /// Apply, delete the root resource out-of-band through ARM, then expect
    /// `terraform plan -detailed-exitcode` to report drift (exit code 2).
    Disappears,
}

pub struct TestStep {
    pub config: String,
    pub kind: StepKind,
    pub checks: Vec<Box<dyn Check>>,
}

impl TestStep {
    pub fn apply(config: impl Into<String>) -> Self {
        Self { config: config.into(), kind: StepKind::Apply, checks: Vec::new() }
    }

    /// Re-plan `config` (normally the previous step's config) and require an
    /// empty plan.
    pub fn import_check(config: impl Into<String>) -> Self {
        Self { config: config.into(), kind: StepKind::ImportCheck, checks: Vec::new() }
    }

    pub fn expect_error(config: impl Into<String>, contains: impl Into<String>) -> Self {
        Self {
            config: config.into(),
            kind: StepKind::ExpectError { contains: contains.into() },
            checks: Vec::new(),
        }
    }

    pub fn disappears(config: impl Into<String>) -> Self {
        Self { config: config.into(), kind: StepKind::Disappears, checks: Vec::new() }
    }

    pub fn with_check(mut self, check: Box<dyn Check>) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_checks(mut self, checks: impl IntoIterator<Item = Box<dyn Check>>) -> Self {
        self.checks.extend(checks);
        self
    }
}

/// One acceptance test: a named, ordered sequence of steps over a single
/// root resource, with an optional destruction check at the end.
pub struct TestCase {
    pub name: String,
    pub data: TestData,
    pub resource: Arc<dyn TestResource>,
    pub steps: Vec<TestStep>,
    /// Verify the root resource is gone remotely after the final destroy.
    pub check_destroy: bool,
    /// Cases sharing a quota group never run concurrently — some Azure
    /// resources are limited per region (one DDoS protection plan, one
    /// network watcher).
    pub quota_group: Option<String>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, data: TestData, resource: Arc<dyn TestResource>) -> Self {
        Self {
            name: name.into(),
            data,
            resource,
            steps: Vec::new(),
            check_destroy: true,
            quota_group: None,
        }
    }

    pub fn step(mut self, step: TestStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn quota_group(mut self, group: impl Into<String>) -> Self {
        self.quota_group = Some(group.into());
        self
    }

    pub fn without_destroy_check(mut self) -> Self {
        self.check_destroy = false;
        self
    }
}
