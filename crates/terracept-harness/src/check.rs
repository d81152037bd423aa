use std::sync::Arc;

use async_trait::async_trait;
use terracept_arm::{ArmClient, ArmError};
use terracept_domain::{ResourceId, TestData};

use crate::error::HarnessError;
use crate::state::StateSnapshot;

/// Everything a check can see: the state snapshot taken after the step's
/// apply, the ARM client, and the case's test identity.
pub struct CheckContext<'a> {
    pub state: &'a StateSnapshot,
    pub client: &'a ArmClient,
    pub data: &'a TestData,
}

impl CheckContext<'_> {
    /// The parsed Azure ID of the case's root resource.
    pub fn root_id(&self) -> Result<ResourceId, HarnessError> {
        let address = self.data.resource_address();
        let raw = self.state.resource_id(&address)?;
        ResourceId::parse(raw).map_err(|e| HarnessError::StateLookup {
            address,
            message: e.to_string(),
        })
    }
}

/// A single post-apply assertion.
#[async_trait]
pub trait Check: Send + Sync {
    async fn check(&self, ctx: &CheckContext<'_>) -> Result<(), HarnessError>;

    /// Short human-readable label for reports.
    fn describe(&self) -> String;
}

// ── Remote existence ──────────────────────────────────────────────────────────

/// How the harness verifies and destroys one resource type remotely.
///
/// The defaults cover every top-level `Microsoft.Network` resource: GET the
/// ID, treat 404 as absent; DELETE the ID, polling any async operation.
/// Implementations override `api_version` when a type needs a different one.
#[async_trait]
pub trait TestResource: Send + Sync {
    fn api_version(&self) -> &str {
        terracept_arm::NETWORK_API_VERSION
    }

    async fn exists(&self, client: &ArmClient, id: &ResourceId) -> Result<bool, ArmError> {
        Ok(client.get_by_id_at(id, self.api_version()).await?.is_some())
    }

    async fn destroy(&self, client: &ArmClient, id: &ResourceId) -> Result<(), ArmError> {
        client.delete_by_id_at(id, self.api_version()).await
    }
}

// ── Ready-made checks ─────────────────────────────────────────────────────────

struct AttrCheck {
    address: Option<String>,
    key: String,
    expected: String,
}

#[async_trait]
impl Check for AttrCheck {
    async fn check(&self, ctx: &CheckContext<'_>) -> Result<(), HarnessError> {
        let address = self.address.clone().unwrap_or_else(|| ctx.data.resource_address());
        let actual = ctx.state.attribute(&address, &self.key)?;
        if actual != self.expected {
            return Err(HarnessError::PostCondition(format!(
                "{}: attribute '{}' is '{}', expected '{}'",
                address, self.key, actual, self.expected
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} == \"{}\"", self.key, self.expected)
    }
}

struct AttrSetCheck {
    address: Option<String>,
    key: String,
}

#[async_trait]
impl Check for AttrSetCheck {
    async fn check(&self, ctx: &CheckContext<'_>) -> Result<(), HarnessError> {
        let address = self.address.clone().unwrap_or_else(|| ctx.data.resource_address());
        let value = ctx.state.attribute(&address, &self.key)?;
        if value.is_empty() {
            return Err(HarnessError::PostCondition(format!(
                "{}: attribute '{}' is set but empty",
                address, self.key
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{} is set", self.key)
    }
}

struct ExistsCheck {
    resource: Arc<dyn TestResource>,
}

#[async_trait]
impl Check for ExistsCheck {
    async fn check(&self, ctx: &CheckContext<'_>) -> Result<(), HarnessError> {
        let id = ctx.root_id()?;
        if !self.resource.exists(ctx.client, &id).await? {
            return Err(HarnessError::PostCondition(format!(
                "{} '{}' does not exist in resource group '{}'",
                ctx.data.resource_type, id.name, id.resource_group
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "exists remotely".into()
    }
}

/// Assert an attribute of the case's root resource equals `expected`.
pub fn attr(key: impl Into<String>, expected: impl Into<String>) -> Box<dyn Check> {
    Box::new(AttrCheck { address: None, key: key.into(), expected: expected.into() })
}

/// Assert an attribute of an explicitly-addressed resource equals `expected`.
pub fn attr_of(
    address: impl Into<String>,
    key: impl Into<String>,
    expected: impl Into<String>,
) -> Box<dyn Check> {
    Box::new(AttrCheck {
        address: Some(address.into()),
        key: key.into(),
        expected: expected.into(),
    })
}

/// Assert an attribute of the case's root resource is set and non-empty.
pub fn attr_set(key: impl Into<String>) -> Box<dyn Check> {
    Box::new(AttrSetCheck { address: None, key: key.into() })
}

/// Assert an attribute of an explicitly-addressed resource is set and
/// non-empty.
pub fn attr_set_of(address: impl Into<String>, key: impl Into<String>) -> Box<dyn Check> {
    Box::new(AttrSetCheck { address: Some(address.into()), key: key.into() })
}

/// Assert the case's root resource exists remotely (ARM GET, 404 is failure).
pub fn exists(resource: Arc<dyn TestResource>) -> Box<dyn Check> {
    Box::new(ExistsCheck { resource })
}
