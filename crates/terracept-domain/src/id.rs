use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A parsed Azure resource ID.
///
/// Canonical string form:
/// `/subscriptions/{sub}/resourceGroups/{rg}/providers/{ns}/{type}/{name}`
/// with an optional trailing `/{childType}/{childName}` pair for nested
/// resources (subnets under a virtual network, packet captures under a
/// network watcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceId {
    pub subscription_id: String,
    pub resource_group: String,
    /// Provider namespace, e.g. `Microsoft.Network`.
    pub namespace: String,
    /// Top-level resource type, e.g. `virtualNetworks`.
    pub resource_type: String,
    pub name: String,
    /// `(childType, childName)` for nested resources.
    pub child: Option<(String, String)>,
}

impl ResourceId {
    /// Shorthand for a top-level `Microsoft.Network` resource.
    pub fn network(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            namespace: "Microsoft.Network".into(),
            resource_type: resource_type.into(),
            name: name.into(),
            child: None,
        }
    }

    pub fn with_child(mut self, child_type: impl Into<String>, child_name: impl Into<String>) -> Self {
        self.child = Some((child_type.into(), child_name.into()));
        self
    }

    /// Parse the `/subscriptions/...` string form.
    ///
    /// Segment keywords (`subscriptions`, `resourceGroups`, `providers`) are
    /// matched case-insensitively — ARM itself is not consistent about the
    /// casing of `resourcegroups`.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        let err = |message: &str| DomainError::InvalidResourceId {
            id: id.to_string(),
            message: message.to_string(),
        };

        let segments: Vec<&str> = id.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 8 {
            return Err(err("expected at least 8 path segments"));
        }
        if !segments[0].eq_ignore_ascii_case("subscriptions") {
            return Err(err("missing 'subscriptions' segment"));
        }
        if !segments[2].eq_ignore_ascii_case("resourcegroups") {
            return Err(err("missing 'resourceGroups' segment"));
        }
        if !segments[4].eq_ignore_ascii_case("providers") {
            return Err(err("missing 'providers' segment"));
        }

        let child = match segments.len() {
            8 => None,
            10 => Some((segments[8].to_string(), segments[9].to_string())),
            _ => return Err(err("expected 8 or 10 path segments")),
        };

        Ok(Self {
            subscription_id: segments[1].to_string(),
            resource_group: segments[3].to_string(),
            namespace: segments[5].to_string(),
            resource_type: segments[6].to_string(),
            name: segments[7].to_string(),
            child,
        })
    }

    /// Render the canonical string form.
    pub fn to_arm_path(&self) -> String {
        let mut s = format!(
            "/subscriptions/{}/resourceGroups/{}/providers/{}/{}/{}",
            self.subscription_id, self.resource_group, self.namespace, self.resource_type, self.name,
        );
        if let Some((child_type, child_name)) = &self.child {
            s.push('/');
            s.push_str(child_type);
            s.push('/');
            s.push_str(child_name);
        }
        s
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_arm_path())
    }
}
