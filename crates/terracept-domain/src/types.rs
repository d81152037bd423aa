use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Locations ─────────────────────────────────────────────────────────────────

/// The set of regions a test run provisions into. Most fixtures only use
/// `primary`; cross-region scenarios (gateway connections, peering) also use
/// `secondary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locations {
    pub primary: String,
    pub secondary: String,
    pub ternary: String,
}

impl Default for Locations {
    fn default() -> Self {
        Self {
            primary: "eastus2".into(),
            secondary: "westus2".into(),
            ternary: "centralus".into(),
        }
    }
}

// ── TestData ──────────────────────────────────────────────────────────────────

/// Randomized identity for a single test case.
///
/// Every fixture a case renders interpolates `random_integer` into resource
/// names so concurrent runs never collide, and every checker resolves the
/// case's root resource through `resource_address()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestData {
    /// 8-digit decimal suffix, unique per `TestData::new` call.
    pub random_integer: u32,
    /// Short lowercase alphanumeric suffix for resources with strict name
    /// rules (storage accounts, DNS labels).
    pub random_string: String,
    pub locations: Locations,
    /// Terraform resource type, e.g. `azurerm_virtual_network`.
    pub resource_type: String,
    /// Terraform resource label within the fixture, conventionally `test`.
    pub resource_label: String,
}

impl TestData {
    pub fn new(resource_type: impl Into<String>, resource_label: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        Self::with_seed(resource_type, resource_label, id)
    }

    /// Deterministic constructor, used by tests that assert on rendered
    /// fixture text.
    pub fn with_seed(
        resource_type: impl Into<String>,
        resource_label: impl Into<String>,
        seed: Uuid,
    ) -> Self {
        let n = seed.as_u128();
        // Keep the suffix at exactly 8 digits so generated names stay within
        // Azure length limits.
        let random_integer = 10_000_000 + (n % 90_000_000) as u32;
        let mut random_string = seed.simple().to_string();
        random_string.truncate(8);

        Self {
            random_integer,
            random_string,
            locations: Locations::default(),
            resource_type: resource_type.into(),
            resource_label: resource_label.into(),
        }
    }

    pub fn with_locations(mut self, locations: Locations) -> Self {
        self.locations = locations;
        self
    }

    /// The Terraform address of the case's root resource,
    /// e.g. `azurerm_virtual_network.test`.
    pub fn resource_address(&self) -> String {
        format!("{}.{}", self.resource_type, self.resource_label)
    }
}
