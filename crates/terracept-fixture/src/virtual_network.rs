use terracept_domain::TestData;

use crate::hcl::{preamble, tags_block};

/// Virtual network with one inline subnet and a production tag.
pub fn basic(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvirtnet{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  subnet {{
    name           = "subnet1"
    address_prefix = "10.0.1.0/24"
  }}

  tags = {{
    environment = "Production"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// Two inline subnets, DNS servers, and a flow timeout.
pub fn complete(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                    = "acctestvirtnet{rand}"
  address_space           = ["10.0.0.0/16"]
  dns_servers             = ["10.7.7.2", "10.7.7.7"]
  location                = azurerm_resource_group.test.location
  resource_group_name     = azurerm_resource_group.test.name
  flow_timeout_in_minutes = 5

  subnet {{
    name           = "subnet1"
    address_prefix = "10.0.1.0/24"
  }}

  subnet {{
    name           = "subnet2"
    address_prefix = "10.0.2.0/24"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// No inline subnets at all — used to verify subnet removal.
pub fn no_subnet(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvirtnet{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn with_tags(data: &TestData, pairs: &[(&str, &str)]) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvirtnet{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  subnet {{
    name           = "subnet1"
    address_prefix = "10.0.1.0/24"
  }}

{tags}}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
        tags = tags_block(pairs),
    )
}

/// Virtual network attached to a DDoS protection plan. Subject to the
/// one-plan-per-region quota, so cases built on this fixture share a quota
/// group.
pub fn ddos_protection_plan(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_network_ddos_protection_plan" "test" {{
  name                = "acctestddospplan-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_virtual_network" "test" {{
  name                = "acctestvirtnet{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  ddos_protection_plan {{
    id     = azurerm_network_ddos_protection_plan.test.id
    enable = true
  }}

  subnet {{
    name           = "subnet1"
    address_prefix = "10.0.1.0/24"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// The requires-import pattern: re-declare the already-created network under
/// a second address so the provider must reject adopting it.
pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_virtual_network" "import" {{
  name                = azurerm_virtual_network.test.name
  location            = azurerm_virtual_network.test.location
  resource_group_name = azurerm_virtual_network.test.resource_group_name
  address_space       = ["10.0.0.0/16"]

  subnet {{
    name           = "subnet1"
    address_prefix = "10.0.1.0/24"
  }}
}}
"#,
        base = basic(data),
    )
}
