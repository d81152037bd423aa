use terracept_domain::TestData;

use crate::hcl::preamble;

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_nat_gateway" "test" {{
  name                = "acctestnatgw-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  sku_name            = "Standard"
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn complete(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_public_ip" "test" {{
  name                = "acctestpip-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  allocation_method   = "Static"
  sku                 = "Standard"
  zones               = ["1"]
}}

resource "azurerm_nat_gateway" "test" {{
  name                    = "acctestnatgw-{rand}"
  location                = azurerm_resource_group.test.location
  resource_group_name     = azurerm_resource_group.test.name
  sku_name                = "Standard"
  idle_timeout_in_minutes = 10
  zones                   = ["1"]
}}

resource "azurerm_nat_gateway_public_ip_association" "test" {{
  nat_gateway_id       = azurerm_nat_gateway.test.id
  public_ip_address_id = azurerm_public_ip.test.id
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// NAT gateway associated with a subnet — the association is the resource
/// under test.
pub fn subnet_association(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvirtnet{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_subnet" "test" {{
  name                 = "acctestsubnet{rand}"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.2.0/24"]
}}

resource "azurerm_subnet_nat_gateway_association" "test" {{
  subnet_id      = azurerm_subnet.test.id
  nat_gateway_id = azurerm_nat_gateway.test.id
}}
"#,
        base = basic(data),
        rand = data.random_integer,
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_nat_gateway" "import" {{
  name                = azurerm_nat_gateway.test.name
  location            = azurerm_nat_gateway.test.location
  resource_group_name = azurerm_nat_gateway.test.resource_group_name
  sku_name            = "Standard"
}}
"#,
        base = basic(data),
    )
}
