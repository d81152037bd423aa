use terracept_domain::TestData;

use crate::hcl::preamble;

pub fn basic(data: &TestData, allocation: &str) -> String {
    format!(
        r#"{preamble}
resource "azurerm_public_ip" "test" {{
  name                = "acctestpip-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  allocation_method   = "{allocation}"
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
        allocation = allocation,
    )
}

pub fn standard_sku(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_public_ip" "test" {{
  name                = "acctestpip-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  allocation_method   = "Static"
  sku                 = "Standard"
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn with_tags(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_public_ip" "test" {{
  name                = "acctestpip-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  allocation_method   = "Static"

  tags = {{
    environment = "Production"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_public_ip" "import" {{
  name                = azurerm_public_ip.test.name
  location            = azurerm_public_ip.test.location
  resource_group_name = azurerm_public_ip.test.resource_group_name
  allocation_method   = "Static"
}}
"#,
        base = basic(data, "Static"),
    )
}
