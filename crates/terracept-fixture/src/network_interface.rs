use terracept_domain::TestData;

use crate::hcl::preamble;

fn template(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvn-{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_subnet" "test" {{
  name                 = "testsubnet"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.2.0/24"]
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_network_interface" "test" {{
  name                = "acctestni-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  ip_configuration {{
    name                          = "testconfiguration1"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn with_network_security_group(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_network_security_group" "test" {{
  name                = "acctestnsg-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_network_interface" "test" {{
  name                = "acctestni-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  ip_configuration {{
    name                          = "testconfiguration1"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
  }}
}}

resource "azurerm_network_interface_security_group_association" "test" {{
  network_interface_id      = azurerm_network_interface.test.id
  network_security_group_id = azurerm_network_security_group.test.id
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

/// Two IP configurations; `primary_first` picks which one is primary, so the
/// update test can swap them.
pub fn multiple_ip_configurations(data: &TestData, primary_first: bool) -> String {
    let (first, second) = if primary_first { ("true", "false") } else { ("false", "true") };
    format!(
        r#"{template}
resource "azurerm_network_interface" "test" {{
  name                = "acctestni-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  ip_configuration {{
    name                          = "testconfiguration1"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
    primary                       = {first}
  }}

  ip_configuration {{
    name                          = "testconfiguration2"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
    primary                       = {second}
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
        first = first,
        second = second,
    )
}

pub fn ip_forwarding(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_network_interface" "test" {{
  name                 = "acctestni-{rand}"
  location             = azurerm_resource_group.test.location
  resource_group_name  = azurerm_resource_group.test.name
  enable_ip_forwarding = true

  ip_configuration {{
    name                          = "testconfiguration1"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn accelerated_networking(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_network_interface" "test" {{
  name                          = "acctestni-{rand}"
  location                      = azurerm_resource_group.test.location
  resource_group_name           = azurerm_resource_group.test.name
  enable_accelerated_networking = true

  ip_configuration {{
    name                          = "testconfiguration1"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_network_interface" "import" {{
  name                = azurerm_network_interface.test.name
  location            = azurerm_network_interface.test.location
  resource_group_name = azurerm_network_interface.test.resource_group_name

  ip_configuration {{
    name                          = "testconfiguration1"
    subnet_id                     = azurerm_subnet.test.id
    private_ip_address_allocation = "Dynamic"
  }}
}}
"#,
        base = basic(data),
    )
}
