use terracept_domain::TestData;

use crate::hcl::preamble;

fn template(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvn-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  address_space       = ["10.0.0.0/16"]
}}

resource "azurerm_subnet" "test" {{
  name                 = "GatewaySubnet"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.1.0/24"]
}}

resource "azurerm_public_ip" "test" {{
  name                = "acctestpip-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  allocation_method   = "Dynamic"
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_virtual_network_gateway" "test" {{
  name                = "acctestvng-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  type     = "Vpn"
  vpn_type = "RouteBased"
  sku      = "Basic"

  ip_configuration {{
    public_ip_address_id          = azurerm_public_ip.test.id
    private_ip_address_allocation = "Dynamic"
    subnet_id                     = azurerm_subnet.test.id
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn sku(data: &TestData, sku: &str) -> String {
    format!(
        r#"{template}
resource "azurerm_virtual_network_gateway" "test" {{
  name                = "acctestvng-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  type     = "Vpn"
  vpn_type = "RouteBased"
  sku      = "{sku}"

  ip_configuration {{
    public_ip_address_id          = azurerm_public_ip.test.id
    private_ip_address_allocation = "Dynamic"
    subnet_id                     = azurerm_subnet.test.id
  }}
}}
"#,
        template = template(data),
        rand = data.random_integer,
        sku = sku,
    )
}

/// Gateway with an active BGP configuration.
pub fn enable_bgp(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_virtual_network_gateway" "test" {{
  name                = "acctestvng-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  type       = "Vpn"
  vpn_type   = "RouteBased"
  sku        = "VpnGw1"
  enable_bgp = true

  bgp_settings {{
    asn = 65515
  }}

  ip_configuration {{
    public_ip_address_id          = azurerm_public_ip.test.id
    private_ip_address_allocation = "Dynamic"
    subnet_id                     = azurerm_subnet.test.id
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
resource "azurerm_virtual_network_gateway" "import" {{
  name                = azurerm_virtual_network_gateway.test.name
  location            = azurerm_virtual_network_gateway.test.location
  resource_group_name = azurerm_virtual_network_gateway.test.resource_group_name

  type     = "Vpn"
  vpn_type = "RouteBased"
  sku      = "Basic"

  ip_configuration {{
    public_ip_address_id          = azurerm_public_ip.test.id
    private_ip_address_allocation = "Dynamic"
    subnet_id                     = azurerm_subnet.test.id
  }}
}}
"#,
        base = basic(data),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use terracept_domain::TestData;
    use uuid::Uuid;

    fn data() -> TestData {
        TestData::with_seed("azurerm_virtual_network_gateway", "test", Uuid::nil())
    }

    #[test]
    fn basic_uses_gateway_subnet_and_basic_sku() {
        let text = basic(&data());
        assert!(text.contains(r#"name                 = "GatewaySubnet""#));
        assert!(text.contains(r#"sku      = "Basic""#));
        assert!(text.contains(r#"vpn_type = "RouteBased""#));
    }

    #[test]
    fn sku_is_parameterized() {
        assert!(sku(&data(), "VpnGw1").contains(r#"sku      = "VpnGw1""#));
    }

    #[test]
    fn bgp_variant_sets_asn() {
        let text = enable_bgp(&data());
        assert!(text.contains("enable_bgp = true"));
        assert!(text.contains("asn = 65515"));
    }
}
