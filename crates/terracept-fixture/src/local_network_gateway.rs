use terracept_domain::TestData;

use crate::hcl::preamble;

/// The loopback address fixture: the gateway never has to be reachable for
/// the resource itself to provision.
pub fn basic(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_local_network_gateway" "test" {{
  name                = "acctestlng-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  gateway_address     = "127.0.0.1"
  address_space       = ["127.0.0.0/8"]
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// BGP settings on top of the loopback gateway.
pub fn bgp_settings(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_local_network_gateway" "test" {{
  name                = "acctestlng-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  gateway_address     = "127.0.0.1"
  address_space       = ["127.0.0.0/8"]

  bgp_settings {{
    asn                 = 2468
    bgp_peering_address = "10.104.1.1"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn with_tags(data: &TestData, environment: &str) -> String {
    format!(
        r#"{preamble}
resource "azurerm_local_network_gateway" "test" {{
  name                = "acctestlng-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  gateway_address     = "127.0.0.1"
  address_space       = ["127.0.0.0/8"]

  tags = {{
    environment = "{environment}"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
        environment = crate::hcl::escape(environment),
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_local_network_gateway" "import" {{
  name                = azurerm_local_network_gateway.test.name
  location            = azurerm_local_network_gateway.test.location
  resource_group_name = azurerm_local_network_gateway.test.resource_group_name
  gateway_address     = "127.0.0.1"
  address_space       = ["127.0.0.0/8"]
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
        TestData::with_seed("azurerm_local_network_gateway", "test", Uuid::nil())
    }

    #[test]
    fn basic_uses_loopback_address() {
        let text = basic(&data());
        assert!(text.contains(r#"gateway_address     = "127.0.0.1""#));
        assert!(text.contains(r#"address_space       = ["127.0.0.0/8"]"#));
    }

    #[test]
    fn bgp_settings_declares_peering_address() {
        let text = bgp_settings(&data());
        assert!(text.contains("asn                 = 2468"));
        assert!(text.contains(r#"bgp_peering_address = "10.104.1.1""#));
    }

    #[test]
    fn tags_are_escaped() {
        assert!(with_tags(&data(), "st\"aging").contains(r#"environment = "st\"aging""#));
    }
}
