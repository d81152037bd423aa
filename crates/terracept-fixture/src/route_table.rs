use terracept_domain::TestData;

use crate::hcl::preamble;

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_route_table" "test" {{
  name                = "acctestrt{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// One inline route through a virtual appliance.
pub fn single_route(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_route_table" "test" {{
  name                = "acctestrt{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  route {{
    name                   = "route1"
    address_prefix         = "10.1.0.0/16"
    next_hop_type          = "VirtualAppliance"
    next_hop_in_ip_address = "10.10.1.1"
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn disable_bgp_route_propagation(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_route_table" "test" {{
  name                          = "acctestrt{rand}"
  location                      = azurerm_resource_group.test.location
  resource_group_name           = azurerm_resource_group.test.name
  disable_bgp_route_propagation = true
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// Route table associated with a subnet — exercises the association resource
/// on top of the table itself.
pub fn with_subnet_association(data: &TestData) -> String {
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

resource "azurerm_subnet_route_table_association" "test" {{
  subnet_id      = azurerm_subnet.test.id
  route_table_id = azurerm_route_table.test.id
}}
"#,
        base = basic(data),
        rand = data.random_integer,
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_route_table" "import" {{
  name                = azurerm_route_table.test.name
  location            = azurerm_route_table.test.location
  resource_group_name = azurerm_route_table.test.resource_group_name
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
        TestData::with_seed("azurerm_route_table", "test", Uuid::nil())
    }

    #[test]
    fn single_route_declares_virtual_appliance_hop() {
        let text = single_route(&data());
        assert!(text.contains(r#"next_hop_type          = "VirtualAppliance""#));
        assert!(text.contains(r#"next_hop_in_ip_address = "10.10.1.1""#));
    }

    #[test]
    fn bgp_propagation_can_be_disabled() {
        assert!(disable_bgp_route_propagation(&data())
            .contains("disable_bgp_route_propagation = true"));
    }

    #[test]
    fn association_links_subnet_and_table() {
        let text = with_subnet_association(&data());
        assert!(text.contains(r#""azurerm_subnet_route_table_association" "test""#));
        assert!(text.contains("route_table_id = azurerm_route_table.test.id"));
    }
}
