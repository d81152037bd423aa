use terracept_domain::TestData;

use crate::hcl::preamble;

/// Standard load balancer + frontend the service attaches to. Private link
/// requires network policies disabled on the NAT subnet.
fn template(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvnet-{rand}"
  address_space       = ["10.5.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_subnet" "test" {{
  name                 = "acctestsnet-{rand}"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.5.1.0/24"]

  private_link_service_network_policies_enabled = false
}}

resource "azurerm_public_ip" "test" {{
  name                = "acctestpip-{rand}"
  sku                 = "Standard"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
  allocation_method   = "Static"
}}

resource "azurerm_lb" "test" {{
  name                = "acctestlb-{rand}"
  sku                 = "Standard"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  frontend_ip_configuration {{
    name                 = azurerm_public_ip.test.name
    public_ip_address_id = azurerm_public_ip.test.id
  }}
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_private_link_service" "test" {{
  name                = "acctestPLS-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  nat_ip_configuration {{
    name      = "primaryIpConfiguration-{rand}"
    subnet_id = azurerm_subnet.test.id
    primary   = true
  }}

  load_balancer_frontend_ip_configuration_ids = [
    azurerm_lb.test.frontend_ip_configuration[0].id,
  ]
}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

/// Static NAT IPs and both proxy-protocol and visibility settings exercised.
pub fn complete(data: &TestData) -> String {
    format!(
        r#"{template}
resource "azurerm_private_link_service" "test" {{
  name                = "acctestPLS-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name

  visibility_subscription_ids                 = [data.azurerm_client_config.current.subscription_id]
  auto_approval_subscription_ids              = [data.azurerm_client_config.current.subscription_id]
  enable_proxy_protocol                       = true

  nat_ip_configuration {{
    name                       = "primaryIpConfiguration-{rand}"
    subnet_id                  = azurerm_subnet.test.id
    private_ip_address         = "10.5.1.17"
    private_ip_address_version = "IPv4"
    primary                    = true
  }}

  nat_ip_configuration {{
    name                       = "secondaryIpConfiguration-{rand}"
    subnet_id                  = azurerm_subnet.test.id
    private_ip_address         = "10.5.1.18"
    private_ip_address_version = "IPv4"
    primary                    = false
  }}

  load_balancer_frontend_ip_configuration_ids = [
    azurerm_lb.test.frontend_ip_configuration[0].id,
  ]

  tags = {{
    env = "test"
  }}
}}

data "azurerm_client_config" "current" {{}}
"#,
        template = template(data),
        rand = data.random_integer,
    )
}

pub fn requires_import(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_private_link_service" "import" {{
  name                = azurerm_private_link_service.test.name
  location            = azurerm_private_link_service.test.location
  resource_group_name = azurerm_private_link_service.test.resource_group_name

  nat_ip_configuration {{
    name      = "primaryIpConfiguration-{rand}"
    subnet_id = azurerm_subnet.test.id
    primary   = true
  }}

  load_balancer_frontend_ip_configuration_ids = [
    azurerm_lb.test.frontend_ip_configuration[0].id,
  ]
}}
"#,
        base = basic(data),
        rand = data.random_integer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use terracept_domain::TestData;
    use uuid::Uuid;

    fn data() -> TestData {
        TestData::with_seed("azurerm_private_link_service", "test", Uuid::nil())
    }

    #[test]
    fn basic_disables_network_policies_on_the_nat_subnet() {
        let text = basic(&data());
        assert!(text.contains("private_link_service_network_policies_enabled = false"));
        assert!(text.contains("load_balancer_frontend_ip_configuration_ids"));
    }

    #[test]
    fn complete_declares_two_static_nat_ips() {
        let text = complete(&data());
        assert_eq!(text.matches("nat_ip_configuration {").count(), 2);
        assert!(text.contains(r#"private_ip_address         = "10.5.1.17""#));
        assert!(text.contains(r#"private_ip_address         = "10.5.1.18""#));
        assert!(text.contains("enable_proxy_protocol"));
    }

    #[test]
    fn requires_import_reuses_lb_frontend() {
        let text = requires_import(&data());
        assert!(text.contains(r#""azurerm_private_link_service" "import""#));
    }
}
