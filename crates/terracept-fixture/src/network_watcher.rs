use terracept_domain::TestData;

use crate::hcl::preamble;

pub fn basic(data: &TestData) -> String {
    format!(
        r#"{preamble}
resource "azurerm_network_watcher" "test" {{
  name                = "acctestnw-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}
"#,
        preamble = preamble(data),
        rand = data.random_integer,
    )
}

/// NSG flow log shipped to a storage account, with a bounded retention
/// policy. `retention_days` is the value the case asserts on.
pub fn flow_log(data: &TestData, retention_days: u32) -> String {
    format!(
        r#"{base}
resource "azurerm_network_security_group" "test" {{
  name                = "acctestnsg-{rand}"
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_storage_account" "test" {{
  name                     = "acctestsa{randstr}"
  resource_group_name      = azurerm_resource_group.test.name
  location                 = azurerm_resource_group.test.location
  account_tier             = "Standard"
  account_replication_type = "LRS"
}}

resource "azurerm_network_watcher_flow_log" "test" {{
  name                 = "acctestfl-{rand}"
  network_watcher_name = azurerm_network_watcher.test.name
  resource_group_name  = azurerm_resource_group.test.name

  network_security_group_id = azurerm_network_security_group.test.id
  storage_account_id        = azurerm_storage_account.test.id
  enabled                   = true

  retention_policy {{
    enabled = true
    days    = {days}
  }}
}}
"#,
        base = basic(data),
        rand = data.random_integer,
        randstr = data.random_string,
        days = retention_days,
    )
}

/// Packet capture on a virtual machine, written to local disk on the target.
/// The VM template is the minimal one the capture agent supports.
pub fn packet_capture_local_disk(data: &TestData) -> String {
    format!(
        r#"{base}
resource "azurerm_virtual_network" "test" {{
  name                = "acctestvn-{rand}"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.test.location
  resource_group_name = azurerm_resource_group.test.name
}}

resource "azurerm_subnet" "test" {{
  name                 = "internal"
  resource_group_name  = azurerm_resource_group.test.name
  virtual_network_name = azurerm_virtual_network.test.name
  address_prefixes     = ["10.0.2.0/24"]
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

resource "azurerm_linux_virtual_machine" "test" {{
  name                            = "acctestvm-{rand}"
  location                        = azurerm_resource_group.test.location
  resource_group_name             = azurerm_resource_group.test.name
  size                            = "Standard_F2"
  admin_username                  = "adminuser"
  admin_password                  = "Password1234!"
  disable_password_authentication = false
  network_interface_ids           = [azurerm_network_interface.test.id]

  os_disk {{
    caching              = "ReadWrite"
    storage_account_type = "Standard_LRS"
  }}

  source_image_reference {{
    publisher = "Canonical"
    offer     = "0001-com-ubuntu-server-jammy"
    sku       = "22_04-lts"
    version   = "latest"
  }}
}}

resource "azurerm_virtual_machine_extension" "test" {{
  name                       = "network-watcher"
  virtual_machine_id         = azurerm_linux_virtual_machine.test.id
  publisher                  = "Microsoft.Azure.NetworkWatcher"
  type                       = "NetworkWatcherAgentLinux"
  type_handler_version       = "1.4"
  auto_upgrade_minor_version = true
}}

resource "azurerm_network_packet_capture" "test" {{
  name                 = "acctestpc-{rand}"
  network_watcher_name = azurerm_network_watcher.test.name
  resource_group_name  = azurerm_resource_group.test.name
  target_resource_id   = azurerm_linux_virtual_machine.test.id

  storage_location {{
    file_path = "/var/captures/packet.cap"
  }}

  depends_on = [azurerm_virtual_machine_extension.test]
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
        TestData::with_seed("azurerm_network_watcher", "test", Uuid::nil())
    }

    #[test]
    fn flow_log_renders_retention_days() {
        let text = flow_log(&data(), 7);
        assert!(text.contains("retention_policy {"));
        assert!(text.contains("days    = 7"));
        assert!(text.contains("network_security_group_id = azurerm_network_security_group.test.id"));
    }

    #[test]
    fn flow_log_storage_account_uses_string_suffix() {
        let text = flow_log(&data(), 7);
        assert!(text.contains(&format!("acctestsa{}", data().random_string)));
    }

    #[test]
    fn packet_capture_targets_the_vm_and_waits_for_the_agent() {
        let text = packet_capture_local_disk(&data());
        assert!(text.contains("target_resource_id   = azurerm_linux_virtual_machine.test.id"));
        assert!(text.contains(r#"file_path = "/var/captures/packet.cap""#));
        assert!(text.contains("depends_on = [azurerm_virtual_machine_extension.test]"));
    }
}
