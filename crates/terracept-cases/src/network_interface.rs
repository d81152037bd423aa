use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::network_interface as fixture;
use terracept_harness::{attr, attr_set, attr_set_of, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/networkInterfaces`
pub struct NetworkInterface;

impl TestResource for NetworkInterface {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(NetworkInterface)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_network_interface", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("network_interface_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("ip_configuration.#", "1"))
                .with_check(attr("ip_configuration.0.private_ip_address_allocation", "Dynamic"))
                .with_check(attr_set("private_ip_address")),
        )
        .step(TestStep::import_check(config))
}

pub fn with_network_security_group(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_interface_with_network_security_group", data.clone(), resource()).step(
        TestStep::apply(fixture::with_network_security_group(&data))
            .with_check(exists(resource()))
            .with_check(attr_set_of(
                "azurerm_network_interface_security_group_association.test",
                "id",
            )),
    )
}

/// Two IP configurations; the primary flag is swapped between steps.
pub fn multiple_ip_configurations(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_interface_multiple_ip_configurations", data.clone(), resource())
        .step(
            TestStep::apply(fixture::multiple_ip_configurations(&data, true))
                .with_check(exists(resource()))
                .with_check(attr("ip_configuration.#", "2"))
                .with_check(attr("ip_configuration.0.primary", "true")),
        )
        .step(
            TestStep::apply(fixture::multiple_ip_configurations(&data, false))
                .with_check(attr("ip_configuration.0.primary", "false"))
                .with_check(attr("ip_configuration.1.primary", "true")),
        )
}

pub fn ip_forwarding(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_interface_ip_forwarding", data.clone(), resource()).step(
        TestStep::apply(fixture::ip_forwarding(&data))
            .with_check(exists(resource()))
            .with_check(attr("enable_ip_forwarding", "true")),
    )
}

pub fn accelerated_networking(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_interface_accelerated_networking", data.clone(), resource()).step(
        TestStep::apply(fixture::accelerated_networking(&data))
            .with_check(exists(resource()))
            .with_check(attr("enable_accelerated_networking", "true")),
    )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_interface_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("network_interface_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![
        basic(locations),
        with_network_security_group(locations),
        multiple_ip_configurations(locations),
        ip_forwarding(locations),
        accelerated_networking(locations),
        requires_import(locations),
        disappears(locations),
    ]
}
