use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::virtual_network as fixture;
use terracept_harness::{attr, attr_set, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/virtualNetworks`
pub struct VirtualNetwork;

impl TestResource for VirtualNetwork {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(VirtualNetwork)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_virtual_network", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("virtual_network_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr_set("id"))
                .with_check(attr("subnet.#", "1")),
        )
        .step(TestStep::import_check(config))
}

pub fn complete(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_complete", data.clone(), resource()).step(
        TestStep::apply(fixture::complete(&data))
            .with_check(exists(resource()))
            .with_check(attr("subnet.#", "2"))
            .with_check(attr("dns_servers.#", "2"))
            .with_check(attr("flow_timeout_in_minutes", "5")),
    )
}

/// Create with the production tag, then update to a different tag set.
pub fn update_tags(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_update_tags", data.clone(), resource())
        .step(
            TestStep::apply(fixture::basic(&data))
                .with_check(exists(resource()))
                .with_check(attr("tags.%", "1"))
                .with_check(attr("tags.environment", "Production")),
        )
        .step(
            TestStep::apply(fixture::with_tags(
                &data,
                &[("environment", "staging"), ("team", "networking")],
            ))
            .with_check(attr("tags.%", "2"))
            .with_check(attr("tags.environment", "staging")),
        )
}

/// Inline subnets can be removed again without recreating the network.
pub fn subnet_removal(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_subnet_removal", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(attr("subnet.#", "1")))
        .step(TestStep::apply(fixture::no_subnet(&data)).with_check(attr("subnet.#", "0")))
}

pub fn ddos_protection_plan(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_ddos_protection_plan", data.clone(), resource())
        .step(
            TestStep::apply(fixture::ddos_protection_plan(&data))
                .with_check(exists(resource()))
                .with_check(attr("ddos_protection_plan.0.enable", "true")),
        )
        .quota_group("ddos-plan")
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("virtual_network_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![
        basic(locations),
        complete(locations),
        update_tags(locations),
        subnet_removal(locations),
        ddos_protection_plan(locations),
        requires_import(locations),
        disappears(locations),
    ]
}
