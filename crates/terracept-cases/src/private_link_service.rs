use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::private_link_service as fixture;
use terracept_harness::{attr, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/privateLinkServices`
pub struct PrivateLinkService;

impl TestResource for PrivateLinkService {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(PrivateLinkService)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_private_link_service", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("private_link_service_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("nat_ip_configuration.#", "1"))
                .with_check(attr("nat_ip_configuration.0.primary", "true")),
        )
        .step(TestStep::import_check(config))
}

pub fn complete(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("private_link_service_complete", data.clone(), resource()).step(
        TestStep::apply(fixture::complete(&data))
            .with_check(exists(resource()))
            .with_check(attr("nat_ip_configuration.#", "2"))
            .with_check(attr("nat_ip_configuration.0.private_ip_address", "10.5.1.17"))
            .with_check(attr("nat_ip_configuration.1.private_ip_address", "10.5.1.18"))
            .with_check(attr("enable_proxy_protocol", "true")),
    )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("private_link_service_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("private_link_service_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), complete(locations), requires_import(locations), disappears(locations)]
}
