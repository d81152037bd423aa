use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::subnet as fixture;
use terracept_harness::{attr, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/virtualNetworks/subnets` — a child resource, so the
/// state-captured ID carries the parent network segment.
pub struct Subnet;

impl TestResource for Subnet {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(Subnet)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_subnet", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("subnet_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("address_prefixes.0", "10.0.2.0/24")),
        )
        .step(TestStep::import_check(config))
}

pub fn service_endpoints(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("subnet_service_endpoints", data.clone(), resource()).step(
        TestStep::apply(fixture::service_endpoints(&data))
            .with_check(exists(resource()))
            .with_check(attr("service_endpoints.#", "2"))
            .with_check(attr("service_endpoints.0", "Microsoft.Sql")),
    )
}

pub fn delegation(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("subnet_delegation", data.clone(), resource()).step(
        TestStep::apply(fixture::delegation(&data))
            .with_check(exists(resource()))
            .with_check(attr(
                "delegation.0.service_delegation.0.name",
                "Microsoft.ContainerInstance/containerGroups",
            )),
    )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("subnet_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("subnet_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![basic(locations), service_endpoints(locations), delegation(locations), requires_import(locations), disappears(locations)]
}
