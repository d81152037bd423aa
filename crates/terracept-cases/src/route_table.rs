use std::sync::Arc;

use terracept_domain::{Locations, TestData};
use terracept_fixture::route_table as fixture;
use terracept_harness::{attr, attr_set_of, exists, TestCase, TestResource, TestStep};

/// `Microsoft.Network/routeTables`
pub struct RouteTable;

impl TestResource for RouteTable {}

fn resource() -> Arc<dyn TestResource> {
    Arc::new(RouteTable)
}

fn data(locations: &Locations) -> TestData {
    TestData::new("azurerm_route_table", "test").with_locations(locations.clone())
}

pub fn basic(locations: &Locations) -> TestCase {
    let data = data(locations);
    let config = fixture::basic(&data);
    TestCase::new("route_table_basic", data, resource())
        .step(
            TestStep::apply(config.clone())
                .with_check(exists(resource()))
                .with_check(attr("route.#", "0")),
        )
        .step(TestStep::import_check(config))
}

pub fn single_route(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("route_table_single_route", data.clone(), resource()).step(
        TestStep::apply(fixture::single_route(&data))
            .with_check(exists(resource()))
            .with_check(attr("route.#", "1"))
            .with_check(attr("route.0.next_hop_type", "VirtualAppliance"))
            .with_check(attr("route.0.next_hop_in_ip_address", "10.10.1.1")),
    )
}

/// Routes can be added to an empty table and removed again in place.
pub fn route_update(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("route_table_route_update", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(attr("route.#", "0")))
        .step(TestStep::apply(fixture::single_route(&data)).with_check(attr("route.#", "1")))
        .step(TestStep::apply(fixture::basic(&data)).with_check(attr("route.#", "0")))
}

pub fn disable_bgp_route_propagation(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("route_table_disable_bgp_route_propagation", data.clone(), resource()).step(
        TestStep::apply(fixture::disable_bgp_route_propagation(&data))
            .with_check(exists(resource()))
            .with_check(attr("disable_bgp_route_propagation", "true")),
    )
}

pub fn subnet_association(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("route_table_subnet_association", data.clone(), resource()).step(
        TestStep::apply(fixture::with_subnet_association(&data))
            .with_check(exists(resource()))
            .with_check(attr_set_of("azurerm_subnet_route_table_association.test", "id")),
    )
}

pub fn requires_import(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("route_table_requires_import", data.clone(), resource())
        .step(TestStep::apply(fixture::basic(&data)).with_check(exists(resource())))
        .step(TestStep::expect_error(fixture::requires_import(&data), "already exists"))
}

pub fn disappears(locations: &Locations) -> TestCase {
    let data = data(locations);
    TestCase::new("route_table_disappears", data.clone(), resource())
        .step(TestStep::disappears(fixture::basic(&data)).with_check(exists(resource())))
}

pub fn all(locations: &Locations) -> Vec<TestCase> {
    vec![
        basic(locations),
        single_route(locations),
        route_update(locations),
        disable_bgp_route_propagation(locations),
        subnet_association(locations),
        requires_import(locations),
        disappears(locations),
    ]
}
