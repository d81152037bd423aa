//! The acceptance suites: one module per Azure network resource type.
//!
//! Each module pairs a [`terracept_harness::TestResource`] impl (how the
//! resource is verified and deleted through ARM) with case constructors
//! built from the fixture crate. The [`registry`] collects every case and
//! assigns quota groups for resources Azure limits per region.

pub mod ddos_protection_plan;
pub mod local_network_gateway;
pub mod nat_gateway;
pub mod network_interface;
pub mod network_watcher;
pub mod private_link_service;
pub mod public_ip;
pub mod registry;
pub mod route_table;
pub mod subnet;
pub mod virtual_network;
pub mod virtual_network_gateway;

pub use registry::{all_cases, schedule};

#[cfg(test)]
mod tests {
    use serde_json::json;
    use terracept_arm::{ArmClient, BaseUrls};
    use terracept_domain::ResourceId;
    use terracept_harness::TestResource;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(server: &MockServer) -> ArmClient {
        ArmClient::with_static_token(
            "test-sub",
            "t",
            BaseUrls { management: server.uri(), login: server.uri() },
        )
    }

    #[tokio::test]
    async fn subnet_checker_resolves_child_ids() {
        let server = MockServer::start().await;
        let arm_path = "/subscriptions/test-sub/resourceGroups/acctestRG-1/providers/Microsoft.Network/virtualNetworks/acctestvirtnet1/subnets/acctestsubnet1";
        Mock::given(method("GET"))
            .and(path(arm_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "acctestsubnet1" })))
            .mount(&server)
            .await;

        let id = ResourceId::parse(arm_path).unwrap();
        assert!(id.child.is_some());
        let found = crate::subnet::Subnet.exists(&client(&server), &id).await.unwrap();
        assert!(found);
    }

    #[tokio::test]
    async fn checker_treats_404_as_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let id = ResourceId::network("test-sub", "acctestRG-1", "routeTables", "acctestrt1");
        let found = crate::route_table::RouteTable.exists(&client(&server), &id).await.unwrap();
        assert!(!found);
    }

    #[tokio::test]
    async fn checker_destroy_polls_async_delete() {
        let server = MockServer::start().await;
        let arm_path = "/subscriptions/test-sub/resourceGroups/acctestRG-1/providers/Microsoft.Network/ddosProtectionPlans/acctestddos1";
        Mock::given(method("DELETE"))
            .and(path(arm_path))
            .respond_with(
                ResponseTemplate::new(202)
                    .append_header("Azure-AsyncOperation", format!("{}/operations/1", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/operations/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "Succeeded" })))
            .mount(&server)
            .await;

        let id = ResourceId::network("test-sub", "acctestRG-1", "ddosProtectionPlans", "acctestddos1");
        crate::ddos_protection_plan::DdosProtectionPlan
            .destroy(&client(&server), &id)
            .await
            .unwrap();
    }
}
