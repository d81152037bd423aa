//! Live acceptance runs against a real Azure subscription.
//!
//! Ignored by default: they need the `terraform` binary on PATH, `TF_ACC=1`,
//! and `ARM_SUBSCRIPTION_ID`/`ARM_TENANT_ID` (plus `ARM_CLIENT_ID`/
//! `ARM_CLIENT_SECRET` or an `az login` session). Run with
//! `cargo test -p terracept-cases -- --ignored`.

use std::sync::Arc;

use terracept_arm::ArmClient;
use terracept_config::{Credentials, Settings};
use terracept_harness::{Runner, TestCase};

async fn run_live(case: TestCase) {
    let settings = Settings::from_env();
    let credentials = Credentials::from_env();
    settings
        .precheck(&credentials)
        .expect("acceptance environment not configured");
    let credentials = credentials.expect("checked by precheck");

    let client = Arc::new(ArmClient::new(&credentials));
    let runner = Runner::new(settings, client);
    let report = runner.run_case(&case).await;
    assert!(report.passed(), "{}", report.summary());
}

fn locations() -> terracept_domain::Locations {
    Settings::from_env().locations
}

#[tokio::test]
#[ignore = "live acceptance run; requires TF_ACC and ARM_* credentials"]
async fn virtual_network_basic() {
    run_live(terracept_cases::virtual_network::basic(&locations())).await;
}

#[tokio::test]
#[ignore = "live acceptance run; requires TF_ACC and ARM_* credentials"]
async fn local_network_gateway_basic() {
    run_live(terracept_cases::local_network_gateway::basic(&locations())).await;
}

#[tokio::test]
#[ignore = "live acceptance run; requires TF_ACC and ARM_* credentials"]
async fn route_table_disappears() {
    run_live(terracept_cases::route_table::disappears(&locations())).await;
}

#[tokio::test]
#[ignore = "live acceptance run; requires TF_ACC and ARM_* credentials"]
async fn public_ip_requires_import() {
    run_live(terracept_cases::public_ip::requires_import(&locations())).await;
}
