//! HCL fixture builders.
//!
//! Every builder is a pure function from a [`terracept_domain::TestData`]
//! (plus resource-specific options) to a configuration document. Builders
//! never touch the filesystem or the network; malformed configuration only
//! surfaces when the harness applies it.

pub mod hcl;

pub mod ddos_protection_plan;
pub mod local_network_gateway;
pub mod nat_gateway;
pub mod network_interface;
pub mod network_watcher;
pub mod private_link_service;
pub mod public_ip;
pub mod route_table;
pub mod subnet;
pub mod virtual_network;
pub mod virtual_network_gateway;

pub use hcl::{escape, preamble};
