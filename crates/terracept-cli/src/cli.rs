use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "terracept",
    about = "Acceptance-test harness for Terraform-managed Azure network resources",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered test cases.
    List {
        /// Only show cases whose name contains this pattern.
        pattern: Option<String>,
    },

    /// Run test cases against a live subscription.
    ///
    /// Requires TF_ACC=1, ARM_SUBSCRIPTION_ID and ARM_TENANT_ID, plus either
    /// ARM_CLIENT_ID/ARM_CLIENT_SECRET or an `az login` session.
    Run {
        /// Only run cases whose name contains this pattern.
        pattern: Option<String>,

        /// Primary Azure region to provision into.
        #[arg(long, env = "ARM_TEST_LOCATION")]
        location: Option<String>,

        /// Maximum number of cases running concurrently. Cases sharing a
        /// quota group always run serially regardless of this setting.
        #[arg(long, default_value_t = 4)]
        parallel: usize,
    },
}
