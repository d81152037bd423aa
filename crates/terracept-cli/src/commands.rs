use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use terracept_arm::ArmClient;
use terracept_cases::{all_cases, schedule};
use terracept_config::{Credentials, Settings};
use terracept_harness::{Runner, RunReport, TestCase};
use tracing::info;

use crate::output;

pub fn list(pattern: Option<String>) -> Result<()> {
    let settings = Settings::from_env();
    let cases = filter(all_cases(&settings.locations), pattern.as_deref());
    if cases.is_empty() {
        bail!("no cases match");
    }
    print!("{}", output::render_case_table(&cases));
    Ok(())
}

pub async fn run(pattern: Option<String>, location: Option<String>, parallel: usize) -> Result<()> {
    let mut settings = Settings::from_env();
    if let Some(location) = location {
        settings.locations.primary = location;
    }

    let credentials = Credentials::from_env();
    settings
        .precheck(&credentials)
        .context("environment precheck failed")?;
    let credentials = credentials.context("checked by precheck")?;

    let cases = filter(all_cases(&settings.locations), pattern.as_deref());
    if cases.is_empty() {
        bail!("no cases match");
    }
    info!(cases = cases.len(), location = %settings.locations.primary, "starting run");

    let client = Arc::new(ArmClient::new(&credentials));
    let runner = Arc::new(Runner::new(settings, client));

    // One task per bucket: cases sharing a quota group stay serial inside
    // their bucket, the semaphore bounds everything else.
    let semaphore = Arc::new(tokio::sync::Semaphore::new(parallel.max(1)));
    let mut handles = Vec::new();
    for bucket in schedule(cases) {
        let runner = Arc::clone(&runner);
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|_| anyhow!("semaphore closed"))?;
            let mut reports = Vec::with_capacity(bucket.len());
            for case in &bucket {
                let report = runner.run_case(case).await;
                println!("{}", report.summary());
                reports.push(report);
            }
            Ok::<Vec<RunReport>, anyhow::Error>(reports)
        }));
    }

    let mut reports = Vec::new();
    for handle in handles {
        reports.extend(handle.await.context("case task panicked")??);
    }

    print!("{}", output::render_run_summary(&reports));
    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        bail!("{} of {} cases failed", failed, reports.len());
    }
    Ok(())
}

fn filter(cases: Vec<TestCase>, pattern: Option<&str>) -> Vec<TestCase> {
    match pattern {
        Some(p) => cases.into_iter().filter(|c| c.name.contains(p)).collect(),
        None => cases,
    }
}
