use anyhow::{Context, Result};
use catalog_core::{CatalogKind, CatalogRuntime, CatalogStore, MemoryCatalog, RecordingPrompter};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::backend::{Backend, HttpCatalog};
use crate::scenarios::get_scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Bundled sample data served in-process (fast, no server)
    Memory,
    /// A running catalog API at --base-url
    Http,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub kind: CatalogKind,
    pub passed: bool,
    pub failures: Vec<String>,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

pub struct CatalogTester {
    target: Target,
    base_url: String,
    timeout: Duration,
    verbose: bool,
}

impl CatalogTester {
    pub fn new(target: Target, base_url: impl Into<String>, timeout: Duration, verbose: bool) -> Self {
        Self {
            target,
            base_url: base_url.into(),
            timeout,
            verbose,
        }
    }

    /// Fresh backend per run so scenarios never see each other's reviews
    /// when running in memory.
    fn backend(&self) -> Result<Backend> {
        match self.target {
            Target::Memory => Ok(Backend::Memory(
                MemoryCatalog::sample().context("loading bundled sample catalog")?,
            )),
            Target::Http => Ok(Backend::Http(HttpCatalog::new(
                &self.base_url,
                self.timeout,
            )?)),
        }
    }

    pub async fn run_scenario(&self, name: &str, kind: CatalogKind) -> ScenarioResult {
        let start = Instant::now();
        let outcome = self.try_run(name, kind).await;
        let duration = start.elapsed();

        let failures = match outcome {
            Ok(()) => Vec::new(),
            Err(err) => vec![format!("{err:#}")],
        };
        let passed = failures.is_empty();

        if self.verbose {
            let status = if passed { "✅".green() } else { "❌".red() };
            println!("  {status} {name} [{kind}] in {duration:?}");
        }
        log::debug!("scenario {name} on {kind} finished: passed={passed}");

        ScenarioResult {
            scenario_name: name.to_string(),
            kind,
            passed,
            failures,
            duration,
        }
    }

    async fn try_run(&self, name: &str, kind: CatalogKind) -> Result<()> {
        let scenario = get_scenario(name).with_context(|| format!("unknown scenario '{name}'"))?;
        let mut runtime = CatalogRuntime::new(
            CatalogStore::new(kind),
            self.backend()?,
            RecordingPrompter::approving(),
        );
        scenario.run(&mut runtime).await
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}
