use tracing_subscriber::{fmt, EnvFilter};
use crate::enumerator::Configuration;
use crate::error::SweepResult;
use crate::invoker::SimulationRunner;
use crate::parser::Metrics;

/// Installs the global `tracing` subscriber, logging to stderr at `info` unless `RUST_LOG` says
/// otherwise. Does nothing if a subscriber is already installed.
pub fn init_tracing() -> Result<(), String> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to initialise logging: {e}"))
}

/// Formats counters the way the simulator prints them
pub fn simulator_line(total_pages: u32, frame_count: u32, metrics: &Metrics) -> String {
    format!(
        "pages {total_pages} frames {frame_count} page faults {} disk reads {} disk writes {}\n",
        metrics.page_faults, metrics.disk_reads, metrics.disk_writes
    )
}

/// Made-up but repeatable counters for a configuration, fewer frames means more faults
pub fn deterministic_metrics(configuration: &Configuration) -> Metrics {
    let page_faults = 10_000 / u64::from(configuration.frame_count.max(1))
        + configuration.algorithm.len() as u64
        + configuration.workload.len() as u64;
    Metrics {
        page_faults,
        disk_reads: page_faults.saturating_sub(u64::from(configuration.frame_count)),
        disk_writes: page_faults / 2,
    }
}

/// An in-process stand in for the simulator, for tests and benchmarks
///
/// Every call is recorded, and the output comes from the supplied closure
pub struct StubRunner<F> {
    respond: F,
    pub calls: Vec<Configuration>,
}

impl<F: FnMut(u32, &Configuration) -> String> StubRunner<F> {
    pub fn new(respond: F) -> Self {
        Self { respond, calls: Vec::new() }
    }
}

impl StubRunner<fn(u32, &Configuration) -> String> {
    /// A stub answering every configuration with [`deterministic_metrics`]
    pub fn deterministic() -> Self {
        fn respond(total_pages: u32, configuration: &Configuration) -> String {
            simulator_line(total_pages, configuration.frame_count, &deterministic_metrics(configuration))
        }
        Self::new(respond)
    }
}

impl<F: FnMut(u32, &Configuration) -> String> SimulationRunner for StubRunner<F> {
    fn run(&mut self, total_pages: u32, configuration: &Configuration) -> SweepResult<String> {
        self.calls.push(configuration.clone());
        Ok((self.respond)(total_pages, configuration))
    }
}
