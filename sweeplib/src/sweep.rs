use std::time::{Duration, Instant};
use serde::Serialize;
use tracing::{debug, info, warn};
use crate::config::{FailurePolicy, SweepConfig};
use crate::enumerator::{enumerate, Configuration};
use crate::error::{SweepError, SweepResult};
use crate::invoker::SimulationRunner;
use crate::parser::{parse_output, Metrics};
use crate::results::ResultTable;

/// A configuration that failed while the sweep kept going
#[derive(Debug, Clone, Serialize)]
pub struct FailedRun {
    pub configuration: Configuration,
    pub message: String,
}

/// The outcome of a sweep
#[derive(Debug)]
pub struct SweepReport {
    pub table: ResultTable,
    pub failures: Vec<FailedRun>,
    pub invocations: usize,
    pub elapsed: Duration,
}

/// Runs and parses a single configuration
pub fn run_configuration<R: SimulationRunner>(runner: &mut R, total_pages: u32, configuration: &Configuration) -> SweepResult<Metrics> {
    let output = runner.run(total_pages, configuration)?;
    Ok(parse_output(&output)?)
}

/// Runs every configuration of the sweep one after the other and collects the results
///
/// With [`FailurePolicy::Abort`] the first failing configuration ends the sweep and its error is
/// returned. With [`FailurePolicy::Continue`] failures are recorded in the report and the sweep
/// carries on without an entry for them.
///
/// # Arguments
///
/// * `config`: The sweep configuration
/// * `runner`: Runs the simulator, usually a [`crate::invoker::ProcessRunner`]
///
/// returns: Result<SweepReport, SweepError>
pub fn run_sweep<R: SimulationRunner>(config: &SweepConfig, runner: &mut R) -> SweepResult<SweepReport> {
    let start = Instant::now();
    let configurations = enumerate(&config.workloads, &config.algorithms, &config.frame_counts);
    info!(configurations = configurations.len(), total_pages = config.total_pages, "starting sweep");
    let mut table = ResultTable::new();
    let mut failures = Vec::new();
    let mut invocations = 0;
    let mut current_workload: Option<&str> = None;
    for configuration in &configurations {
        if current_workload != Some(configuration.workload.as_str()) {
            info!(workload = %configuration.workload, "sweeping workload");
            current_workload = Some(configuration.workload.as_str());
        }
        invocations += 1;
        match run_configuration(runner, config.total_pages, configuration) {
            Ok(metrics) => {
                debug!(%configuration, ?metrics, "simulation finished");
                table.insert(configuration, metrics);
            }
            Err(e) => match config.failure_policy {
                FailurePolicy::Abort => {
                    return Err(SweepError::Run { configuration: configuration.clone(), source: Box::new(e) });
                }
                FailurePolicy::Continue => {
                    warn!(%configuration, error = %e, "simulation failed, continuing");
                    failures.push(FailedRun { configuration: configuration.clone(), message: e.to_string() });
                }
            },
        }
    }
    let elapsed = start.elapsed();
    info!(invocations, failures = failures.len(), elapsed_secs = elapsed.as_secs_f64(), "sweep finished");
    Ok(SweepReport { table, failures, invocations, elapsed })
}
