use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};
use crate::enumerator::Configuration;
use crate::error::{SweepError, SweepResult};

/// Something that can run one simulation and hand back its standard output
///
/// Implemented for the real simulator process, and by in-process stubs for tests and benchmarks
pub trait SimulationRunner {
    fn run(&mut self, total_pages: u32, configuration: &Configuration) -> SweepResult<String>;
}

/// The positional arguments of one simulator invocation, in order:
/// total pages, frame count, algorithm, workload
pub fn invocation_args(total_pages: u32, configuration: &Configuration) -> [String; 4] {
    [
        total_pages.to_string(),
        configuration.frame_count.to_string(),
        configuration.algorithm.clone(),
        configuration.workload.clone(),
    ]
}

/// Runs the simulator executable as a blocking child process
///
/// Standard error is passed through to the terminal, and the exit status is only logged. There is
/// no timeout, a simulator that never exits stalls the sweep.
pub struct ProcessRunner {
    program: PathBuf,
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl SimulationRunner for ProcessRunner {
    fn run(&mut self, total_pages: u32, configuration: &Configuration) -> SweepResult<String> {
        let args = invocation_args(total_pages, configuration);
        debug!(program = %self.program.display(), ?args, "running simulator");
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| SweepError::Spawn { program: self.program.clone(), source })?;
        if !output.status.success() {
            warn!(%configuration, status = %output.status, "simulator exited unsuccessfully");
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
