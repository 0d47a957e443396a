use std::path::PathBuf;
use std::time::Instant;
use clap::Parser;
use sweeplib::config::{FailurePolicy, SweepConfig};
use sweeplib::enumerator::enumerate;
use sweeplib::invoker::ProcessRunner;
use sweeplib::plot::plot_workloads;
use sweeplib::sweep::run_sweep;
use sweeplib::util::init_tracing;
use tracing::info;

#[cfg(debug_assertions)]
const DEBUG_DEFAULT: bool = true;

#[cfg(not(debug_assertions))]
const DEBUG_DEFAULT: bool = false;

#[derive(Parser, Debug)]
#[command(about = String::from("Sweeps the virtmem paging simulator and charts faults, reads, and writes per frame count"))]
struct Args {
    /// JSON sweep configuration, the built-in virtmem sweep is used without one
    config: Option<PathBuf>,

    /// Simulator executable, overrides the configuration
    #[arg(short, long)]
    simulator: Option<PathBuf>,

    /// Directory the charts are written to, overrides the configuration
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Record failing configurations and carry on instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// Print the result table as JSON once the sweep is done
    #[arg(long)]
    print: bool,

    #[arg(short, long)]
    performance: bool,

    #[arg(short, long, default_value_t = DEBUG_DEFAULT)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let start = Instant::now();
    init_tracing()?;
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SweepConfig::from_path(path).map_err(|e| e.to_string())?,
        None => SweepConfig::default(),
    };
    if let Some(simulator) = args.simulator {
        config.simulator = simulator;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if args.keep_going {
        config.failure_policy = FailurePolicy::Continue;
    }
    config.validate().map_err(|e| e.to_string())?;
    if args.debug {
        #[cfg(debug_assertions)]
        println!("Running the debug binary, debug mode is enabled by default. Re-compile with the --release argument to turn it off");
        println!("Parsed sweep configuration: {config:?}");
        let configurations = enumerate(&config.workloads, &config.algorithms, &config.frame_counts);
        println!("Configurations to run: {}", configurations.len());
    }

    let mut runner = ProcessRunner::new(config.simulator.clone());
    let report = run_sweep(&config, &mut runner).map_err(|e| e.to_string())?;
    if args.print {
        println!("{}", serde_json::to_string_pretty(&report.table).map_err(|e| format!("Couldn't serialise the results {e}"))?);
    }
    let charts = plot_workloads(&config, &report.table).map_err(|e| e.to_string())?;
    info!(charts = charts.len(), "done");

    if !report.failures.is_empty() {
        println!("{} of {} configurations failed:", report.failures.len(), report.invocations);
        for failure in &report.failures {
            println!("  {}: {}", failure.configuration, failure.message);
        }
    }
    if args.performance {
        let total_time = start.elapsed();
        println!("Sweep time ({} simulator runs): {}s", report.invocations, report.elapsed.as_nanos() as f64 / 1e9);
        println!("Total execution time (includes configuration and plotting): {}s", total_time.as_nanos() as f64 / 1e9);
    }
    Ok(())
}
