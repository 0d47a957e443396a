//! # SweepLib
//!
//! Sweeplib runs an external paging simulator over a grid of workloads, page replacement
//! algorithms, and frame counts, and charts how page faults, disk reads, and disk writes change
//! with the number of frames
//!
//! The simulator is only ever driven through its command line and its one line of output, so any
//! executable honouring that contract can be swept

/// Contains the JSON configuration format and the built-in virtmem sweep
pub mod config;

/// Contains the configuration triple and the enumeration of a sweep
pub mod enumerator;

pub mod error;

/// Contains the trait for running one simulation, and the process based implementation
pub mod invoker;

/// Contains the parser for the simulator's output
pub mod parser;

/// Contains the plot composition and PNG rendering
pub mod plot;

/// Contains the ordered result table
pub mod results;

/// Contains the sweep driver
pub mod sweep;

#[cfg(test)]
mod test;

/// Contains utilities for logging, tests, and benchmarks.
pub mod util;
