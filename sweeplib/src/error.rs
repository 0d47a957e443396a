use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;
use crate::enumerator::Configuration;
use crate::parser::Metric;

/// Errors raised while turning one line of simulator output into counters
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected} words of simulator output, found {found}: {output:?}")]
    FieldCount {
        expected: usize,
        found: usize,
        output: String,
    },
    #[error("{metric} counter {token:?} is not a non-negative integer")]
    InvalidCounter {
        metric: Metric,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Everything that can stop a sweep or a chart from being produced
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("couldn't open the config file at path {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't parse the config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid {kind} name {name:?}, names must be a single token of [A-Za-z0-9_.-]")]
    InvalidName { kind: &'static str, name: String },
    #[error("couldn't start the simulator at {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("simulation failed for {configuration}: {source}")]
    Run {
        configuration: Configuration,
        #[source]
        source: Box<SweepError>,
    },
    #[error("couldn't render the chart at {path}: {message}")]
    Plot { path: PathBuf, message: String },
}

pub type SweepResult<T> = Result<T, SweepError>;
