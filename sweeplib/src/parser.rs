use std::fmt;
use serde::Serialize;
use crate::error::ParseError;

/// Words in one line of simulator output:
/// `pages <P> frames <F> page faults <N> disk reads <N> disk writes <N>`
pub const FIELD_COUNT: usize = 13;
pub const PAGE_FAULTS_FIELD: usize = 6;
pub const DISK_READS_FIELD: usize = 9;
pub const DISK_WRITES_FIELD: usize = 12;

/// The three counters reported by the simulator
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    PageFaults,
    DiskReads,
    DiskWrites,
}

impl Metric {
    /// Draw order, also the order of the metric legend
    pub const ALL: [Metric; 3] = [Metric::PageFaults, Metric::DiskReads, Metric::DiskWrites];

    pub fn name(self) -> &'static str {
        match self {
            Metric::PageFaults => "page_faults",
            Metric::DiskReads => "disk_reads",
            Metric::DiskWrites => "disk_writes",
        }
    }

    fn field(self) -> usize {
        match self {
            Metric::PageFaults => PAGE_FAULTS_FIELD,
            Metric::DiskReads => DISK_READS_FIELD,
            Metric::DiskWrites => DISK_WRITES_FIELD,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counters from a single simulation run. No relationship between them is assumed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub page_faults: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
}

impl Metrics {
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::PageFaults => self.page_faults,
            Metric::DiskReads => self.disk_reads,
            Metric::DiskWrites => self.disk_writes,
        }
    }
}

/// Extracts the counters from the simulator's output
///
/// The word count is checked before any field is read, so a change in the output format is
/// reported rather than silently reading the wrong word
///
/// # Examples
///
/// ```
/// use sweeplib::parser::parse_output;
/// let metrics = parse_output("pages 100 frames 10 page faults 12 disk reads 10 disk writes 3\n").unwrap();
/// assert_eq!(metrics.page_faults, 12);
/// assert_eq!(metrics.disk_writes, 3);
/// ```
pub fn parse_output(output: &str) -> Result<Metrics, ParseError> {
    let words: Vec<&str> = output.split_whitespace().collect();
    if words.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: FIELD_COUNT,
            found: words.len(),
            output: output.to_string(),
        });
    }
    let counter = |metric: Metric| {
        let token = words[metric.field()];
        token.parse::<u64>().map_err(|source| ParseError::InvalidCounter {
            metric,
            token: token.to_string(),
            source,
        })
    };
    Ok(Metrics {
        page_faults: counter(Metric::PageFaults)?,
        disk_reads: counter(Metric::DiskReads)?,
        disk_writes: counter(Metric::DiskWrites)?,
    })
}
