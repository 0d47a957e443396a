use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use plotters::style::RGBColor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::{SweepError, SweepResult};

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
}

/// The full description of a sweep: what to run, how to run it, and where the charts go
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_simulator")]
    pub simulator: PathBuf,
    pub total_pages: u32,
    pub workloads: Vec<WorkloadConfig>,
    pub algorithms: Vec<AlgorithmConfig>,
    pub frame_counts: Vec<u32>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub file_prefix: String,
    #[serde(default = "default_image_size")]
    pub image_size: (u32, u32),
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// A simulated program. A degenerate workload can't run with the smallest frame count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    pub name: String,
    #[serde(default)]
    pub degenerate: bool,
}

/// A page replacement policy, and the colour its lines are drawn in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    pub name: String,
    pub color: PlotColor,
}

/// What to do when a single configuration fails - abort (default) or continue
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    #[default]
    #[serde(alias = "abort")]
    Abort,
    #[serde(alias = "continue")]
    Continue,
}

/// Line colours, using the matplotlib "tab" palette
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotColor {
    Blue,
    Orange,
    Green,
    Red,
    Purple,
    Brown,
    Pink,
    Gray,
    Olive,
    Cyan,
    Black,
}

impl PlotColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            PlotColor::Blue => RGBColor(31, 119, 180),
            PlotColor::Orange => RGBColor(255, 127, 14),
            PlotColor::Green => RGBColor(44, 160, 44),
            PlotColor::Red => RGBColor(214, 39, 40),
            PlotColor::Purple => RGBColor(148, 103, 189),
            PlotColor::Brown => RGBColor(140, 86, 75),
            PlotColor::Pink => RGBColor(227, 119, 194),
            PlotColor::Gray => RGBColor(127, 127, 127),
            PlotColor::Olive => RGBColor(188, 189, 34),
            PlotColor::Cyan => RGBColor(23, 190, 207),
            PlotColor::Black => RGBColor(0, 0, 0),
        }
    }
}

fn default_simulator() -> PathBuf {
    PathBuf::from("./virtmem")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_image_size() -> (u32, u32) {
    (800, 600)
}

impl Default for SweepConfig {
    /// The virtmem benchmark: three programs, three policies, 100 pages
    fn default() -> Self {
        let workload = |name: &str, degenerate| WorkloadConfig { name: name.to_string(), degenerate };
        let algorithm = |name: &str, color| AlgorithmConfig { name: name.to_string(), color };
        SweepConfig {
            simulator: default_simulator(),
            total_pages: 100,
            // sort needs at least two frames
            workloads: vec![workload("sort", true), workload("scan", false), workload("focus", false)],
            algorithms: vec![
                algorithm("rand", PlotColor::Blue),
                algorithm("fifo", PlotColor::Orange),
                algorithm("custom", PlotColor::Green),
            ],
            frame_counts: vec![1, 2, 10, 25, 50, 100],
            output_dir: default_output_dir(),
            file_prefix: String::new(),
            image_size: default_image_size(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl SweepConfig {
    /// Reads a JSON configuration. It isn't validated here, so command line overrides can be
    /// applied before a single call to [`SweepConfig::validate`]
    ///
    /// # Arguments
    ///
    /// * `path`: Path to the JSON file
    ///
    /// returns: Result<SweepConfig, SweepError>
    pub fn from_path(path: &Path) -> SweepResult<Self> {
        let file = File::open(path).map_err(|source| SweepError::ConfigIo { path: path.to_path_buf(), source })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Checks every workload and algorithm name can be passed as a single argument and used in a
    /// file name. Frame counts larger than the page count are left for the simulator to reject.
    pub fn validate(&self) -> SweepResult<()> {
        let names = self.workloads.iter().map(|w| ("workload", &w.name))
            .chain(self.algorithms.iter().map(|a| ("algorithm", &a.name)));
        for (kind, name) in names {
            if !NAME_PATTERN.is_match(name) {
                return Err(SweepError::InvalidName { kind, name: name.clone() });
            }
        }
        for frames in self.frame_counts.iter().filter(|f| **f > self.total_pages) {
            warn!(frames, total_pages = self.total_pages, "frame count exceeds the total page count");
        }
        Ok(())
    }

    /// The chart location for a workload
    pub fn chart_path(&self, workload: &str) -> PathBuf {
        self.output_dir.join(format!("{}{workload}.png", self.file_prefix))
    }
}
