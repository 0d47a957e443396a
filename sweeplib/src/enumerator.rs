use std::fmt;
use serde::Serialize;
use crate::config::{AlgorithmConfig, WorkloadConfig};

/// One simulator invocation: which program, which policy, how many frames
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Configuration {
    pub workload: String,
    pub algorithm: String,
    pub frame_count: u32,
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {} frames", self.workload, self.algorithm, self.frame_count)
    }
}

/// The frame counts a workload is run with
///
/// Degenerate workloads drop the first occurrence of the smallest frame count, everything else
/// gets the full list in its original order
pub fn applicable_frame_counts(workload: &WorkloadConfig, frame_counts: &[u32]) -> Vec<u32> {
    let mut frames = frame_counts.to_vec();
    if workload.degenerate {
        let smallest = frames.iter().enumerate().min_by_key(|(_, f)| **f).map(|(i, _)| i);
        if let Some(i) = smallest {
            frames.remove(i);
        }
    }
    frames
}

/// Builds every configuration of the sweep - workloads outermost, then algorithms, then frames
///
/// # Arguments
///
/// * `workloads`: The simulated programs
/// * `algorithms`: The replacement policies
/// * `frame_counts`: Candidate frame counts, in the order they should appear on the x axis
///
/// returns: Vec<Configuration>
pub fn enumerate(workloads: &[WorkloadConfig], algorithms: &[AlgorithmConfig], frame_counts: &[u32]) -> Vec<Configuration> {
    let mut out = Vec::new();
    for workload in workloads {
        let frames = applicable_frame_counts(workload, frame_counts);
        for algorithm in algorithms {
            out.extend(frames.iter().map(|&frame_count| Configuration {
                workload: workload.name.clone(),
                algorithm: algorithm.name.clone(),
                frame_count,
            }));
        }
    }
    out
}
