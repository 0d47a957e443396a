mod config;
mod parsing;
mod results;

use crate::config::{AlgorithmConfig, PlotColor, SweepConfig, WorkloadConfig};

/// Workloads A (degenerate) and B, algorithms X, Y, Z, frame counts [1, 2]
pub(crate) fn small_config() -> SweepConfig {
    SweepConfig {
        total_pages: 2,
        workloads: vec![
            WorkloadConfig { name: "A".to_string(), degenerate: true },
            WorkloadConfig { name: "B".to_string(), degenerate: false },
        ],
        algorithms: vec![
            AlgorithmConfig { name: "X".to_string(), color: PlotColor::Blue },
            AlgorithmConfig { name: "Y".to_string(), color: PlotColor::Orange },
            AlgorithmConfig { name: "Z".to_string(), color: PlotColor::Green },
        ],
        frame_counts: vec![1, 2],
        ..SweepConfig::default()
    }
}
