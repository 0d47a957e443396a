use std::error::Error;
use std::path::{Path, PathBuf};
use crate::config::{FailurePolicy, PlotColor, SweepConfig};
use crate::error::SweepError;

#[test]
fn parses_json_with_defaults() -> Result<(), Box<dyn Error>> {
    let config: SweepConfig = serde_json::from_str(r#"{
        "total_pages": 64,
        "workloads": [{"name": "sort", "degenerate": true}, {"name": "scan"}],
        "algorithms": [{"name": "rand", "color": "blue"}, {"name": "fifo", "color": "orange"}],
        "frame_counts": [2, 8, 32],
        "failure_policy": "continue"
    }"#)?;
    config.validate()?;
    assert_eq!(config.simulator, PathBuf::from("./virtmem"));
    assert_eq!(config.total_pages, 64);
    assert!(config.workloads[0].degenerate);
    assert!(!config.workloads[1].degenerate);
    assert_eq!(config.algorithms[1].color, PlotColor::Orange);
    assert_eq!(config.failure_policy, FailurePolicy::Continue);
    assert_eq!(config.image_size, (800, 600));
    assert_eq!(config.chart_path("scan"), Path::new(".").join("scan.png"));
    Ok(())
}

#[test]
fn unknown_colour_is_rejected() {
    let parsed = serde_json::from_str::<SweepConfig>(r#"{
        "total_pages": 10, "workloads": [], "frame_counts": [],
        "algorithms": [{"name": "rand", "color": "mauve"}]
    }"#);
    assert!(parsed.is_err());
}

#[test]
fn names_must_be_single_tokens() {
    let mut config = SweepConfig::default();
    config.algorithms[0].name = "least recently used".to_string();
    assert!(matches!(config.validate(), Err(SweepError::InvalidName { kind: "algorithm", .. })));
    let mut config = SweepConfig::default();
    config.workloads[2].name = "../focus".to_string();
    assert!(matches!(config.validate(), Err(SweepError::InvalidName { kind: "workload", .. })));
}

#[test]
fn oversized_frame_counts_are_allowed() {
    let config = SweepConfig { frame_counts: vec![500], ..SweepConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn missing_file_is_a_config_error() {
    let result = SweepConfig::from_path(Path::new("/nonexistent/sweep.json"));
    assert!(matches!(result, Err(SweepError::ConfigIo { .. })));
}

#[test]
fn chart_path_uses_prefix() {
    let config = SweepConfig {
        output_dir: PathBuf::from("charts"),
        file_prefix: "test".to_string(),
        ..SweepConfig::default()
    };
    assert_eq!(config.chart_path("sort"), PathBuf::from("charts/testsort.png"));
}

#[test]
fn loading_leaves_validation_to_the_caller() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir().join(format!("sweeplib-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("sweep.json");
    std::fs::write(&path, r#"{
        "total_pages": 10, "frame_counts": [2],
        "workloads": [{"name": "scan"}],
        "algorithms": [{"name": "second chance", "color": "red"}]
    }"#)?;
    let mut config = SweepConfig::from_path(&path)?;
    std::fs::remove_dir_all(&dir)?;
    assert!(matches!(config.validate(), Err(SweepError::InvalidName { kind: "algorithm", .. })));
    // An override fixes the name before the one validation pass
    config.algorithms[0].name = "clock".to_string();
    assert!(config.validate().is_ok());
    Ok(())
}
