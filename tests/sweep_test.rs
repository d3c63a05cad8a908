use std::fs::{self, File};
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use min_colsum_bench::sweep::{load_sweep, validate_sweep, ExperimentConfig, SIZE_SWEEP, THREAD_SWEEP};
use min_colsum_bench::BenchError;

const SWEEP_JSON: &str = r#"[
    { "size": 1000, "workers": 4 },
    { "size": 2000, "workers": 8 },
    { "size": 500, "workers": 1 }
]"#;

fn expected_sweep() -> Vec<ExperimentConfig> {
    vec![
        ExperimentConfig::new(1000, 4),
        ExperimentConfig::new(2000, 8),
        ExperimentConfig::new(500, 1),
    ]
}

#[test]
fn test_presets_are_valid() {
    assert_eq!(THREAD_SWEEP.len(), 8);
    assert!(THREAD_SWEEP.iter().all(|c| c.size == 10_000));
    assert_eq!(THREAD_SWEEP.iter().map(|c| c.workers).collect::<Vec<_>>(), vec![2, 4, 6, 8, 10, 12, 14, 16]);

    assert_eq!(SIZE_SWEEP.len(), 14);
    assert!(validate_sweep(THREAD_SWEEP).is_ok());
    assert!(validate_sweep(SIZE_SWEEP).is_ok());
}

#[test]
fn test_load_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.json");
    fs::write(&path, SWEEP_JSON).unwrap();

    assert_eq!(load_sweep(&path).unwrap(), expected_sweep());
}

#[test]
fn test_load_gzipped_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sweep.json.gz");
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(SWEEP_JSON.as_bytes()).unwrap();
    encoder.finish().unwrap();

    assert_eq!(load_sweep(&path).unwrap(), expected_sweep());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    assert!(matches!(load_sweep(&path), Err(BenchError::Io { .. })));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{ "size": 10 }]"#).unwrap();

    assert!(matches!(load_sweep(&path), Err(BenchError::SweepFormat { .. })));
}

#[test]
fn test_load_empty_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    assert!(matches!(load_sweep(&path), Err(BenchError::EmptySweep)));
}

#[test]
fn test_zero_workers_reported_with_index() {
    let configs = vec![ExperimentConfig::new(10, 2), ExperimentConfig::new(10, 0)];

    match validate_sweep(&configs) {
        Err(BenchError::InvalidConfig { index, size, workers }) => {
            assert_eq!((index, size, workers), (1, 10, 0));
        }
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}
