use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// One sweep point: an N x N matrix reduced with `workers` workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub size: usize,
    pub workers: usize,
}

impl ExperimentConfig {
    pub const fn new(size: usize, workers: usize) -> Self {
        ExperimentConfig { size, workers }
    }
}

/// Fixed matrix size, growing worker count.
pub const THREAD_SWEEP: &[ExperimentConfig] = &[
    ExperimentConfig::new(10_000, 2),
    ExperimentConfig::new(10_000, 4),
    ExperimentConfig::new(10_000, 6),
    ExperimentConfig::new(10_000, 8),
    ExperimentConfig::new(10_000, 10),
    ExperimentConfig::new(10_000, 12),
    ExperimentConfig::new(10_000, 14),
    ExperimentConfig::new(10_000, 16),
];

/// Growing matrix size at 4 and then 8 workers.
pub const SIZE_SWEEP: &[ExperimentConfig] = &[
    ExperimentConfig::new(1_000, 4),
    ExperimentConfig::new(2_000, 4),
    ExperimentConfig::new(4_000, 4),
    ExperimentConfig::new(8_000, 4),
    ExperimentConfig::new(10_000, 4),
    ExperimentConfig::new(20_000, 4),
    ExperimentConfig::new(50_000, 4),
    ExperimentConfig::new(1_000, 8),
    ExperimentConfig::new(2_000, 8),
    ExperimentConfig::new(4_000, 8),
    ExperimentConfig::new(8_000, 8),
    ExperimentConfig::new(10_000, 8),
    ExperimentConfig::new(20_000, 8),
    ExperimentConfig::new(50_000, 8),
];

/// Loads a sweep from a JSON array of `{ "size": .., "workers": .. }` objects.
/// Files ending in `.gz` are decompressed on the fly.
pub fn load_sweep(path: impl AsRef<Path>) -> Result<Vec<ExperimentConfig>> {
    let path = path.as_ref();
    info!("Loading sweep from {}", path.display());

    let file = File::open(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = if path.extension().map_or(false, |ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let configs: Vec<ExperimentConfig> = serde_json::from_reader(BufReader::new(reader))
        .map_err(|source| BenchError::SweepFormat {
            path: path.to_path_buf(),
            source,
        })?;

    validate_sweep(&configs)?;
    Ok(configs)
}

pub fn validate_sweep(configs: &[ExperimentConfig]) -> Result<()> {
    if configs.is_empty() {
        return Err(BenchError::EmptySweep);
    }
    for (index, config) in configs.iter().enumerate() {
        if config.size == 0 || config.workers == 0 {
            return Err(BenchError::InvalidConfig {
                index,
                size: config.size,
                workers: config.workers,
            });
        }
    }
    Ok(())
}
