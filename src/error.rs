use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed sweep file '{}': {source}", .path.display())]
    SweepFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Sweep contains no experiments")]
    EmptySweep,

    #[error("Experiment {index} is invalid: size {size} and workers {workers} must both be positive")]
    InvalidConfig {
        index: usize,
        size: usize,
        workers: usize,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
