pub mod matrix;
pub mod sweep;
pub mod generator;
pub mod report;
pub mod results;
pub mod runner;
pub mod error;

pub use matrix::{ExecutionMode, Matrix};
pub use error::BenchError;
