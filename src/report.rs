use std::time::Duration;

use crate::matrix::ExecutionMode;
use crate::sweep::ExperimentConfig;

/// Everything measured for one sweep point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentSummary {
    /// 1-based position in the sweep.
    pub number: usize,
    pub config: ExperimentConfig,
    /// Backend and worker count of the timed parallel run.
    pub parallel_mode: ExecutionMode,
    pub min_sum: i64,
    pub parallel_time: Duration,
    pub min_sum_single: i64,
    pub single_time: Duration,
}

impl ExperimentSummary {
    /// `None` when the parallel run was too fast for the clock to register.
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel_time.is_zero() {
            return None;
        }
        Some(self.single_time.as_secs_f64() / self.parallel_time.as_secs_f64())
    }
}

pub trait Reporter {
    fn report(&mut self, summary: &ExperimentSummary);
}

/// Prints one banner per experiment on stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, summary: &ExperimentSummary) {
        println!("---------------------------------");
        println!("Experiment number {}", summary.number);
        println!("Matrix size: {}", summary.config.size);
        println!("Threads used: {} ({:?})", summary.config.workers, summary.parallel_mode);
        println!("Min column sum: {}", summary.min_sum);
        println!("Time: {:.6} s", summary.parallel_time.as_secs_f64());
        println!("Min column sum (single thread): {}", summary.min_sum_single);
        println!("Time (single thread): {:.6} s", summary.single_time.as_secs_f64());
        if let Some(speedup) = summary.speedup() {
            println!("Speedup: {:.2}x", speedup);
        }
    }
}
