use std::panic;
use std::thread;

use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::matrix::Matrix;

// Rayon splits the columns finer than one block per worker so idle workers can steal.
const CHUNKS_PER_WORKER: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    /// Scoped std threads, one contiguous block of columns each.
    Threads(usize),
    /// Dedicated rayon pool with work stealing over column chunks.
    Rayon(usize),
}

impl ExecutionMode {
    pub fn workers(&self) -> usize {
        match *self {
            ExecutionMode::Sequential => 1,
            ExecutionMode::Threads(n) | ExecutionMode::Rayon(n) => n,
        }
    }

    /// Same backend, different worker count.
    pub fn with_workers(self, nb_workers: usize) -> ExecutionMode {
        match self {
            ExecutionMode::Sequential => ExecutionMode::Sequential,
            ExecutionMode::Threads(_) => ExecutionMode::Threads(nb_workers),
            ExecutionMode::Rayon(_) => ExecutionMode::Rayon(nb_workers),
        }
    }
}

impl Matrix {

    /// Minimum over all columns of the column sum.
    ///
    /// The result does not depend on `mode`: per-worker minimums are combined
    /// with `min`, which is commutative and associative over integers.
    ///
    /// Panics if `mode` asks for zero workers.
    pub fn min_column_sum(&self, mode: ExecutionMode) -> i64 {
        match mode {
            ExecutionMode::Sequential => self.min_column_sum_seq(),
            ExecutionMode::Threads(nb_threads) => self.min_column_sum_par(nb_threads),
            ExecutionMode::Rayon(nb_threads) => match build_pool(nb_threads) {
                Ok(pool) => self.min_column_sum_in(&pool),
                Err(e) => {
                    warn!("Could not build a rayon pool of {} threads ({}), using scoped threads", nb_threads, e);
                    self.min_column_sum_par(nb_threads)
                }
            },
        }
    }

    pub fn min_column_sum_seq(&self) -> i64 {
        self.min_in_column_range(0, self.cols)
    }

    pub fn min_column_sum_par(&self, nb_threads: usize) -> i64 {
        assert!(nb_threads > 0, "Worker count must be positive");
        let nb_threads = nb_threads.min(self.cols);
        if nb_threads == 1 {
            return self.min_column_sum_seq();
        }

        let chunk_size = (self.cols + nb_threads - 1) / nb_threads;
        debug!("{} columns over {} threads, {} columns per thread", self.cols, nb_threads, chunk_size);

        thread::scope(|s| {
            let handles: Vec<_> = (0..self.cols)
                .step_by(chunk_size)
                .map(|start| {
                    let end = (start + chunk_size).min(self.cols);
                    s.spawn(move || self.min_in_column_range(start, end))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .fold(i64::MAX, i64::min)
        })
    }

    /// Runs on an existing pool, using every thread it owns.
    pub fn min_column_sum_in(&self, pool: &ThreadPool) -> i64 {
        let nb_chunks = (pool.current_num_threads() * CHUNKS_PER_WORKER).min(self.cols);
        let chunk_size = (self.cols + nb_chunks - 1) / nb_chunks;
        debug!("{} columns over a pool of {} threads, chunks of {}", self.cols, pool.current_num_threads(), chunk_size);

        pool.install(|| {
            (0..self.cols)
                .into_par_iter()
                .step_by(chunk_size)
                .map(|start| self.min_in_column_range(start, (start + chunk_size).min(self.cols)))
                .reduce(|| i64::MAX, i64::min)
        })
    }

    // Walks rows top to bottom so each worker streams through memory in order.
    fn min_in_column_range(&self, start: usize, end: usize) -> i64 {
        let mut sums = vec![0i64; end - start];
        for r in 0..self.rows {
            let row = &self.row(r)[start..end];
            for (sum, &val) in sums.iter_mut().zip(row) {
                *sum += val as i64;
            }
        }
        sums.into_iter().min().unwrap_or(i64::MAX)
    }
}

pub fn build_pool(nb_threads: usize) -> Result<ThreadPool, rayon::ThreadPoolBuildError> {
    assert!(nb_threads > 0, "Worker count must be positive");
    rayon::ThreadPoolBuilder::new()
        .num_threads(nb_threads)
        .build()
}
