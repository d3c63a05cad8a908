use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info, warn};

use crate::error::Result;
use crate::generator::MatrixGenerator;
use crate::matrix::{build_pool, ExecutionMode, Matrix};
use crate::report::{ExperimentSummary, Reporter};
use crate::results::{MeasurementRow, ResultTable, PARALLEL_HEADER, SINGLE_HEADER};
use crate::sweep::ExperimentConfig;

fn time<F: FnOnce() -> i64>(func: F) -> (i64, Duration) {
    let start = Instant::now();
    let res = func();
    (res, start.elapsed())
}

/// Runs a sweep one experiment at a time. Each experiment reduces the same
/// matrix twice: first with the configured workers, then with a single one.
pub struct ExperimentRunner<G, R> {
    generator: G,
    reporter: R,
    mode: ExecutionMode,
    print_matrix: bool,
}

impl<G: MatrixGenerator, R: Reporter> ExperimentRunner<G, R> {

    /// `mode` selects the backend; its worker count is replaced per experiment.
    /// `Sequential` has no worker count, so it runs on scoped threads.
    pub fn new(generator: G, reporter: R, mode: ExecutionMode) -> Self {
        let mode = match mode {
            ExecutionMode::Sequential => ExecutionMode::Threads(1),
            mode => mode,
        };
        ExperimentRunner {
            generator,
            reporter,
            mode,
            print_matrix: false,
        }
    }

    pub fn print_matrices(mut self, print_matrix: bool) -> Self {
        self.print_matrix = print_matrix;
        self
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn run(&mut self, configs: &[ExperimentConfig]) -> ResultTable {
        let mut parallel_times = MeasurementRow::new(PARALLEL_HEADER);
        let mut single_times = MeasurementRow::new(SINGLE_HEADER);

        for (i, config) in configs.iter().enumerate() {
            info!("Experiment {}/{}: size {}, {} workers", i + 1, configs.len(), config.size, config.workers);

            let matrix = self.generator.generate(config.size, config.size);
            if self.print_matrix {
                matrix.print();
            }

            let parallel_mode = self.mode.with_workers(config.workers);
            let (min_sum, parallel_time) = measure(&matrix, parallel_mode);
            let (min_sum_single, single_time) = measure(&matrix, self.mode.with_workers(1));

            if min_sum != min_sum_single {
                error!("Experiment {}: parallel result {} differs from single-worker result {}", i + 1, min_sum, min_sum_single);
            }

            parallel_times.push(parallel_time);
            single_times.push(single_time);

            self.reporter.report(&ExperimentSummary {
                number: i + 1,
                config: *config,
                parallel_mode,
                min_sum,
                parallel_time,
                min_sum_single,
                single_time,
            });
        }

        ResultTable::new(parallel_times, single_times)
    }

    /// Runs the whole sweep, then writes the table. A write failure is only
    /// reported once every experiment has run.
    pub fn run_and_save(&mut self, configs: &[ExperimentConfig], path: impl AsRef<Path>) -> Result<ResultTable> {
        let table = self.run(configs);
        if let Err(e) = table.write_to(path) {
            error!("Results of {} experiments were not saved: {}", table.nb_experiments(), e);
            return Err(e);
        }
        Ok(table)
    }
}

// Pools are built outside the timed region.
fn measure(matrix: &Matrix, mode: ExecutionMode) -> (i64, Duration) {
    match mode {
        ExecutionMode::Rayon(n) => match build_pool(n) {
            Ok(pool) => time(|| matrix.min_column_sum_in(&pool)),
            Err(e) => {
                warn!("Could not build a rayon pool of {} threads ({}), using scoped threads", n, e);
                time(|| matrix.min_column_sum_par(n))
            }
        },
        mode => time(|| matrix.min_column_sum(mode)),
    }
}
