use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use min_colsum_bench::generator::RandomMatrixGenerator;
use min_colsum_bench::report::ConsoleReporter;
use min_colsum_bench::runner::ExperimentRunner;
use min_colsum_bench::sweep::{self, ExperimentConfig, SIZE_SWEEP, THREAD_SWEEP};
use min_colsum_bench::ExecutionMode;

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Size 10000, 2 to 16 workers
    Threads,
    /// Sizes 1000 to 50000, at 4 then 8 workers
    Sizes,
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    Threads,
    Rayon,
}

/// Times the minimum column sum of random square matrices, parallel vs single worker.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Built-in sweep to run
    #[arg(long, value_enum, default_value = "threads")]
    preset: Preset,

    /// JSON sweep file (optionally .gz), overrides --preset
    #[arg(long)]
    sweep: Option<PathBuf>,

    /// Where the timings are written
    #[arg(long, default_value = "results.csv")]
    output: PathBuf,

    #[arg(long, value_enum, default_value = "threads")]
    backend: Backend,

    /// Seed for reproducible matrices
    #[arg(long)]
    seed: Option<u64>,

    /// Print every generated matrix
    #[arg(long)]
    print_matrix: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let configs: Vec<ExperimentConfig> = match &args.sweep {
        Some(path) => match sweep::load_sweep(path) {
            Ok(configs) => configs,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => match args.preset {
            Preset::Threads => THREAD_SWEEP.to_vec(),
            Preset::Sizes => SIZE_SWEEP.to_vec(),
        },
    };

    let mode = match args.backend {
        Backend::Threads => ExecutionMode::Threads(1),
        Backend::Rayon => ExecutionMode::Rayon(1),
    };
    let generator = match args.seed {
        Some(seed) => RandomMatrixGenerator::new(seed),
        None => RandomMatrixGenerator::from_entropy(),
    };

    info!("Running {} experiments with {:?} backend", configs.len(), mode);
    let mut runner = ExperimentRunner::new(generator, ConsoleReporter, mode)
        .print_matrices(args.print_matrix);

    match runner.run_and_save(&configs, &args.output) {
        Ok(_) => println!("Data successfully written to {}", args.output.display()),
        Err(e) => {
            eprintln!("Error: Could not write to file {} ({})", args.output.display(), e);
        }
    }
}
