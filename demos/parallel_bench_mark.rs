use std::fs::File;
use std::io::Write;
use std::time::Instant;
use min_colsum_bench::matrix::build_pool;
use min_colsum_bench::{ExecutionMode, Matrix};

fn main() {
    let size = 4000;
    let seed = 123;

    let matrix = Matrix::random(size, size, seed);

    let mut file = File::create("parallel_benchmark_4000.csv").expect("Unable to create file");
    writeln!(file, "Mode,Threads,Time(s),Speedup_vs_Sequential").unwrap();

    // Baseline: Sequential
    let start = Instant::now();
    let baseline = matrix.min_column_sum(ExecutionMode::Sequential);
    let time_seq = start.elapsed().as_secs_f64();
    writeln!(file, "Sequential,1,{:.6},1.0", time_seq).unwrap();

    for threads in 1..=8 {
        // Pool startup stays out of the measurement
        let pool = build_pool(threads).expect("Failed to build rayon pool");

        for mode in [ExecutionMode::Threads(threads), ExecutionMode::Rayon(threads)] {
            let start = Instant::now();
            let parallel = match mode {
                ExecutionMode::Rayon(_) => matrix.min_column_sum_in(&pool),
                mode => matrix.min_column_sum(mode),
            };
            let time_par = start.elapsed().as_secs_f64();

            assert_eq!(baseline, parallel, "Mismatch in results between Sequential and {:?}", mode);

            writeln!(
                file,
                "{:?},{},{:.6},{:.4}",
                mode,
                threads,
                time_par,
                time_seq / time_par
            ).unwrap();
        }
    }

    println!("Benchmark results written to parallel_benchmark_4000.csv");
}
