use std::time::Instant;
use min_colsum_bench::matrix::build_pool;
use min_colsum_bench::Matrix;

fn main() {
    let size = 2000;
    let num_tries = 20;
    let threads = 8;

    println!("Comparing sequential vs rayon min column sum (averaged over {} tries)\n", num_tries);
    println!("Size\t\tSequential (ms)\tParallel (ms)\tSpeedup");
    println!("--------------------------------------------------------");

    let matrix = Matrix::random(size, size, 42);
    // Built once so pool startup stays out of the measurements
    let pool = build_pool(threads).expect("Failed to build rayon pool");

    let mut total_seq_duration = 0.0;
    let mut total_par_duration = 0.0;

    for _ in 0..num_tries {
        let seq_start = Instant::now();
        let seq_result = matrix.min_column_sum_seq();
        total_seq_duration += seq_start.elapsed().as_secs_f64();

        let par_start = Instant::now();
        let par_result = matrix.min_column_sum_in(&pool);
        total_par_duration += par_start.elapsed().as_secs_f64();

        assert_eq!(seq_result, par_result);
    }

    let avg_seq_duration = total_seq_duration / num_tries as f64;
    let avg_par_duration = total_par_duration / num_tries as f64;

    let speedup = avg_seq_duration / avg_par_duration;

    println!("{:<10}\t{:.2}\t\t{:.2}\t\t{:.2}x",
        size,
        avg_seq_duration * 1000.0,
        avg_par_duration * 1000.0,
        speedup);
}
