use rand_pcg::Pcg64;
use rand::distributions::{Distribution, Uniform};

mod reduce;

pub use reduce::{build_pool, ExecutionMode};

/// Largest value `Matrix::random` will ever produce.
pub const MAX_CELL_VALUE: i32 = 2000;

/// Dense row-major integer matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub data: Vec<i32>,
    pub rows: usize,
    pub cols: usize,
}

impl Matrix {

    pub fn new(data: Vec<i32>, rows: usize, cols: usize) -> Matrix {
        assert!(rows > 0 && cols > 0, "Matrix must have at least one row and one column, got {}x{}", rows, cols);
        assert_eq!(data.len(), rows * cols,
            "Data length {} doesn't match dimensions {}x{}",
            data.len(), rows, cols);
        Matrix {
            data,
            rows,
            cols,
        }
    }

    pub fn from_rows(rows: &[Vec<i32>]) -> Matrix {
        let nb_rows = rows.len();
        let nb_cols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), nb_cols, "Row {} has {} columns, expected {}", i, row.len(), nb_cols);
        }
        let data = rows.iter().flatten().copied().collect();
        Matrix::new(data, nb_rows, nb_cols)
    }

    pub fn filled(value: i32, rows: usize, cols: usize) -> Matrix {
        Matrix::new(vec![value; rows * cols], rows, cols)
    }

    /// Fills every cell uniformly from `[0, MAX_CELL_VALUE]`.
    pub fn random(rows: usize, cols: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = Pcg64::seed_from_u64(seed);
        let uniform = Uniform::new_inclusive(0, MAX_CELL_VALUE);
        let data = (0..rows * cols)
            .map(|_| uniform.sample(&mut rng))
            .collect::<Vec<i32>>();

        Matrix::new(data, rows, cols)
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[i32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Sum of every column, in column order.
    pub fn column_sums(&self) -> Vec<i64> {
        let mut sums = vec![0i64; self.cols];
        for r in 0..self.rows {
            for (sum, &val) in sums.iter_mut().zip(self.row(r)) {
                *sum += val as i64;
            }
        }
        sums
    }

    pub fn print(&self) {
        println!("Matrix:");
        for r in 0..self.rows {
            for val in self.row(r) {
                print!("{} ", val);
            }
            println!();
        }
    }
}
