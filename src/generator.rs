use crate::matrix::Matrix;

pub trait MatrixGenerator {
    fn generate(&mut self, rows: usize, cols: usize) -> Matrix;
}

/// Produces `Matrix::random` matrices, advancing the seed after each one so
/// consecutive experiments never see the same data.
pub struct RandomMatrixGenerator {
    next_seed: u64,
}

impl RandomMatrixGenerator {
    pub fn new(seed: u64) -> Self {
        RandomMatrixGenerator { next_seed: seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MatrixGenerator for RandomMatrixGenerator {
    fn generate(&mut self, rows: usize, cols: usize) -> Matrix {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        Matrix::random(rows, cols, seed)
    }
}
