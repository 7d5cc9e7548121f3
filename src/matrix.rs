//! Cost matrices for assignment problems
//!
//! Row-major dense storage, with constructors from nested rows, flat data,
//! `nalgebra` matrices, or a pairwise cost function over two value lists.

use alloc::vec;
use alloc::vec::Vec;

use nalgebra::DMatrix;
use num_traits::ToPrimitive;

use crate::error::MunkresError;
use crate::Result;

/// Dense cost matrix: `get(i, j)` is the cost of giving column (task) `j` to
/// row (agent) `i`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    /// Row-major cost data
    data: Vec<f64>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl CostMatrix {
    /// Creates a cost matrix from row-major data.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MunkresError::ShapeMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a cost matrix from a sequence of rows.
    ///
    /// Every row must have the same length. Any numeric type convertible to
    /// `f64` is accepted, so integer cost tables can be passed directly.
    pub fn from_rows<R, C>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[C]>,
        C: ToPrimitive,
    {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MunkresError::RaggedMatrix {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            for (j, c) in row.iter().enumerate() {
                let value = c
                    .to_f64()
                    .ok_or(MunkresError::UnrepresentableCost { row: i, col: j })?;
                data.push(value);
            }
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Builds a matrix by applying `cost` to every pair drawn from `agents`
    /// and `tasks`: cell `(i, j)` holds `cost(&agents[i], &tasks[j])`.
    ///
    /// Fails with [`MunkresError::EmptyMatrix`] if either list is empty.
    pub fn from_fn<A, B, C, F>(agents: &[A], tasks: &[B], mut cost: F) -> Result<Self>
    where
        C: ToPrimitive,
        F: FnMut(&A, &B) -> C,
    {
        if agents.is_empty() || tasks.is_empty() {
            return Err(MunkresError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(agents.len() * tasks.len());
        for (i, a) in agents.iter().enumerate() {
            for (j, b) in tasks.iter().enumerate() {
                let value = cost(a, b)
                    .to_f64()
                    .ok_or(MunkresError::UnrepresentableCost { row: i, col: j })?;
                data.push(value);
            }
        }

        Ok(Self {
            data,
            rows: agents.len(),
            cols: tasks.len(),
        })
    }

    /// Creates a cost matrix filled with a value.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a zero-filled cost matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns true if rows and columns are equal in number.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets the cost at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets the cost at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a mutable reference to the cost at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterates over `(row, col, cost)` for every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &c)| (idx / cols, idx % cols, c))
    }

    /// Largest entry, or `None` for an empty matrix.
    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// Checks that every cell holds a finite number.
    pub fn check_finite(&self) -> Result<()> {
        match self.cells().find(|&(_, _, c)| !c.is_finite()) {
            Some((row, col, value)) => Err(MunkresError::NonFiniteCost { row, col, value }),
            None => Ok(()),
        }
    }

    /// Converts to a `nalgebra` dynamic matrix.
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.rows, self.cols, &self.data)
    }
}

impl From<&DMatrix<f64>> for CostMatrix {
    fn from(m: &DMatrix<f64>) -> Self {
        let (rows, cols) = m.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(m[(i, j)]);
            }
        }
        Self { data, rows, cols }
    }
}

impl From<DMatrix<f64>> for CostMatrix {
    fn from(m: DMatrix<f64>) -> Self {
        Self::from(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_integers() {
        let m = CostMatrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = CostMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            MunkresError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let err = CostMatrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(err, MunkresError::ShapeMismatch { len: 3, .. }));
    }

    #[test]
    fn test_from_fn_absolute_difference() {
        let workers = [1.0, 4.0, 10.0];
        let tasks = [2.0, 3.5];
        let m = CostMatrix::from_fn(&workers, &tasks, |a: &f64, b: &f64| (a - b).abs()).unwrap();

        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 0.5);
        assert_eq!(m.get(2, 1), 6.5);
    }

    #[test]
    fn test_from_fn_empty_side() {
        let empty: [i32; 0] = [];
        let err = CostMatrix::from_fn(&empty, &[1, 2], |a, b| a + b).unwrap_err();
        assert_eq!(err, MunkresError::EmptyMatrix);
    }

    #[test]
    fn test_check_finite() {
        let mut m = CostMatrix::zeros(2, 2);
        assert!(m.check_finite().is_ok());

        m.set(1, 0, f64::NAN);
        let err = m.check_finite().unwrap_err();
        assert!(matches!(
            err,
            MunkresError::NonFiniteCost { row: 1, col: 0, .. }
        ));
    }

    #[test]
    fn test_dmatrix_conversion() {
        let dm = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let m = CostMatrix::from(&dm);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.to_dmatrix(), dm);
    }

    #[test]
    fn test_shape_and_in_place_edit() {
        let mut m = CostMatrix::filled(2, 3, 1.5);
        assert!(!m.is_square());
        assert!(CostMatrix::zeros(3, 3).is_square());

        *m.get_mut(1, 2) += 2.0;
        assert_eq!(m.get(1, 2), 3.5);
        assert_eq!(m.row(1), &[1.5, 1.5, 3.5]);
    }

    #[test]
    fn test_max_value() {
        let m = CostMatrix::from_rows(&[[3.0, -1.0], [7.5, 2.0]]).unwrap();
        assert_eq!(m.max_value(), Some(7.5));
        assert_eq!(CostMatrix::zeros(0, 0).max_value(), None);
    }
}
