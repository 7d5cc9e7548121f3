//! Matrix normalization
//!
//! Turns a caller's `N x M` cost matrix into the square minimization problem
//! the potential method works on:
//!
//! 1. pad to `K x K`, `K = max(N, M)`, with the configured fill cost
//! 2. for maximization, replace every cost `c` by `max - c`
//! 3. overwrite forbidden cells with a sentinel that dominates every matching
//!    built only from allowed cells
//!
//! The steps run in that order; the sentinel is derived from the already
//! transformed costs.

use alloc::vec;
use alloc::vec::Vec;

use tracing::trace;

use crate::error::MunkresError;
use crate::matrix::CostMatrix;
use crate::options::SolveOptions;
use crate::Result;

/// Square, minimization-form view of an assignment problem.
#[derive(Debug, Clone)]
pub struct NormalizedProblem {
    /// Row-major `size x size` costs
    costs: Vec<f64>,
    /// Side length after padding
    size: usize,
    /// Rows in the caller's matrix
    rows: usize,
    /// Columns in the caller's matrix
    cols: usize,
    /// Row-major mask of forbidden cells
    disallowed: Vec<bool>,
    /// Cost written into forbidden cells
    sentinel: f64,
    /// Absolute tolerance for zero reduced costs
    epsilon: f64,
}

impl NormalizedProblem {
    /// Validates `matrix` and `options` and builds the normalized problem.
    pub fn new(matrix: &CostMatrix, options: &SolveOptions) -> Result<Self> {
        if matrix.is_empty() {
            return Err(MunkresError::EmptyMatrix);
        }
        matrix.check_finite()?;
        options.validate(matrix.rows(), matrix.cols())?;

        let rows = matrix.rows();
        let cols = matrix.cols();
        let size = rows.max(cols);

        let mut costs = vec![options.pad_value; size * size];
        for (i, j, c) in matrix.cells() {
            costs[i * size + j] = c;
        }

        if options.maximize {
            let max_cost = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            for c in &mut costs {
                *c = max_cost - *c;
            }
        }

        let mut disallowed = vec![false; size * size];
        for (i, j) in options.disallowed_pairs() {
            disallowed[i * size + j] = true;
        }

        // Bounds over the cells that stay finite in the normalized problem
        let (min_cost, max_cost) = costs
            .iter()
            .zip(&disallowed)
            .filter(|(_, &forbidden)| !forbidden)
            .fold(None, |acc: Option<(f64, f64)>, (&c, _)| match acc {
                Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
                None => Some((c, c)),
            })
            .unwrap_or((0.0, 0.0));

        // A matching that uses one more forbidden cell always costs more
        // than any matching that uses one fewer.
        let sentinel = max_cost + size as f64 * (max_cost - min_cost) + 1.0;
        if !sentinel.is_finite() {
            return Err(MunkresError::CostOverflow);
        }
        for (c, &forbidden) in costs.iter_mut().zip(&disallowed) {
            if forbidden {
                *c = sentinel;
            }
        }

        trace!(size, sentinel, epsilon = options.tolerance, "Normalized cost matrix");

        Ok(Self {
            costs,
            size,
            rows,
            cols,
            disallowed,
            sentinel,
            epsilon: options.tolerance,
        })
    }

    /// Side length `K` of the square problem.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of rows in the original matrix.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the original matrix.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Normalized cost at (row, col).
    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.costs[row * self.size + col]
    }

    /// One normalized row.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.size;
        &self.costs[start..start + self.size]
    }

    /// True if (row, col) was forbidden by the caller.
    #[inline]
    pub fn is_disallowed(&self, row: usize, col: usize) -> bool {
        self.disallowed[row * self.size + col]
    }

    /// True if (row, col) lies in a padded row or column.
    #[inline]
    pub fn is_padding(&self, row: usize, col: usize) -> bool {
        row >= self.rows || col >= self.cols
    }

    /// Cost written into forbidden cells.
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    /// Absolute tolerance for zero tests on reduced costs.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_passthrough() {
        let m = CostMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let p = NormalizedProblem::new(&m, &SolveOptions::new()).unwrap();

        assert_eq!(p.size(), 2);
        assert_eq!(p.row(0), &[1.0, 2.0]);
        assert_eq!(p.row(1), &[3.0, 4.0]);
        assert!(!p.is_padding(1, 1));
    }

    #[test]
    fn test_pads_missing_columns() {
        let m = CostMatrix::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();
        let p = NormalizedProblem::new(&m, &SolveOptions::new().with_pad_value(7.0)).unwrap();

        assert_eq!(p.size(), 3);
        assert_eq!(p.row(1), &[2.0, 7.0, 7.0]);
        assert!(p.is_padding(0, 1));
        assert!(!p.is_padding(2, 0));
    }

    #[test]
    fn test_pads_missing_rows() {
        let m = CostMatrix::from_rows(&[[1.0, 5.0, 2.0]]).unwrap();
        let p = NormalizedProblem::new(&m, &SolveOptions::new()).unwrap();

        assert_eq!(p.size(), 3);
        assert_eq!(p.row(0), &[1.0, 5.0, 2.0]);
        assert_eq!(p.row(2), &[0.0, 0.0, 0.0]);
        assert!(p.is_padding(2, 0));
    }

    #[test]
    fn test_maximization_transform() {
        let m = CostMatrix::from_rows(&[[1.0, 4.0], [6.0, 2.0]]).unwrap();
        let p = NormalizedProblem::new(&m, &SolveOptions::new().maximize()).unwrap();

        assert_eq!(p.row(0), &[5.0, 2.0]);
        assert_eq!(p.row(1), &[0.0, 4.0]);
    }

    #[test]
    fn test_maximization_includes_padding() {
        // Padding of -1 is below every real cost, so max stays 3
        let m = CostMatrix::from_rows(&[[3.0, 1.0]]).unwrap();
        let opts = SolveOptions::new().maximize().with_pad_value(-1.0);
        let p = NormalizedProblem::new(&m, &opts).unwrap();

        assert_eq!(p.row(0), &[0.0, 2.0]);
        assert_eq!(p.row(1), &[4.0, 4.0]);
    }

    #[test]
    fn test_sentinel_dominates() {
        let m = CostMatrix::from_rows(&[[5.0, 9.0, 0.0], [10.0, 0.0, 2.0], [8.0, 0.0, 4.0]])
            .unwrap();
        let opts = SolveOptions::new().disallow(0, 2).disallow(1, 1).disallow(2, 1);
        let p = NormalizedProblem::new(&m, &opts).unwrap();

        // Allowed cells span [2, 10]: sentinel = 10 + 3 * 8 + 1
        assert_eq!(p.sentinel(), 35.0);
        assert_eq!(p.cost(0, 2), 35.0);
        assert!(p.is_disallowed(1, 1));
        assert!(!p.is_disallowed(1, 2));
        assert!(p.sentinel() > 3.0 * 10.0);
    }

    #[test]
    fn test_sentinel_with_negative_costs() {
        let m = CostMatrix::from_rows(&[[-100.0, -1.0], [-50.0, -2.0]]).unwrap();
        let p = NormalizedProblem::new(&m, &SolveOptions::new().disallow(0, 0)).unwrap();

        // Allowed span [-50, -1]; one sentinel plus the cheapest cell must
        // still exceed the most expensive all-allowed matching.
        let worst_allowed = -1.0 + -1.0;
        assert!(p.sentinel() + -50.0 > worst_allowed);
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        let empty = CostMatrix::zeros(0, 3);
        assert_eq!(
            NormalizedProblem::new(&empty, &SolveOptions::new()).unwrap_err(),
            MunkresError::EmptyMatrix
        );

        let mut m = CostMatrix::zeros(2, 2);
        m.set(0, 1, f64::INFINITY);
        assert!(matches!(
            NormalizedProblem::new(&m, &SolveOptions::new()),
            Err(MunkresError::NonFiniteCost { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_sentinel() {
        let m = CostMatrix::from_rows(&[[f64::MAX / 2.0, -f64::MAX / 2.0], [0.0, 0.0]]).unwrap();
        let err = NormalizedProblem::new(&m, &SolveOptions::new().disallow(1, 1)).unwrap_err();
        assert_eq!(err, MunkresError::CostOverflow);
    }

    #[test]
    fn test_epsilon_ignores_cost_magnitude() {
        // A single huge cell must not widen the zero test for the others
        let small = CostMatrix::from_rows(&[[0.5, 0.25], [3.0, 1.0]]).unwrap();
        let mixed = CostMatrix::from_rows(&[[1e15, 2.0], [3.0, 1.0]]).unwrap();
        let opts = SolveOptions::new();

        let ps = NormalizedProblem::new(&small, &opts).unwrap();
        let pm = NormalizedProblem::new(&mixed, &opts).unwrap();

        assert_eq!(ps.epsilon(), opts.tolerance);
        assert_eq!(pm.epsilon(), opts.tolerance);

        let loose = SolveOptions::new().with_tolerance(0.5);
        assert_eq!(NormalizedProblem::new(&mixed, &loose).unwrap().epsilon(), 0.5);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let m = CostMatrix::from_rows(&[[1.0, 2.0], [2.0, 1.0]]).unwrap();
        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            let err = NormalizedProblem::new(&m, &SolveOptions::new().with_tolerance(tolerance))
                .unwrap_err();
            assert!(
                matches!(err, MunkresError::InvalidTolerance { .. }),
                "tolerance {} accepted",
                tolerance
            );
        }
    }
}
