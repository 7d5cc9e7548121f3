//! Dual variables for the potential method
//!
//! Maintains `u` (one value per row) and `v` (one per column) such that
//! `u[i] + v[j] <= cost(i, j)` holds for every cell, with equality on
//! every matched edge once the solve completes.

use alloc::vec::Vec;

use num_traits::Float;

use super::normalize::NormalizedProblem;

/// Rounding allowance of one reduced cost, in units of `f64::EPSILON`.
const ROUNDING_ULPS: f64 = 4.0;

/// Row and column potentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Potentials {
    /// Row potentials
    u: Vec<f64>,
    /// Column potentials
    v: Vec<f64>,
}

impl Potentials {
    /// Feasible starting potentials from row then column reduction:
    /// `u[i] = min_j cost(i, j)`, `v[j] = min_i (cost(i, j) - u[i])`.
    ///
    /// Every row and every column gets at least one zero reduced-cost edge.
    pub fn reduced(problem: &NormalizedProblem) -> Self {
        let n = problem.size();

        let u: Vec<f64> = (0..n)
            .map(|i| problem.row(i).iter().copied().fold(f64::INFINITY, f64::min))
            .collect();

        let v: Vec<f64> = (0..n)
            .map(|j| {
                (0..n)
                    .map(|i| problem.cost(i, j) - u[i])
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        Self { u, v }
    }

    /// Row potentials.
    pub fn rows(&self) -> &[f64] {
        &self.u
    }

    /// Column potentials.
    pub fn cols(&self) -> &[f64] {
        &self.v
    }

    /// `cost(i, j) - u[i] - v[j]`; non-negative under feasible potentials.
    #[inline]
    pub fn reduced_cost(&self, problem: &NormalizedProblem, row: usize, col: usize) -> f64 {
        problem.cost(row, col) - self.u[row] - self.v[col]
    }

    /// Raises every visited row by `delta` and lowers every visited column
    /// by `delta`.
    ///
    /// With `delta` equal to the minimum slack from visited rows to
    /// unvisited columns, feasibility is kept, matched edges keep zero
    /// reduced cost, and at least one unvisited column becomes reachable.
    pub fn tighten(&mut self, delta: f64, visited_rows: &[bool], visited_cols: &[bool]) {
        for (u, _) in self.u.iter_mut().zip(visited_rows).filter(|(_, &seen)| seen) {
            *u += delta;
        }
        for (v, _) in self.v.iter_mut().zip(visited_cols).filter(|(_, &seen)| seen) {
            *v -= delta;
        }
    }

    /// Sum of all potentials; a lower bound on the cost of any perfect
    /// matching of the normalized problem.
    pub fn dual_objective(&self) -> f64 {
        self.u.iter().sum::<f64>() + self.v.iter().sum::<f64>()
    }

    /// Zero tolerance for the reduced cost of (row, col).
    ///
    /// The problem's absolute `epsilon` plus the rounding error of
    /// `cost - u - v` at the magnitude of the operands of this one cell.
    /// Integer costs below 2^53 reduce exactly, so the allowance never
    /// hides a violation of a whole unit there.
    #[inline]
    pub fn tolerance_at(&self, problem: &NormalizedProblem, row: usize, col: usize) -> f64 {
        let magnitude = Float::max(
            Float::abs(problem.cost(row, col)),
            Float::max(Float::abs(self.u[row]), Float::abs(self.v[col])),
        );
        problem.epsilon() + ROUNDING_ULPS * f64::EPSILON * magnitude
    }

    /// Checks `u[i] + v[j] <= cost(i, j)` (within [`Self::tolerance_at`])
    /// for every cell accepted by `include`.
    pub fn is_feasible<F>(&self, problem: &NormalizedProblem, mut include: F) -> bool
    where
        F: FnMut(usize, usize) -> bool,
    {
        let n = problem.size();
        (0..n).all(|i| {
            (0..n)
                .filter(|&j| include(i, j))
                .all(|j| self.reduced_cost(problem, i, j) >= -self.tolerance_at(problem, i, j))
        })
    }

    /// True if the reduced cost of (row, col) is zero within
    /// [`Self::tolerance_at`].
    #[inline]
    pub fn is_tight(&self, problem: &NormalizedProblem, row: usize, col: usize) -> bool {
        Float::abs(self.reduced_cost(problem, row, col)) <= self.tolerance_at(problem, row, col)
    }
}
