//! Assignment problem solver
//!
//! Potential-based Hungarian (Kuhn-Munkres) method, O(n³) in the padded
//! side length. The pipeline is:
//!
//! - [`normalize`]: pad to square, apply maximization, encode forbidden pairs
//! - [`potentials`]: dual variables and the tightening rule
//! - [`search`]: iterative augmenting path search over tight edges
//! - [`driver`]: one augmenting path per row
//! - [`extract`]: map back to the caller's shape and certify optimality

pub mod driver;
pub mod extract;
pub mod matching;
pub mod normalize;
pub mod potentials;
pub mod search;

pub use extract::Assignment;
pub use matching::Matching;
pub use normalize::NormalizedProblem;
pub use potentials::Potentials;
pub use search::{AugmentingPath, PathSearch};

use tracing::debug;

use crate::matrix::CostMatrix;
use crate::options::SolveOptions;
use crate::Result;

/// Solves the assignment problem described by `matrix` and `options`.
///
/// Rows are agents and columns are tasks; the matrix need not be square.
/// Every row of the smaller side is assigned unless the only way to do so
/// uses a forbidden pair, in which case that row is left unassigned and
/// [`Assignment::is_optimal`] is false.
///
/// # Errors
///
/// Returns an invalid-input error for an empty matrix, non-finite costs,
/// or forbidden pairs outside the matrix. An internal error signals a
/// broken invariant in the search and is never expected for valid input.
pub fn solve(matrix: &CostMatrix, options: &SolveOptions) -> Result<Assignment> {
    let problem = NormalizedProblem::new(matrix, options)?;

    debug!(
        rows = problem.rows(),
        cols = problem.cols(),
        size = problem.size(),
        maximize = options.maximize,
        disallowed = options.num_disallowed(),
        "Solving assignment problem"
    );

    let solved = driver::run(&problem)?;
    let assignment = extract::extract(matrix, &problem, &solved);

    debug!(
        cost = assignment.cost,
        assigned = assignment.num_assigned(),
        tightenings = solved.tightenings,
        is_optimal = assignment.is_optimal,
        "Assignment solved"
    );

    Ok(assignment)
}

/// Minimum-cost assignment with default options.
pub fn solve_min(matrix: &CostMatrix) -> Result<Assignment> {
    solve(matrix, &SolveOptions::new())
}

/// Maximum-profit assignment with default options.
pub fn solve_max(matrix: &CostMatrix) -> Result<Assignment> {
    solve(matrix, &SolveOptions::new().maximize())
}

/// Stateless solver object carrying a fixed set of options.
///
/// Holds no state between calls; one instance can serve many matrices,
/// including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct HungarianSolver {
    options: SolveOptions,
}

impl HungarianSolver {
    /// Creates a solver with the given options.
    pub fn new(options: SolveOptions) -> Self {
        Self { options }
    }

    /// The options applied to every solve.
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Solves one matrix.
    pub fn solve(&self, matrix: &CostMatrix) -> Result<Assignment> {
        solve(matrix, &self.options)
    }
}
