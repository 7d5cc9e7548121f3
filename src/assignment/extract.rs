//! Mapping a solved normalized problem back to the caller's matrix.

use alloc::vec;
use alloc::vec::Vec;

use tracing::warn;

use super::driver::Solved;
use super::normalize::NormalizedProblem;
use crate::matrix::CostMatrix;

/// Result of an assignment problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// `assignments[i]` is the column given to row `i`, or `None` if the row
    /// was left unassigned (padding or a stripped forbidden pair).
    pub assignments: Vec<Option<usize>>,
    /// `inversions[j]` is the row holding column `j`, or `None`.
    pub inversions: Vec<Option<usize>>,
    /// Whether the potentials certify the returned assignment as optimal.
    pub is_optimal: bool,
    /// Total original cost of the returned pairs
    pub cost: f64,
    /// Forbidden pairs the optimum could not avoid; removed from the result
    pub stripped: Vec<(usize, usize)>,
    /// Sum of the final potentials over the normalized problem
    pub dual_bound: f64,
}

impl Assignment {
    /// Returns the number of assigned pairs.
    pub fn num_assigned(&self) -> usize {
        self.assignments.iter().filter(|x| x.is_some()).count()
    }

    /// Returns an iterator over (row, col) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignments
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| (row, c)))
    }

    /// Row assignments with `-1` marking unassigned rows.
    pub fn signed_assignments(&self) -> Vec<isize> {
        signed(&self.assignments)
    }

    /// Column owners with `-1` marking unassigned columns.
    pub fn signed_inversions(&self) -> Vec<isize> {
        signed(&self.inversions)
    }

    /// True if every row of the smaller side received a partner.
    pub fn is_complete(&self) -> bool {
        self.num_assigned() == self.assignments.len().min(self.inversions.len())
    }
}

fn signed(indices: &[Option<usize>]) -> Vec<isize> {
    indices
        .iter()
        .map(|x| x.and_then(|i| isize::try_from(i).ok()).unwrap_or(-1))
        .collect()
}

/// Builds the caller-facing [`Assignment`] from a solved problem.
///
/// Pairs in padded rows or columns are dropped. Forbidden pairs are dropped
/// too and recorded in `stripped`; their presence clears `is_optimal`,
/// since the remaining pairs are then not certified against assignments
/// that avoid every forbidden pair.
pub fn extract(matrix: &CostMatrix, problem: &NormalizedProblem, solved: &Solved) -> Assignment {
    let mut assignments = vec![None; problem.rows()];
    let mut inversions = vec![None; problem.cols()];
    let mut stripped = Vec::new();
    let mut cost = 0.0;

    for (row, col) in solved.matching.pairs() {
        if problem.is_padding(row, col) {
            continue;
        }
        if problem.is_disallowed(row, col) {
            stripped.push((row, col));
            continue;
        }
        assignments[row] = Some(col);
        inversions[col] = Some(row);
        cost += matrix.get(row, col);
    }

    if !stripped.is_empty() {
        warn!(
            count = stripped.len(),
            pairs = ?stripped,
            "Forbidden pairs forced into the optimum were left unassigned"
        );
    }

    let is_optimal = stripped.is_empty() && certify(problem, solved);

    Assignment {
        assignments,
        inversions,
        is_optimal,
        cost,
        stripped,
        dual_bound: solved.potentials.dual_objective(),
    }
}

/// Dual feasibility on every original allowed cell plus complementary
/// slackness on every matched edge.
fn certify(problem: &NormalizedProblem, solved: &Solved) -> bool {
    let potentials = &solved.potentials;

    let feasible = potentials.is_feasible(problem, |i, j| {
        !problem.is_padding(i, j) && !problem.is_disallowed(i, j)
    });

    let tight = solved
        .matching
        .pairs()
        .all(|(i, j)| potentials.is_tight(problem, i, j));

    feasible && tight && solved.matching.len() == problem.size()
}
