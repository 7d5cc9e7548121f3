//! Augmenting path search over the equality subgraph
//!
//! Grows an alternating tree from one free row. Columns join the tree only
//! through zero reduced-cost edges; when none is available the potentials
//! are tightened by the minimum slack and the scan resumes with the tree
//! intact, which keeps each search at O(n²).
//!
//! The traversal is iterative: newly reached rows go on an explicit
//! frontier, and the path is rebuilt from per-column parent pointers, so
//! stack usage does not depend on the matrix size.

use alloc::vec;
use alloc::vec::Vec;

use tracing::trace;

use super::matching::Matching;
use super::normalize::NormalizedProblem;
use super::potentials::Potentials;
use crate::error::MunkresError;
use crate::Result;

/// Edges that become matched when an augmenting path is applied.
///
/// Listed from the root row towards the free column; consecutive edges are
/// joined by the matched edges they replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    edges: Vec<(usize, usize)>,
}

impl AugmentingPath {
    /// Wraps a root-first list of `(row, col)` edges.
    pub fn new(edges: Vec<(usize, usize)>) -> Self {
        Self { edges }
    }

    /// The unmatched edges along the path.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of unmatched edges (one more than the matched edges crossed).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true for a path without edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Where one search iteration stands.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SearchState {
    /// Scan newly reached rows and look for a tight edge to a new column.
    Extend,
    /// No tight edge leaves the tree; `delta` is the minimum slack.
    NoProgress { delta: f64 },
    /// `col` is free and reachable: the path is complete.
    Success { col: usize },
    /// No unvisited column remains. Unreachable under feasible potentials.
    Exhausted,
}

/// Reusable state for augmenting path searches over one problem.
///
/// Buffers are allocated once and reset at the start of every search.
#[derive(Debug)]
pub struct PathSearch<'a> {
    problem: &'a NormalizedProblem,
    visited_rows: Vec<bool>,
    visited_cols: Vec<bool>,
    /// Minimum reduced cost from the tree to each column
    slack: Vec<f64>,
    /// Tree row achieving `slack[j]`; the parent pointer of column `j`
    slack_row: Vec<usize>,
    /// Rows added to the tree whose edges have not been scanned yet
    frontier: Vec<usize>,
    tightenings: usize,
}

impl<'a> PathSearch<'a> {
    /// Allocates search buffers for `problem`.
    pub fn new(problem: &'a NormalizedProblem) -> Self {
        let n = problem.size();
        Self {
            problem,
            visited_rows: vec![false; n],
            visited_cols: vec![false; n],
            slack: vec![f64::INFINITY; n],
            slack_row: vec![0; n],
            frontier: Vec::with_capacity(n),
            tightenings: 0,
        }
    }

    /// Number of potential tightenings performed by the last search.
    pub fn tightenings(&self) -> usize {
        self.tightenings
    }

    /// Rows in the alternating tree of the last search.
    pub fn visited_rows(&self) -> &[bool] {
        &self.visited_rows
    }

    /// Columns in the alternating tree of the last search.
    pub fn visited_cols(&self) -> &[bool] {
        &self.visited_cols
    }

    /// Finds an augmenting path from the free row `root`, tightening
    /// `potentials` as often as needed.
    pub fn run(
        &mut self,
        root: usize,
        matching: &Matching,
        potentials: &mut Potentials,
    ) -> Result<AugmentingPath> {
        if matching.col_of(root).is_some() {
            return Err(MunkresError::internal("search started from a matched row"));
        }

        self.reset();
        self.enter_row(root);

        let mut state = SearchState::Extend;
        loop {
            state = match state {
                SearchState::Extend => self.extend(matching, potentials)?,
                SearchState::NoProgress { delta } => {
                    self.tighten(delta, potentials);
                    SearchState::Extend
                }
                SearchState::Success { col } => return self.trace_path(root, col, matching),
                SearchState::Exhausted => {
                    return Err(MunkresError::internal(
                        "augmenting path search ran out of columns",
                    ))
                }
            };
        }
    }

    fn reset(&mut self) {
        self.visited_rows.fill(false);
        self.visited_cols.fill(false);
        self.slack.fill(f64::INFINITY);
        self.frontier.clear();
        self.tightenings = 0;
    }

    fn enter_row(&mut self, row: usize) {
        self.visited_rows[row] = true;
        self.frontier.push(row);
    }

    /// Scans pending rows, then either adds the closest column to the tree
    /// or reports how far the potentials must move.
    fn extend(&mut self, matching: &Matching, potentials: &Potentials) -> Result<SearchState> {
        let n = self.problem.size();

        while let Some(row) = self.frontier.pop() {
            for col in 0..n {
                if self.visited_cols[col] {
                    continue;
                }
                let reduced = potentials.reduced_cost(self.problem, row, col);
                if reduced < self.slack[col] {
                    self.slack[col] = reduced;
                    self.slack_row[col] = row;
                }
            }
        }

        let closest = (0..n)
            .filter(|&col| !self.visited_cols[col])
            .min_by(|&a, &b| self.slack[a].total_cmp(&self.slack[b]));

        let Some(col) = closest else {
            return Ok(SearchState::Exhausted);
        };

        let delta = self.slack[col];
        if delta > self.problem.epsilon() {
            return Ok(SearchState::NoProgress { delta });
        }

        self.visited_cols[col] = true;
        match matching.row_of(col) {
            None => Ok(SearchState::Success { col }),
            Some(row) if self.visited_rows[row] => Err(MunkresError::internal(
                "matched row reached twice in one alternating tree",
            )),
            Some(row) => {
                self.enter_row(row);
                Ok(SearchState::Extend)
            }
        }
    }

    fn tighten(&mut self, delta: f64, potentials: &mut Potentials) {
        potentials.tighten(delta, &self.visited_rows, &self.visited_cols);
        for (slack, _) in self
            .slack
            .iter_mut()
            .zip(&self.visited_cols)
            .filter(|(_, &seen)| !seen)
        {
            *slack -= delta;
        }
        self.tightenings += 1;
        trace!(delta, tightenings = self.tightenings, "Potentials tightened");
    }

    /// Follows parent pointers from the free column back to `root`.
    fn trace_path(&self, root: usize, free_col: usize, matching: &Matching) -> Result<AugmentingPath> {
        let n = self.problem.size();
        let mut edges = Vec::new();
        let mut col = free_col;

        loop {
            let row = self.slack_row[col];
            edges.push((row, col));
            if row == root {
                break;
            }
            if edges.len() > n {
                return Err(MunkresError::internal("augmenting path contains a cycle"));
            }
            col = matching
                .col_of(row)
                .ok_or(MunkresError::internal("tree row without a matched column"))?;
        }

        edges.reverse();
        Ok(AugmentingPath::new(edges))
    }
}
