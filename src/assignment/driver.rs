//! Main loop of the potential method.

use tracing::trace;

use super::matching::Matching;
use super::normalize::NormalizedProblem;
use super::potentials::Potentials;
use super::search::PathSearch;
use crate::error::MunkresError;
use crate::Result;

/// Perfect matching of a normalized problem with the potentials that
/// certify it.
#[derive(Debug, Clone)]
pub struct Solved {
    /// Matching covering every row and column
    pub matching: Matching,
    /// Final dual variables
    pub potentials: Potentials,
    /// Total potential tightenings over all iterations
    pub tightenings: usize,
}

/// Matches every row of `problem`, one augmenting path per row.
///
/// Each iteration grows the matching by exactly one pair, so after
/// `problem.size()` iterations the matching is perfect. Padded cells are
/// finite, so a perfect matching always exists.
pub fn run(problem: &NormalizedProblem) -> Result<Solved> {
    let n = problem.size();
    let mut potentials = Potentials::reduced(problem);
    let mut matching = Matching::new(n);
    let mut search = PathSearch::new(problem);
    let mut tightenings = 0;

    for row in 0..n {
        let path = search.run(row, &matching, &mut potentials)?;
        matching.augment(&path);
        tightenings += search.tightenings();

        trace!(
            row,
            path_len = path.len(),
            tightenings = search.tightenings(),
            "Row matched"
        );

        if matching.len() != row + 1 {
            return Err(MunkresError::internal(
                "augmenting path did not grow the matching",
            ));
        }
    }

    Ok(Solved {
        matching,
        potentials,
        tightenings,
    })
}
