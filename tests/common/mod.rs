//! Common test helpers for solver integration tests

#![allow(dead_code)]

use munkres::{Assignment, CostMatrix, DisallowmentMap};
use rand::rngs::StdRng;
use rand::Rng;

/// Creates a cost matrix from integer rows
pub fn matrix<const M: usize>(rows: &[[i64; M]]) -> CostMatrix {
    CostMatrix::from_rows(rows).unwrap()
}

/// Draws an `n x m` matrix with integer-valued costs in `[lo, hi)`
pub fn random_matrix(rng: &mut StdRng, n: usize, m: usize, lo: i64, hi: i64) -> CostMatrix {
    let mut cost = CostMatrix::zeros(n, m);
    for i in 0..n {
        for j in 0..m {
            cost.set(i, j, rng.random_range(lo..hi) as f64);
        }
    }
    cost
}

/// Best total over every matching that covers the smaller side, skipping
/// forbidden pairs. `None` if no such matching exists.
pub fn brute_force(cost: &CostMatrix, maximize: bool, disallowed: &DisallowmentMap) -> Option<f64> {
    let forbidden = |i: usize, j: usize| disallowed.get(&i).is_some_and(|cols| cols.contains(&j));

    let mut best: Option<f64> = None;
    if cost.rows() <= cost.cols() {
        let mut used = vec![false; cost.cols()];
        let mut cell = |row: usize, col: usize| (!forbidden(row, col)).then(|| cost.get(row, col));
        extend(0, cost.rows(), &mut used, 0.0, &mut cell, maximize, &mut best);
    } else {
        let mut used = vec![false; cost.rows()];
        let mut cell = |col: usize, row: usize| (!forbidden(row, col)).then(|| cost.get(row, col));
        extend(0, cost.cols(), &mut used, 0.0, &mut cell, maximize, &mut best);
    }
    best
}

fn extend(
    depth: usize,
    picks: usize,
    used: &mut [bool],
    acc: f64,
    cell: &mut dyn FnMut(usize, usize) -> Option<f64>,
    maximize: bool,
    best: &mut Option<f64>,
) {
    if depth == picks {
        let better = match *best {
            None => true,
            Some(b) if maximize => acc > b,
            Some(b) => acc < b,
        };
        if better {
            *best = Some(acc);
        }
        return;
    }
    for c in 0..used.len() {
        if used[c] {
            continue;
        }
        let Some(value) = cell(depth, c) else {
            continue;
        };
        used[c] = true;
        extend(depth + 1, picks, used, acc + value, cell, maximize, best);
        used[c] = false;
    }
}

/// Checks that assignments and inversions agree and never reuse an index
pub fn assert_consistent(result: &Assignment, rows: usize, cols: usize) {
    assert_eq!(result.assignments.len(), rows);
    assert_eq!(result.inversions.len(), cols);

    let mut seen_cols = vec![false; cols];
    for (i, col) in result.assignments.iter().enumerate() {
        if let Some(j) = *col {
            assert!(j < cols, "row {} assigned to padded column {}", i, j);
            assert!(!seen_cols[j], "column {} assigned twice", j);
            seen_cols[j] = true;
            assert_eq!(result.inversions[j], Some(i), "inversion of column {}", j);
        }
    }

    let mut seen_rows = vec![false; rows];
    for (j, row) in result.inversions.iter().enumerate() {
        if let Some(i) = *row {
            assert!(i < rows, "column {} held by padded row {}", j, i);
            assert!(!seen_rows[i], "row {} holds two columns", i);
            seen_rows[i] = true;
            assert_eq!(result.assignments[i], Some(j), "assignment of row {}", i);
        }
    }
}

/// Sum of `cost` over the assigned pairs
pub fn total(cost: &CostMatrix, result: &Assignment) -> f64 {
    result.pairs().map(|(i, j)| cost.get(i, j)).sum()
}
