//! Partial matchings between rows and columns.

use alloc::vec;
use alloc::vec::Vec;

use super::search::AugmentingPath;

/// Injective row-to-column map together with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    row_to_col: Vec<Option<usize>>,
    col_to_row: Vec<Option<usize>>,
}

impl Matching {
    /// Creates an empty matching over a `size x size` problem.
    pub fn new(size: usize) -> Self {
        Self {
            row_to_col: vec![None; size],
            col_to_row: vec![None; size],
        }
    }

    /// Column matched to `row`, if any.
    #[inline]
    pub fn col_of(&self, row: usize) -> Option<usize> {
        self.row_to_col[row]
    }

    /// Row matched to `col`, if any.
    #[inline]
    pub fn row_of(&self, col: usize) -> Option<usize> {
        self.col_to_row[col]
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.row_to_col.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if nothing is matched.
    pub fn is_empty(&self) -> bool {
        self.row_to_col.iter().all(Option::is_none)
    }

    /// Row-indexed view.
    pub fn row_to_col(&self) -> &[Option<usize>] {
        &self.row_to_col
    }

    /// Column-indexed view.
    pub fn col_to_row(&self) -> &[Option<usize>] {
        &self.col_to_row
    }

    /// Iterates over matched `(row, col)` pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| (row, c)))
    }

    /// Flips an augmenting path into the matching.
    ///
    /// Every edge of `path` becomes matched; the matched edges it alternated
    /// with are overwritten, since each of their rows and columns also
    /// appears in one of the new edges.
    pub fn augment(&mut self, path: &AugmentingPath) {
        for &(row, col) in path.edges() {
            self.row_to_col[row] = Some(col);
            self.col_to_row[col] = Some(row);
        }
    }
}
