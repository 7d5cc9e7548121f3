//! Solver configuration.

use alloc::collections::{BTreeMap, BTreeSet};

use crate::error::MunkresError;
use crate::Result;

/// Default absolute tolerance for reduced-cost zero tests.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Forbidden pairs, keyed by row: `map[row]` holds the columns that row may
/// not be assigned to.
pub type DisallowmentMap = BTreeMap<usize, BTreeSet<usize>>;

/// Options controlling a single solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveOptions {
    /// Maximize total cost (profit) instead of minimizing it.
    pub maximize: bool,
    /// Pairs that must not appear in the assignment.
    pub disallowed: DisallowmentMap,
    /// Cost given to cells added when padding to a square matrix.
    pub pad_value: f64,
    /// Absolute tolerance for treating a reduced cost as zero. Must be
    /// finite and non-negative.
    pub tolerance: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            maximize: false,
            disallowed: DisallowmentMap::new(),
            pad_value: 0.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolveOptions {
    /// Creates options for a plain minimization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the solve to maximization.
    pub fn maximize(mut self) -> Self {
        self.maximize = true;
        self
    }

    /// Forbids assigning `row` to `col`.
    pub fn disallow(mut self, row: usize, col: usize) -> Self {
        self.disallowed.entry(row).or_default().insert(col);
        self
    }

    /// Replaces the disallowment map.
    pub fn with_disallowed(mut self, disallowed: DisallowmentMap) -> Self {
        self.disallowed = disallowed;
        self
    }

    /// Sets the fill cost used for padded rows or columns.
    pub fn with_pad_value(mut self, pad_value: f64) -> Self {
        self.pad_value = pad_value;
        self
    }

    /// Sets the absolute zero tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Number of forbidden pairs.
    pub fn num_disallowed(&self) -> usize {
        self.disallowed.values().map(BTreeSet::len).sum()
    }

    /// Iterates over every forbidden `(row, col)` pair.
    pub fn disallowed_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.disallowed
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| (row, col)))
    }

    /// Checks the options against a `rows x cols` matrix.
    pub fn validate(&self, rows: usize, cols: usize) -> Result<()> {
        if let Some((row, col)) = self
            .disallowed_pairs()
            .find(|&(row, col)| row >= rows || col >= cols)
        {
            return Err(MunkresError::DisallowedOutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }

        if !self.pad_value.is_finite() {
            return Err(MunkresError::NonFinitePadValue {
                value: self.pad_value,
            });
        }

        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MunkresError::InvalidTolerance {
                value: self.tolerance,
            });
        }

        Ok(())
    }
}
