//! Munkres: optimal assignment for rectangular cost matrices
//!
//! Solves the minimum-cost (or maximum-profit) bipartite assignment problem
//! with the potential-based Hungarian (Kuhn-Munkres) method in O(n³).
//!
//! # Features
//!
//! - **Rectangular input**: matrices are padded to square internally and the
//!   padding is removed from the result
//! - **Forbidden pairs**: per-row sets of columns that must not be assigned
//! - **Optimality certificate**: final dual potentials are checked against
//!   every allowed cell
//! - **no_std Support**: builds with `alloc` only when `std` is disabled
//!
//! # Example
//!
//! ```
//! use munkres::prelude::*;
//!
//! let cost = CostMatrix::from_rows(&[[4, 1, 3], [2, 0, 5], [3, 2, 2]]).unwrap();
//! let result = solve(&cost, &SolveOptions::new()).unwrap();
//!
//! assert_eq!(result.assignments, vec![Some(1), Some(0), Some(2)]);
//! assert_eq!(result.cost, 5.0);
//! assert!(result.is_optimal);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod assignment;
pub mod error;
pub mod matrix;
pub mod options;

pub use assignment::{solve, solve_max, solve_min, Assignment, HungarianSolver};
pub use error::{ErrorKind, MunkresError};
pub use matrix::CostMatrix;
pub use options::{DisallowmentMap, SolveOptions};

pub mod prelude {
    pub use crate::assignment::{solve, solve_max, solve_min, Assignment, HungarianSolver};
    pub use crate::error::{ErrorKind, MunkresError};
    pub use crate::matrix::CostMatrix;
    pub use crate::options::{DisallowmentMap, SolveOptions};
}

pub type Result<T> = ::core::result::Result<T, MunkresError>;
