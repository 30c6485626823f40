//! Calc24 - A library for solving the 24-point puzzle
//!
//! Given four integers, this library finds every distinct way to combine them
//! with `+`, `-`, `*` and `/` into an expression equal to 24, using exact
//! fractional arithmetic, and renders each one with minimal brackets.

pub mod expression;
pub mod number;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, Operator, Rejection};
pub use number::ExactNumber;
pub use solver::{SearchReport, SearchStats, Solution, Solver, SolverConfig};
pub use utils::{UtilsError, validate_operands};

/// Find every distinct expression over `a`, `b`, `c` and `d` that equals 24
///
/// This is a convenience function that runs a default solver and returns the
/// rendered expressions in the order the search discovers them. Each operand
/// is used exactly once. An empty vector means there is no solution.
///
/// # Examples
///
/// ```
/// use calc24::search;
///
/// let solutions = search(3, 3, 8, 8);
/// assert!(solutions.contains(&"8 / (3 - 8 / 3)".to_string()));
///
/// assert!(search(1, 1, 1, 1).is_empty());
/// ```
pub fn search(a: i64, b: i64, c: i64, d: i64) -> Vec<String> {
    Solver::default()
        .solve([a, b, c, d])
        .into_iter()
        .map(|solution| solution.rendered)
        .collect()
}
