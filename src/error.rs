//! Error type shared by every solver.
//!
//! "No subset exists" is not an error: solvers report it as `Ok(None)`.
//! The variants here cover inputs outside the supported domain and an
//! exhausted step budget.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Only non-negative values are supported; negative elements break the
    /// `remaining < 0` pruning both solvers rely on.
    #[error("value {value} at index {index} is negative")]
    NegativeValue { index: usize, value: i64 },

    /// The requested element count is larger than the supplied sequence.
    #[error("count {count} exceeds sequence length {len}")]
    CountOutOfRange { count: usize, len: usize },

    /// The solver ran out of steps before reaching a verdict.
    #[error("step budget of {limit} exhausted before a verdict was reached")]
    BudgetExceeded { limit: usize },
}
