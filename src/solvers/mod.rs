//! Subset-sum solvers.
//!
//! Both implement [`SubsetSolver`](crate::traits::SubsetSolver) and can be
//! run side by side on the same [`Instance`](crate::instance::Instance):
//! - [`memoized`]   : exact include/exclude recursion with a memo table.
//! - [`best_first`] : priority-directed search over `(index, remaining)` states.

pub mod best_first;
pub mod memoized;

pub use best_first::{BestFirstSolver, SearchReport};
pub use memoized::{MemoTable, MemoizedSolver};
