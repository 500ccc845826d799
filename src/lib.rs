//! Subset-sum solvers
//!
//! Given a sequence of non-negative integers and a target, decide whether
//! some sub-multiset sums exactly to the target and, if so, produce one.
//!
//! ## Solvers
//! - [`MemoizedSolver`](solvers::MemoizedSolver): the include/exclude
//!   recurrence evaluated top-down, caching each `(index, remaining)` pair
//!   in a per-solve [`MemoTable`](solvers::MemoTable). Pseudo-polynomial,
//!   O(n × target) in the worst case.
//! - [`BestFirstSolver`](solvers::BestFirstSolver): explicit search over
//!   `(index, remaining)` states, always expanding the smallest remainder
//!   first, with value-based deduplication and parent links for
//!   reconstructing the subset.
//!
//! Both implement [`SubsetSolver`] and agree on existence for every input.
//! They may return different subsets.
//!
//! ## Quick start
//! ```
//! use subset_sum::{Instance, SolveEngine, solvers::BestFirstSolver};
//!
//! let engine = SolveEngine::new(BestFirstSolver);
//! let found = engine.solve(&Instance::new(vec![1, 2, 3, 4, 5], 9)).unwrap();
//! assert_eq!(found.map(|s| s.iter().sum::<i64>()), Some(9));
//!
//! let none = engine.solve(&Instance::new(vec![2, 4, 6], 7)).unwrap();
//! assert!(none.is_none());
//! ```
//!
//! ## Input domain
//! Values must be non-negative; the engine rejects negative values with
//! [`SolveError::NegativeValue`]. A negative target is valid input and has no
//! subset. An optional step budget turns long solves into
//! [`SolveError::BudgetExceeded`], which is distinct from "no subset".

pub mod budget;
pub mod builder;
pub mod engine;
pub mod error;
pub mod instance;
pub mod solvers;
pub mod state;
pub mod traits;
pub mod utils;

pub use crate::budget::StepBudget;
pub use crate::builder::SolveEngineBuilder;
pub use crate::engine::SolveEngine;
pub use crate::error::SolveError;
pub use crate::instance::Instance;
pub use crate::traits::SubsetSolver;
