//! Core trait implemented by every subset-sum solver.
//!
//! A solver answers one question for an [`Instance`]: is there a
//! sub-multiset of `instance.values()` summing to `instance.target()`, and
//! if so, which one?
//!
//! The engine wraps a solver with input validation, a fresh
//! [`StepBudget`] per call and a soundness check. Solvers themselves hold
//! no state between calls: every table, frontier or tree they build lives
//! only for the duration of one `solve`.

use crate::budget::StepBudget;
use crate::error::Result;
use crate::instance::Instance;

/// A subset-sum solving strategy.
///
/// Outcomes:
/// - `Ok(Some(subset))`: `subset` is drawn from the instance values and sums
///   to the target. Its order is solver-specific.
/// - `Ok(None)`: no subset exists.
/// - `Err(SolveError::BudgetExceeded { .. })`: the budget ran out first.
///
/// Implementations may assume the instance has been validated (no negative
/// values). A negative target must yield `Ok(None)`.
pub trait SubsetSolver {
    /// Short label used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Solve `instance`, charging `budget` once per unit of work.
    fn solve(&self, instance: &Instance, budget: &mut StepBudget) -> Result<Option<Vec<i64>>>;
}

impl<S: SubsetSolver + ?Sized> SubsetSolver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, instance: &Instance, budget: &mut StepBudget) -> Result<Option<Vec<i64>>> {
        (**self).solve(instance, budget)
    }
}
