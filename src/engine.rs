//! Solve orchestration.
//!
//! [`SolveEngine`] wraps any [`SubsetSolver`] and, for every call:
//! 1. validates the instance,
//! 2. hands the solver a fresh [`StepBudget`] built from the configured limit,
//! 3. checks in debug builds that any returned subset is sound.
//!
//! Solvers keep no state between calls, so one engine can serve many
//! instances. With the `parallel` feature, [`SolveEngine::solve_all`] fans
//! independent instances out over rayon's thread pool; a single solve is
//! always sequential.

use crate::budget::StepBudget;
use crate::error::Result;
use crate::instance::Instance;
use crate::traits::SubsetSolver;
use crate::utils::is_valid_subset;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Engine running a solver `S` under an optional step budget.
///
/// Typical usage:
/// ```
/// use subset_sum::{Instance, SolveEngine, solvers::MemoizedSolver};
///
/// let engine = SolveEngine::new(MemoizedSolver);
/// let subset = engine.solve(&Instance::new(vec![1, 2, 3, 4, 5], 9)).unwrap();
/// assert_eq!(subset.map(|s| s.iter().sum::<i64>()), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct SolveEngine<S: SubsetSolver> {
    solver: S,
    step_budget: Option<usize>,
}

impl<S: SubsetSolver> SolveEngine<S> {
    /// Create an engine with no step limit.
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            step_budget: None,
        }
    }

    /// Create an engine that gives up after `limit` solver steps.
    pub fn with_step_budget(solver: S, limit: usize) -> Self {
        Self {
            solver,
            step_budget: Some(limit),
        }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Return the configured step limit, if any.
    pub fn step_budget(&self) -> Option<usize> {
        self.step_budget
    }

    fn fresh_budget(&self) -> StepBudget {
        match self.step_budget {
            Some(limit) => StepBudget::new(limit),
            None => StepBudget::unlimited(),
        }
    }

    /// Solve one instance.
    ///
    /// Returns `Ok(None)` when no subset exists. Errors on negative values
    /// and on an exhausted step budget.
    pub fn solve(&self, instance: &Instance) -> Result<Option<Vec<i64>>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "solve",
            solver = self.solver.name(),
            n = instance.count(),
            target = instance.target()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        instance.validate()?;
        let mut budget = self.fresh_budget();
        let outcome = self.solver.solve(instance, &mut budget);

        #[cfg(feature = "tracing")]
        trace_outcome(&outcome, budget.used);

        if let Ok(Some(subset)) = &outcome {
            debug_assert!(
                is_valid_subset(instance.values(), subset, instance.target()),
                "{} returned an unsound subset {subset:?}",
                self.solver.name()
            );
        }

        outcome
    }
}

#[cfg(feature = "tracing")]
fn trace_outcome(outcome: &Result<Option<Vec<i64>>>, steps: usize) {
    match outcome {
        Ok(found) => tracing::info!(found = found.is_some(), steps, "solve finished"),
        Err(err) => tracing::warn!(%err, steps, "solve aborted"),
    }
}

#[cfg(not(feature = "parallel"))]
impl<S: SubsetSolver> SolveEngine<S> {
    /// Solve each instance independently, preserving input order.
    pub fn solve_all(&self, instances: &[Instance]) -> Vec<Result<Option<Vec<i64>>>> {
        instances.iter().map(|inst| self.solve(inst)).collect()
    }
}

#[cfg(feature = "parallel")]
impl<S: SubsetSolver + Sync> SolveEngine<S> {
    /// Solve each instance independently on rayon's pool, preserving input
    /// order. Each solve owns its own tables and budget.
    pub fn solve_all(&self, instances: &[Instance]) -> Vec<Result<Option<Vec<i64>>>> {
        instances.par_iter().map(|inst| self.solve(inst)).collect()
    }
}
