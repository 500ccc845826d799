//! Best-first search over `(index, remaining)` states.
//!
//! Starting from `(0, target)`, each popped state at `index < n` spawns two
//! successors: skip the element (`remaining` unchanged) or take it
//! (`remaining - values[index]`). Successors with a negative remainder are
//! dropped, and states already discovered by value are not queued again,
//! which bounds the search at `(n + 1) * (target + 1)` states.
//!
//! The frontier always yields the state with the smallest remainder. This
//! is a greedy ordering, not an admissible A* heuristic: the returned subset
//! is *a* solution, not a minimal one.

use crate::budget::StepBudget;
use crate::error::Result;
use crate::instance::Instance;
use crate::state::{Frontier, SearchState, SearchTree};
use crate::traits::SubsetSolver;

/// Outcome of one search together with its effort counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Included values, leaf first, or `None` when no subset exists.
    pub subset: Option<Vec<i64>>,
    /// States admitted to the search tree, root included.
    pub discovered: usize,
    /// States popped and expanded.
    pub expanded: usize,
}

/// Priority-directed include/exclude search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFirstSolver;

impl BestFirstSolver {
    pub fn new() -> Self {
        Self
    }

    /// Run the search and report how much of the state space it touched.
    ///
    /// The budget is charged once per expanded (non-accepting) state.
    pub fn search(
        &self,
        values: &[i64],
        target: i64,
        budget: &mut StepBudget,
    ) -> Result<SearchReport> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("best_first_search", n = values.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if target < 0 {
            return Ok(SearchReport {
                subset: None,
                discovered: 0,
                expanded: 0,
            });
        }

        let n = values.len();
        let root = SearchState::root(target);
        let mut tree = SearchTree::new(root);
        let mut frontier = Frontier::new();
        frontier.push(root, tree.root());
        let mut expanded = 0usize;

        while let Some((state, node)) = frontier.pop() {
            if state.is_accepting() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    expanded,
                    discovered = tree.len(),
                    depth = state.index,
                    "accepting state reached"
                );
                return Ok(SearchReport {
                    subset: Some(tree.path_values(node)),
                    discovered: tree.len(),
                    expanded,
                });
            }

            budget.charge()?;
            expanded += 1;
            if state.index >= n {
                continue;
            }

            let next = state.index + 1;
            let skip = SearchState::new(next, state.remaining);
            // Negative values only arrive when validation is bypassed; saturate
            // instead of overflowing, as the memo table does.
            let take = SearchState::new(next, state.remaining.saturating_sub(values[state.index]));
            for succ in [skip, take] {
                if succ.remaining < 0 {
                    continue;
                }
                if let Some(id) = tree.discover(succ, node) {
                    frontier.push(succ, id);
                }
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(
                index = state.index,
                remaining = state.remaining,
                frontier = frontier.len(),
                "expanded"
            );
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(expanded, discovered = tree.len(), "frontier exhausted");

        Ok(SearchReport {
            subset: None,
            discovered: tree.len(),
            expanded,
        })
    }
}

impl SubsetSolver for BestFirstSolver {
    fn name(&self) -> &'static str {
        "best_first"
    }

    fn solve(&self, instance: &Instance, budget: &mut StepBudget) -> Result<Option<Vec<i64>>> {
        self.search(instance.values(), instance.target(), budget)
            .map(|report| report.subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    fn solve(values: &[i64], target: i64) -> Option<Vec<i64>> {
        BestFirstSolver
            .solve(&Instance::new(values, target), &mut StepBudget::unlimited())
            .unwrap()
    }

    #[test]
    fn scenario_one_to_five_reaches_nine() {
        let subset = solve(&[1, 2, 3, 4, 5], 9).unwrap();
        assert_eq!(subset.iter().sum::<i64>(), 9);
    }

    #[test]
    fn scenario_even_values_odd_target() {
        assert_eq!(solve(&[2, 4, 6], 7), None);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(solve(&[], 0), Some(vec![]));
        assert_eq!(solve(&[], 4), None);
        assert_eq!(solve(&[10], 10), Some(vec![10]));
        assert_eq!(solve(&[10], 5), None);
        assert_eq!(solve(&[1, 2], -3), None);
    }

    #[test]
    fn zero_target_accepts_root_without_expanding() {
        let report = BestFirstSolver
            .search(&[4, 5, 6], 0, &mut StepBudget::new(0))
            .unwrap();
        assert_eq!(report.subset, Some(vec![]));
        assert_eq!(report.expanded, 0);
        assert_eq!(report.discovered, 1);
    }

    #[test]
    fn last_element_is_considered() {
        assert_eq!(solve(&[7, 8, 3], 3), Some(vec![3]));
    }

    #[test]
    fn duplicate_states_are_merged() {
        // Thirty ones: without value-based deduplication the tree would hold
        // on the order of 2^30 states.
        let values = vec![1i64; 30];
        let report = BestFirstSolver
            .search(&values, 31, &mut StepBudget::unlimited())
            .unwrap();
        assert_eq!(report.subset, None);
        assert!(report.discovered <= 31 * 32);
        assert!(report.expanded <= report.discovered);
    }

    #[test]
    fn zero_values_collapse_into_one_successor() {
        let report = BestFirstSolver
            .search(&[0, 0, 5], 5, &mut StepBudget::unlimited())
            .unwrap();
        assert_eq!(report.subset, Some(vec![5]));
    }

    #[test]
    fn unvalidated_negative_values_do_not_overflow() {
        // Taking `i64::MIN` would overflow an unchecked subtraction.
        let report = BestFirstSolver
            .search(&[i64::MIN, 3], 3, &mut StepBudget::unlimited())
            .unwrap();
        assert_eq!(report.subset, Some(vec![3]));

        // `i64::MAX - (-1)` saturates back onto the skip state.
        assert_eq!(solve(&[-1], i64::MAX), None);
    }

    #[test]
    fn budget_exhaustion_is_distinct_from_absence() {
        let values: Vec<i64> = (1..=20).collect();
        let err = BestFirstSolver
            .solve(&Instance::new(values, 1_000), &mut StepBudget::new(3))
            .unwrap_err();
        assert_eq!(err, SolveError::BudgetExceeded { limit: 3 });
    }
}
