//! Exact subset-sum by top-down evaluation with memoization.
//!
//! The recurrence is the classic include/exclude split on the element at
//! `index`:
//!
//! ```text
//! reach(i, r) = r == 0                                  -> true
//!             | i < 0 || r < 0                          -> false
//!             | reach(i-1, r) || reach(i-1, r - v[i])
//! ```
//!
//! `reach(i, r)` asks whether a subset of `v[0..=i]` sums to `r`. Results are
//! cached per `(i, r)` in a [`MemoTable`]. Evaluation uses an explicit stack
//! rather than native recursion, so sequence length is not limited by the
//! call stack. Worst case is O(n * target) time and space.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::budget::StepBudget;
use crate::error::Result;
use crate::instance::Instance;
use crate::traits::SubsetSolver;

/// Lazily filled `index -> remaining -> reachable` table for one solve.
#[derive(Debug, Clone, Default)]
pub struct MemoTable {
    rows: Vec<HashMap<i64, bool>>,
}

impl MemoTable {
    /// Table with one (empty) row per value.
    pub fn new(len: usize) -> Self {
        Self {
            rows: vec![HashMap::new(); len],
        }
    }

    /// Known answer for `(index, remaining)`.
    ///
    /// Base cases are answered without touching the table: `remaining == 0`
    /// is always reachable, and a negative index or negative remainder never
    /// is. Otherwise returns the cached entry, if any.
    #[inline]
    pub fn lookup(&self, index: isize, remaining: i64) -> Option<bool> {
        if remaining == 0 {
            return Some(true);
        }
        if index < 0 || remaining < 0 {
            return Some(false);
        }
        self.rows.get(index as usize)?.get(&remaining).copied()
    }

    /// Number of cached `(index, remaining)` entries.
    pub fn len_entries(&self) -> usize {
        self.rows.iter().map(HashMap::len).sum()
    }

    /// Can a subset of `values[0..=index]` sum to `remaining`?
    pub fn can_reach(&mut self, values: &[i64], index: isize, remaining: i64) -> bool {
        match self.fill(values, index, remaining, || Ok::<(), Infallible>(())) {
            Ok(reached) => reached,
            Err(never) => match never {},
        }
    }

    /// [`can_reach`](Self::can_reach) with each newly computed entry charged
    /// against `budget`.
    ///
    /// An `index` past the end of `values` is treated as the last element.
    pub fn can_reach_within(
        &mut self,
        values: &[i64],
        index: isize,
        remaining: i64,
        budget: &mut StepBudget,
    ) -> Result<bool> {
        self.fill(values, index, remaining, || budget.charge())
    }

    /// Evaluate `(index, remaining)`, calling `charge` before each new entry
    /// is stored. An error from `charge` stops the fill and leaves every
    /// entry computed so far in place.
    fn fill<E>(
        &mut self,
        values: &[i64],
        index: isize,
        remaining: i64,
        mut charge: impl FnMut() -> std::result::Result<(), E>,
    ) -> std::result::Result<bool, E> {
        let index = index.min(values.len() as isize - 1);
        if let Some(known) = self.lookup(index, remaining) {
            return Ok(known);
        }
        if self.rows.len() < values.len() {
            self.rows.resize_with(values.len(), HashMap::new);
        }

        // Frames are (index, remaining) pairs still waiting for a verdict.
        // A frame is only pushed when its lookup returned None, so its index
        // is non-negative.
        let mut stack = vec![(index as usize, remaining)];
        while let Some(&(i, r)) = stack.last() {
            if self.rows[i].contains_key(&r) {
                stack.pop();
                continue;
            }
            let below = i as isize - 1;
            let verdict = match self.lookup(below, r) {
                None => {
                    stack.push((i - 1, r));
                    continue;
                }
                Some(true) => true,
                Some(false) => {
                    let take = r.saturating_sub(values[i]);
                    match self.lookup(below, take) {
                        None => {
                            stack.push((i - 1, take));
                            continue;
                        }
                        Some(reached) => reached,
                    }
                }
            };
            charge()?;
            self.rows[i].insert(r, verdict);
            stack.pop();
        }

        Ok(self.lookup(index, remaining).unwrap_or(false))
    }

    /// Recover one subset summing to `target` from a filled table.
    ///
    /// Walks from the last element downwards, skipping an element whenever
    /// the remainder is still reachable without it. Returns `None` if the
    /// table does not show `target` as reachable. Values come out in reverse
    /// input order.
    pub fn extract_subset(&self, values: &[i64], target: i64) -> Option<Vec<i64>> {
        let mut index = values.len() as isize - 1;
        let mut remaining = target;
        if self.lookup(index, remaining) != Some(true) {
            return None;
        }

        let mut subset = Vec::new();
        while remaining != 0 {
            // lookup(index, remaining) is true and remaining != 0, so index >= 0.
            debug_assert!(index >= 0);
            if self.lookup(index - 1, remaining) != Some(true) {
                let v = values[index as usize];
                subset.push(v);
                remaining -= v;
                if self.lookup(index - 1, remaining) != Some(true) {
                    return None;
                }
            }
            index -= 1;
        }
        Some(subset)
    }
}

/// Memoized include/exclude solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSolver;

impl MemoizedSolver {
    pub fn new() -> Self {
        Self
    }
}

impl SubsetSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn solve(&self, instance: &Instance, budget: &mut StepBudget) -> Result<Option<Vec<i64>>> {
        let values = instance.values();
        let target = instance.target();

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("memoized_solve", n = values.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = MemoTable::new(values.len());
        let root = values.len() as isize - 1;
        let reachable = table.can_reach_within(values, root, target, budget)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(reachable, entries = table.len_entries(), "memo table filled");

        if !reachable {
            return Ok(None);
        }
        Ok(table.extract_subset(values, target))
    }
}
