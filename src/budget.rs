//! Step accounting for a single solve.
//!
//! A `StepBudget` is created fresh for every solve and charged once per
//! unit of solver work: one memo entry computed, or one search state
//! expanded.

use crate::error::{Result, SolveError};

/// Optional cap on the number of solver steps.
#[derive(Debug, Clone)]
pub struct StepBudget {
    /// Maximum number of steps, or `None` for no cap.
    pub limit: Option<usize>,
    /// Steps charged so far.
    pub used: usize,
}

impl StepBudget {
    /// A budget that never runs out.
    pub fn unlimited() -> Self {
        Self {
            limit: None,
            used: 0,
        }
    }

    pub fn new(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            used: 0,
        }
    }

    /// Record one step, failing once the limit has been spent.
    #[inline]
    pub fn charge(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(SolveError::BudgetExceeded { limit });
            }
        }
        self.used += 1;
        Ok(())
    }

    /// Steps still available; `None` when unlimited.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|l| l.saturating_sub(self.used))
    }
}

impl Default for StepBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}
