//! Problem instances: a read-only value sequence and a target sum.

use crate::error::{Result, SolveError};

/// A subset-sum instance.
///
/// `count` selects how many leading values take part in the solve. It
/// defaults to the full sequence; [`Instance::with_count`] narrows it to a
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    values: Vec<i64>,
    target: i64,
    count: usize,
}

impl Instance {
    pub fn new(values: impl Into<Vec<i64>>, target: i64) -> Self {
        let values = values.into();
        let count = values.len();
        Self {
            values,
            target,
            count,
        }
    }

    /// Build an instance over the first `count` values only.
    pub fn with_count(values: impl Into<Vec<i64>>, target: i64, count: usize) -> Result<Self> {
        let values = values.into();
        if count > values.len() {
            return Err(SolveError::CountOutOfRange {
                count,
                len: values.len(),
            });
        }
        Ok(Self {
            values,
            target,
            count,
        })
    }

    /// The values taking part in the solve.
    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values[..self.count]
    }

    #[inline]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reject inputs the solvers do not support.
    ///
    /// A negative target is accepted; it simply has no subset.
    pub fn validate(&self) -> Result<()> {
        match self.values().iter().position(|&v| v < 0) {
            Some(index) => Err(SolveError::NegativeValue {
                index,
                value: self.values[index],
            }),
            None => Ok(()),
        }
    }
}
