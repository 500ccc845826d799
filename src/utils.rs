//! Assorted utilities and helpers.
//!
//! Checkers used by the engine's debug assertions and by the tests, plus
//! the duration averaging the probe reports with.

use std::collections::HashMap;
use std::time::Duration;

/// Is `subset` a sub-multiset of `values` summing to `target`?
///
/// Each value may be used at most as many times as it occurs in `values`.
pub fn is_valid_subset(values: &[i64], subset: &[i64], target: i64) -> bool {
    let sum = subset.iter().try_fold(0i64, |acc, &v| acc.checked_add(v));
    if sum != Some(target) {
        return false;
    }
    let mut available: HashMap<i64, usize> = HashMap::new();
    for &v in values {
        *available.entry(v).or_default() += 1;
    }
    subset.iter().all(|v| match available.get_mut(v) {
        Some(n) if *n > 0 => {
            *n -= 1;
            true
        }
        _ => false,
    })
}

/// Decide existence by enumerating every subset.
///
/// Exponential; only meant as a reference oracle for small inputs.
///
/// # Panics
/// Panics if `values.len() > 24`.
pub fn brute_force_exists(values: &[i64], target: i64) -> bool {
    assert!(values.len() <= 24, "brute force limited to 24 values");
    (0u32..(1u32 << values.len())).any(|mask| {
        let sum: i64 = values
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .sum();
        sum == target
    })
}

/// Mean of a set of durations; zero for an empty slice.
pub fn average_duration(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }
    let total: u128 = durations.iter().map(Duration::as_nanos).sum();
    // The mean never exceeds the longest input, so its seconds fit in a u64.
    let mean = total / durations.len() as u128;
    Duration::new((mean / 1_000_000_000) as u64, (mean % 1_000_000_000) as u32)
}
