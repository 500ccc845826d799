use proptest::prelude::*;
use subset_sum::{
    solvers::{BestFirstSolver, MemoizedSolver},
    utils::{brute_force_exists, is_valid_subset},
    Instance, SolveEngine,
};

fn memoized(values: &[i64], target: i64) -> Option<Vec<i64>> {
    SolveEngine::new(MemoizedSolver)
        .solve(&Instance::new(values, target))
        .unwrap()
}

fn best_first(values: &[i64], target: i64) -> Option<Vec<i64>> {
    SolveEngine::new(BestFirstSolver)
        .solve(&Instance::new(values, target))
        .unwrap()
}

proptest! {
    #[test]
    fn solvers_agree_on_existence(
        values in prop::collection::vec(0i64..=50, 0..=20),
        target in 0i64..=200
    ) {
        let a = memoized(&values, target);
        let b = best_first(&values, target);
        prop_assert_eq!(a.is_some(), b.is_some());
    }

    #[test]
    fn memoized_matches_brute_force(
        values in prop::collection::vec(0i64..=50, 0..=14),
        target in 0i64..=200
    ) {
        let expected = brute_force_exists(&values, target);
        let found = memoized(&values, target);
        prop_assert_eq!(found.is_some(), expected);
        if let Some(subset) = found {
            prop_assert!(is_valid_subset(&values, &subset, target));
        }
    }

    #[test]
    fn best_first_matches_brute_force(
        values in prop::collection::vec(0i64..=50, 0..=14),
        target in 0i64..=200
    ) {
        let expected = brute_force_exists(&values, target);
        let found = best_first(&values, target);
        prop_assert_eq!(found.is_some(), expected);
        if let Some(subset) = found {
            prop_assert!(is_valid_subset(&values, &subset, target));
        }
    }

    #[test]
    fn duplicates_are_used_at_most_as_often_as_given(
        value in 1i64..=9,
        copies in 1usize..=6,
        k in 0usize..=8
    ) {
        let values = vec![value; copies];
        let target = value * k as i64;
        let a = memoized(&values, target);
        let b = best_first(&values, target);
        prop_assert_eq!(a.is_some(), k <= copies);
        prop_assert_eq!(b.is_some(), k <= copies);
        if let Some(subset) = b {
            prop_assert_eq!(subset.len(), k);
        }
    }
}
