#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use subset_sum::{
    solvers::{BestFirstSolver, MemoizedSolver},
    utils::is_valid_subset,
    Instance, SolveEngine,
};

#[test]
fn heavy_stress_medium_targets() {
    let mut rng = StdRng::seed_from_u64(123);
    let values: Vec<i64> = (0..200).map(|_| rng.gen_range(1..=500)).collect();
    let target = values.iter().take(60).sum::<i64>() + 1;
    let inst = Instance::new(values.clone(), target);

    let a = SolveEngine::new(MemoizedSolver).solve(&inst).unwrap();
    let b = SolveEngine::new(BestFirstSolver).solve(&inst).unwrap();
    assert_eq!(a.is_some(), b.is_some());
    for subset in [a, b].into_iter().flatten() {
        assert!(is_valid_subset(&values, &subset, target));
    }
}

const REFERENCE: [i64; 30] = [
    178990553235, 95104612655, 47003797210, 26824713718, 14326106534, 9605184103, 8404690765,
    8400270113, 8377919999, 7725964999, 6451400968, 5896028330, 4762072812, 4455321066,
    3100349607, 3026104544, 2829847251, 2813479534, 2385674223, 2280233615, 1958243508,
    1638915652, 1530697657, 1520698987, 1364603792, 1308870062, 1253339015, 1177503043,
    1144710872, 1138275645,
];

#[test]
fn memoized_reaches_reference_market_cap_target() {
    let target = 100_000_000_000;
    let inst = Instance::new(REFERENCE, target);

    let memo = SolveEngine::new(MemoizedSolver).solve(&inst).unwrap();
    let best = SolveEngine::new(BestFirstSolver).solve(&inst).unwrap();
    let memo = memo.expect("reference target is reachable");
    assert!(is_valid_subset(&REFERENCE, &memo, target));
    assert!(best.is_some());
}
