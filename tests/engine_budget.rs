use subset_sum::{
    solvers::{BestFirstSolver, MemoizedSolver},
    Instance, SolveEngineBuilder, SolveError,
};

fn hard_instance() -> Instance {
    // Every value is even and the target is odd, so both solvers must
    // exhaust their state space before answering.
    Instance::new((1..=24).map(|v| v * 2).collect::<Vec<i64>>(), 301)
}

#[test]
fn budget_exceeded_is_not_absence() {
    let memo = SolveEngineBuilder::new(MemoizedSolver)
        .with_step_budget(100)
        .build();
    let search = SolveEngineBuilder::new(BestFirstSolver)
        .with_step_budget(100)
        .build();
    assert_eq!(
        memo.solve(&hard_instance()),
        Err(SolveError::BudgetExceeded { limit: 100 })
    );
    assert_eq!(
        search.solve(&hard_instance()),
        Err(SolveError::BudgetExceeded { limit: 100 })
    );
}

#[test]
fn generous_budget_reaches_a_verdict() {
    let memo = SolveEngineBuilder::new(MemoizedSolver)
        .with_step_budget(1_000_000)
        .build();
    let search = SolveEngineBuilder::new(BestFirstSolver)
        .with_step_budget(1_000_000)
        .build();
    assert_eq!(memo.solve(&hard_instance()), Ok(None));
    assert_eq!(search.solve(&hard_instance()), Ok(None));
}

#[test]
fn negative_values_are_rejected() {
    let engine = SolveEngineBuilder::new(BestFirstSolver).build();
    assert_eq!(
        engine.solve(&Instance::new(vec![1, -4, 2], 3)),
        Err(SolveError::NegativeValue {
            index: 1,
            value: -4
        })
    );
}
