use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use subset_sum::{
    solvers::{BestFirstSolver, MemoizedSolver},
    Instance, SolveEngine, SubsetSolver,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(1..=100)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_solver<S: SubsetSolver>(c: &mut Criterion, group_name: &str, solver: S) {
    let engine = SolveEngine::new(solver);
    let mut group = c.benchmark_group(group_name);
    group.sample_size(10);
    for &len in &[50usize, 100, 200] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(len as u64);
                    let values = random_values(&mut rng, len);
                    // Odd target over even values: the solver must exhaust
                    // the whole state space.
                    let values: Vec<i64> = values.into_iter().map(|v| v * 2).collect();
                    let target = (values.iter().sum::<i64>() / 4) | 1;
                    Instance::new(values, target)
                },
                |inst| {
                    let before = rss_kib();
                    let outcome = engine.solve(&inst);
                    let after = rss_kib();
                    criterion::black_box(outcome.ok());
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta ({} len {len}): {}",
                        engine.solver().name(),
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    bench_solver(c, "scaling_memoized", MemoizedSolver);
    bench_solver(c, "scaling_best_first", BestFirstSolver);
}

criterion_group!(benches, bench_scaling);
criterion_main!(benches);
