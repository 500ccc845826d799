use std::env;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use subset_sum::solvers::{BestFirstSolver, MemoizedSolver};
use subset_sum::utils::{average_duration, is_valid_subset};
use subset_sum::{Instance, SolveEngine, SubsetSolver};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const REFERENCE_TARGET: i64 = 100_000_000_000;
const REFERENCE_VALUES: [i64; 30] = [
    178_990_553_235,
    95_104_612_655,
    47_003_797_210,
    26_824_713_718,
    14_326_106_534,
    9_605_184_103,
    8_404_690_765,
    8_400_270_113,
    8_377_919_999,
    7_725_964_999,
    6_451_400_968,
    5_896_028_330,
    4_762_072_812,
    4_455_321_066,
    3_100_349_607,
    3_026_104_544,
    2_829_847_251,
    2_813_479_534,
    2_385_674_223,
    2_280_233_615,
    1_958_243_508,
    1_638_915_652,
    1_530_697_657,
    1_520_698_987,
    1_364_603_792,
    1_308_870_062,
    1_253_339_015,
    1_177_503_043,
    1_144_710_872,
    1_138_275_645,
];
const TRIAL_TARGET: i64 = 30;
const TRIAL_LEN: i64 = 18;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("subset_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let memoized = SolveEngine::new(MemoizedSolver);
    let best_first = SolveEngine::new(BestFirstSolver);

    eprintln!("[1/2] Reference input ({} values, target {REFERENCE_TARGET})", REFERENCE_VALUES.len());
    let reference = Instance::new(REFERENCE_VALUES, REFERENCE_TARGET);
    let pair = run_pair("reference", 0, &reference, &memoized, &best_first, &mut sys);
    measurements.extend(pair);
    eprintln!();

    eprintln!(
        "[2/2] {} shuffled trials of 1..={TRIAL_LEN}, target {TRIAL_TARGET}",
        options.trials
    );
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let base: Vec<i64> = (1..=TRIAL_LEN).collect();
    for trial in 0..options.trials {
        let mut shuffled = base.clone();
        shuffled.shuffle(&mut rng);
        eprintln!("      Input trial {trial}: {shuffled:?}");
        let instance = Instance::new(shuffled, TRIAL_TARGET);
        let pair = run_pair("shuffled", trial, &instance, &memoized, &best_first, &mut sys);
        measurements.extend(pair);
    }
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("subset_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    trials: usize,
    seed: Option<u64>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Table;
        let mut trials = 50usize;
        let mut seed = None;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((f, v)) => (f.to_string(), Some(v.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => format = OutputFormat::from_str(&value("--format")?)?,
                "--trials" => {
                    trials = value("--trials")?
                        .parse::<usize>()
                        .map_err(|_| "trials must be a non-negative integer".to_string())?
                }
                "--seed" => {
                    seed = Some(
                        value("--seed")?
                            .parse::<u64>()
                            .map_err(|_| "seed must be a non-negative integer".to_string())?,
                    )
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            trials,
            seed,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin subset_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: table)
  --trials <N>                  Number of shuffled trials (default: 50)
  --seed <N>                    Seed for the trial shuffles (default: random)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin subset_probe
  cargo run --release --bin subset_probe -- --format csv --trials 10 --seed 7
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    solver: &'static str,
    trial: usize,
    elapsed: Duration,
    rss_delta_kib: u64,
    verdict: Verdict,
    detail: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Found,
    Absent,
    Invalid,
    Error,
}

impl Verdict {
    fn label(&self) -> &'static str {
        match self {
            Verdict::Found => "found",
            Verdict::Absent => "absent",
            Verdict::Invalid => "invalid",
            Verdict::Error => "error",
        }
    }
}

fn run_pair(
    scenario: &'static str,
    trial: usize,
    instance: &Instance,
    memoized: &SolveEngine<MemoizedSolver>,
    best_first: &SolveEngine<BestFirstSolver>,
    sys: &mut System,
) -> Vec<Measurement> {
    let a = measure(scenario, trial, instance, memoized, sys);
    let b = measure(scenario, trial, instance, best_first, sys);
    let found_a = a.verdict == Verdict::Found;
    let found_b = b.verdict == Verdict::Found;
    if found_a != found_b {
        eprintln!("      ✗ solvers disagree on {scenario} trial {trial}");
    }
    vec![a, b]
}

fn measure<S: SubsetSolver>(
    scenario: &'static str,
    trial: usize,
    instance: &Instance,
    engine: &SolveEngine<S>,
    sys: &mut System,
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let outcome = engine.solve(instance);
    let elapsed = start.elapsed();
    let after = rss_kib(sys);

    let (verdict, detail) = match outcome {
        Ok(Some(subset)) if is_valid_subset(instance.values(), &subset, instance.target()) => {
            (Verdict::Found, format!("{subset:?}"))
        }
        Ok(Some(subset)) => (Verdict::Invalid, format!("{subset:?}")),
        Ok(None) => (Verdict::Absent, String::new()),
        Err(err) => (Verdict::Error, err.to_string()),
    };
    eprintln!(
        "      {:<10} {:<7} time={:?} {}",
        engine.solver().name(),
        verdict.label(),
        elapsed,
        detail
    );

    Measurement {
        scenario,
        solver: engine.solver().name(),
        trial,
        elapsed,
        rss_delta_kib: after.saturating_sub(before),
        verdict,
        detail,
    }
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Average durations");
    for scenario in ["reference", "shuffled"] {
        for solver in ["memoized", "best_first"] {
            let times: Vec<Duration> = measurements
                .iter()
                .filter(|m| m.scenario == scenario && m.solver == solver)
                .map(|m| m.elapsed)
                .collect();
            if times.is_empty() {
                continue;
            }
            eprintln!(
                "  {scenario:<10} {solver:<10} runs={:<4} avg={:?}",
                times.len(),
                average_duration(&times)
            );
        }
    }
    let bad = measurements
        .iter()
        .filter(|m| matches!(m.verdict, Verdict::Invalid | Verdict::Error))
        .count();
    if bad == 0 {
        eprintln!("✓ Every returned subset was valid.");
    } else {
        eprintln!("✗ {bad} run(s) returned an invalid subset or an error.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,solver,trial,wall_s,rss_delta_kib,verdict,detail");
    for m in measurements {
        println!(
            "{},{},{},{:.6},{},{},\"{}\"",
            m.scenario,
            m.solver,
            m.trial,
            m.elapsed.as_secs_f64(),
            m.rss_delta_kib,
            m.verdict.label(),
            m.detail.replace('"', "'")
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "{:<10}  {:<10}  {:>5}  {:>12}  {:>14}  {:<8}  detail",
        "scenario", "solver", "trial", "wall_s", "rss_delta_kib", "verdict"
    );
    println!(
        "{:-<10}  {:-<10}  {:-<5}  {:-<12}  {:-<14}  {:-<8}  {:-<12}",
        "", "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<10}  {:<10}  {:>5}  {:>12.6}  {:>14}  {:<8}  {}",
            m.scenario,
            m.solver,
            m.trial,
            m.elapsed.as_secs_f64(),
            m.rss_delta_kib,
            m.verdict.label(),
            m.detail
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        println!(
            "  {{\"scenario\":\"{}\",\"solver\":\"{}\",\"trial\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verdict\":\"{}\",\"detail\":\"{}\"}}{}",
            m.scenario,
            m.solver,
            m.trial,
            m.elapsed.as_secs_f64(),
            m.rss_delta_kib,
            m.verdict.label(),
            m.detail.replace('"', "'"),
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
