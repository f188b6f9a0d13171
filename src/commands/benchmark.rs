//! Benchmark command
//!
//! Plays many simulated games across worker threads and aggregates how many
//! trials each game needed.
//!
//! Workers share one mutex-guarded record of the remaining work and the
//! running totals. A worker locks it to claim a batch of games, plays the
//! batch without any coordination, then locks it again to merge its local
//! tally. Merging is an associative add, so the totals do not depend on the
//! thread count or on scheduling.

use crate::core::{Result, SolverError};
use crate::solver::{PatternCodec, simulate_game};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub total_games: u64,
    pub threads: usize,
    /// Games claimed per lock acquisition
    pub batch_size: u64,
    /// Base seed; every game derives its own RNG from it and its index
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(total_games: u64) -> Self {
        Self {
            total_games,
            threads: thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
            batch_size: 10,
            seed: None,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: u64,
    pub total_trials: u64,
    pub average_trials: f64,
    pub min_trials: usize,
    pub max_trials: usize,
    pub distribution: FxHashMap<usize, u64>,
    pub duration: Duration,
    pub games_per_second: f64,
    pub threads: usize,
    pub seed: u64,
}

/// Trial counts of a group of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrialTally {
    games: u64,
    trials: u64,
    min: Option<usize>,
    max: usize,
    distribution: FxHashMap<usize, u64>,
}

impl TrialTally {
    fn record(&mut self, trials: usize) {
        self.games += 1;
        self.trials += trials as u64;
        self.min = Some(self.min.map_or(trials, |m| m.min(trials)));
        self.max = self.max.max(trials);
        *self.distribution.entry(trials).or_insert(0) += 1;
    }

    fn merge(&mut self, other: Self) {
        self.games += other.games;
        self.trials += other.trials;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max = self.max.max(other.max);
        for (trials, count) in other.distribution {
            *self.distribution.entry(trials).or_insert(0) += count;
        }
    }

    fn average(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.trials as f64 / self.games as f64
        }
    }
}

/// State behind the benchmark mutex
struct Shared {
    remaining: u64,
    next_game: u64,
    tally: TrialTally,
}

/// Seed for the `index`-th game of a run
fn game_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run the benchmark
///
/// # Errors
///
/// Returns `InvalidSettings` if `threads` or `batch_size` is zero, and
/// propagates any error a worker hit while playing.
///
/// # Panics
///
/// Re-raises a panic from a worker thread.
pub fn run_benchmark(codec: &PatternCodec, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    if config.threads == 0 {
        return Err(SolverError::InvalidSettings(
            "at least one thread is required".to_string(),
        ));
    }
    if config.batch_size == 0 {
        return Err(SolverError::InvalidSettings(
            "batch size must be positive".to_string(),
        ));
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let progress = progress_bar(config);
    let shared = Mutex::new(Shared {
        remaining: config.total_games,
        next_game: 0,
        tally: TrialTally::default(),
    });

    let start = Instant::now();

    thread::scope(|s| {
        let shared = &shared;
        let progress = &progress;
        let workers: Vec<_> = (0..config.threads)
            .map(|_| s.spawn(move || worker(codec, config.batch_size, seed, shared, progress)))
            .collect();

        workers
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect::<Result<Vec<()>>>()
    })?;

    let duration = start.elapsed();
    progress.finish_and_clear();

    let tally = shared
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .tally;

    Ok(BenchmarkResult {
        total_games: tally.games,
        total_trials: tally.trials,
        average_trials: tally.average(),
        min_trials: tally.min.unwrap_or(0),
        max_trials: tally.max,
        games_per_second: tally.games as f64 / duration.as_secs_f64(),
        distribution: tally.distribution,
        duration,
        threads: config.threads,
        seed,
    })
}

fn worker(
    codec: &PatternCodec,
    batch_size: u64,
    seed: u64,
    shared: &Mutex<Shared>,
    progress: &ProgressBar,
) -> Result<()> {
    loop {
        let (first, count) = {
            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            let count = state.remaining.min(batch_size);
            let first = state.next_game;
            state.remaining -= count;
            state.next_game += count;
            (first, count)
        };

        if count == 0 {
            return Ok(());
        }

        let mut local = TrialTally::default();
        for index in first..first + count {
            let mut rng = StdRng::seed_from_u64(game_seed(seed, index));
            local.record(simulate_game(codec, &mut rng)?);
        }

        let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
        state.tally.merge(local);
        progress.inc(count);
        progress.set_message(format!("avg {:.3}", state.tally.average()));
    }
}

fn progress_bar(config: &BenchmarkConfig) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(config.total_games);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn settings(total_games: u64, threads: usize, batch_size: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            total_games,
            threads,
            batch_size,
            seed: Some(1234),
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_plays_every_game() {
        let codec = PatternCodec::lazy(GameConfig::new(3, 4).unwrap());
        let result = run_benchmark(&codec, &settings(57, 4, 5)).unwrap();

        assert_eq!(result.total_games, 57);
        assert!(result.min_trials >= 1);
        assert!(result.max_trials as u64 <= codec.config().pattern_count());
        assert!(result.average_trials >= result.min_trials as f64);
        assert!(result.average_trials <= result.max_trials as f64);
    }

    #[test]
    fn distribution_sums_correctly() {
        let codec = PatternCodec::lazy(GameConfig::CLASSIC);
        let result = run_benchmark(&codec, &settings(40, 3, 7)).unwrap();

        let games: u64 = result.distribution.values().sum();
        assert_eq!(games, result.total_games);

        let trials: u64 = result
            .distribution
            .iter()
            .map(|(&trials, &count)| trials as u64 * count)
            .sum();
        assert_eq!(trials, result.total_trials);
        assert!(
            (result.average_trials - trials as f64 / games as f64).abs() < 1e-12
        );
    }

    #[test]
    fn totals_independent_of_threads_and_batches() {
        let codec = PatternCodec::materialized(GameConfig::CLASSIC).unwrap();
        let baseline = run_benchmark(&codec, &settings(60, 1, 60)).unwrap();

        for (threads, batch) in [(2, 1), (4, 7), (8, 3)] {
            let result = run_benchmark(&codec, &settings(60, threads, batch)).unwrap();
            assert_eq!(result.total_games, baseline.total_games);
            assert_eq!(result.total_trials, baseline.total_trials);
            assert_eq!(result.distribution, baseline.distribution);
        }
    }

    #[test]
    fn zero_games() {
        let codec = PatternCodec::lazy(GameConfig::CLASSIC);
        let result = run_benchmark(&codec, &settings(0, 4, 10)).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_trials, 0);
        assert_eq!(result.min_trials, 0);
        assert!(result.average_trials.abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_zero_threads_or_batch() {
        let codec = PatternCodec::lazy(GameConfig::CLASSIC);
        assert!(matches!(
            run_benchmark(&codec, &settings(10, 0, 1)),
            Err(SolverError::InvalidSettings(_))
        ));
        assert!(matches!(
            run_benchmark(&codec, &settings(10, 1, 0)),
            Err(SolverError::InvalidSettings(_))
        ));
    }

    #[test]
    fn tally_merge_is_order_independent() {
        let mut a = TrialTally::default();
        [3, 5, 4].into_iter().for_each(|t| a.record(t));
        let mut b = TrialTally::default();
        [2, 6].into_iter().for_each(|t| b.record(t));

        let mut ab = a.clone();
        ab.merge(b.clone());
        let mut ba = b;
        ba.merge(a);

        assert_eq!(ab, ba);
        assert_eq!(ab.games, 5);
        assert_eq!(ab.trials, 20);
        assert_eq!(ab.min, Some(2));
        assert_eq!(ab.max, 6);
    }
}
