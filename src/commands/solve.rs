//! Code solving command
//!
//! Plays one simulated game against a known code and records every step.

use crate::core::{Correction, Pattern, Result};
use crate::solver::{GameSession, Oracle, PatternCodec, Progress, SimulatedOracle};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a code
pub struct SolveConfig {
    /// Hidden code; drawn at random when `None`
    pub solution: Option<Pattern>,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(solution: Option<Pattern>) -> Self {
        Self {
            solution,
            seed: None,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub solution: Pattern,
    pub steps: Vec<TrialStep>,
}

/// A single trial in the solution
pub struct TrialStep {
    pub trial: Pattern,
    pub correction: Correction,
    pub candidates_before: u64,
    pub candidates_after: u64,
}

/// Solve a code, tracing candidate counts round by round
///
/// # Errors
///
/// Only fails if the session reaches an invalid state, which a simulated
/// oracle cannot cause.
pub fn solve_code(config: SolveConfig, codec: &PatternCodec) -> Result<SolveResult> {
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let mut oracle = match config.solution {
        Some(solution) => SimulatedOracle::new(codec, solution),
        None => SimulatedOracle::random(codec, &mut rng),
    };
    let mut session = GameSession::new(codec, rng);
    let mut steps = Vec::new();

    loop {
        let candidates_before = session.candidates().count();
        let trial = session.next_trial()?;
        let correction = oracle.judge(&trial, session.trials())?;
        let progress = session.submit(correction)?;

        let candidates_after = match progress {
            Progress::Solved => 1,
            Progress::Continue { remaining } => remaining,
        };
        steps.push(TrialStep {
            trial,
            correction,
            candidates_before,
            candidates_after,
        });

        if progress == Progress::Solved {
            return Ok(SolveResult {
                solution: oracle.solution().clone(),
                steps,
            });
        }
    }
}
