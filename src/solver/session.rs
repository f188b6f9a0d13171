//! One game, as a state machine
//!
//! ```text
//! Guess ──next_trial──▶ AwaitingFeedback ──submit──▶ Solved
//!   ▲                                       │
//!   └────────────── candidates left ◀───────┴──────▶ Impossible
//! ```
//!
//! The session owns its candidate set and RNG. Feedback comes from an
//! [`Oracle`]: either a [`SimulatedOracle`] that knows the solution, or an
//! external judge such as a human at the terminal.

use super::{CandidateSet, Eliminator, PatternCodec, RandomSelector, TrialSelector};
use crate::core::{Correction, Pattern, PatternId, Result, Scorer, SolverError};
use rand::Rng;

/// Supplies feedback for trials
pub trait Oracle {
    type Error: From<SolverError>;

    /// Judge `trial`, which is the `round`-th trial of the game (1-based)
    fn judge(
        &mut self,
        trial: &Pattern,
        round: usize,
    ) -> std::result::Result<Correction, Self::Error>;

    /// Called after feedback was applied and the game goes on
    ///
    /// # Errors
    /// An error here ends the game, like one from [`Oracle::judge`].
    fn report(&mut self, _remaining: u64) -> std::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Oracle that knows the solution and scores trials itself
#[derive(Debug, Clone)]
pub struct SimulatedOracle {
    solution: Pattern,
    scorer: Scorer,
}

impl SimulatedOracle {
    #[must_use]
    pub fn new(codec: &PatternCodec, solution: Pattern) -> Self {
        Self {
            solution,
            scorer: Scorer::new(codec.config()),
        }
    }

    /// Oracle with a solution drawn uniformly from the whole pattern space
    pub fn random<R: Rng + ?Sized>(codec: &PatternCodec, rng: &mut R) -> Self {
        let id = rng.random_range(0..codec.config().pattern_count());
        Self::new(codec, codec.pattern(id))
    }

    #[must_use]
    pub const fn solution(&self) -> &Pattern {
        &self.solution
    }
}

impl Oracle for SimulatedOracle {
    type Error = SolverError;

    fn judge(&mut self, trial: &Pattern, _round: usize) -> Result<Correction> {
        Ok(self.scorer.score(self.solution.colors(), trial.colors()))
    }
}

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Ready to draw the next trial
    Guess,
    /// A trial was played and feedback is pending
    AwaitingFeedback { trial: PatternId },
    /// The last trial received all red pegs
    Solved { solution: PatternId },
    /// The feedback history admits no pattern
    Impossible,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved { .. } | Self::Impossible)
    }
}

/// Result of submitting feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Solved,
    Continue { remaining: u64 },
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub trials: usize,
    pub solution: Pattern,
}

/// A single game from the full pattern space down to the solution
pub struct GameSession<'a, R: Rng, S: TrialSelector = RandomSelector> {
    codec: &'a PatternCodec,
    eliminator: Eliminator<'a>,
    selector: S,
    rng: R,
    candidates: CandidateSet,
    state: GameState,
    trials: usize,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// New session using random trial selection
    pub fn new(codec: &'a PatternCodec, rng: R) -> Self {
        Self::with_selector(codec, RandomSelector, rng)
    }
}

impl<'a, R: Rng, S: TrialSelector> GameSession<'a, R, S> {
    pub fn with_selector(codec: &'a PatternCodec, selector: S, rng: R) -> Self {
        Self {
            codec,
            eliminator: Eliminator::new(codec),
            selector,
            rng,
            candidates: CandidateSet::full(codec.config().pattern_count()),
            state: GameState::Guess,
            trials: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of trials drawn so far
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Draw the next trial
    ///
    /// # Errors
    /// Returns `InvalidState` unless the session is in [`GameState::Guess`].
    pub fn next_trial(&mut self) -> Result<Pattern> {
        if self.state != GameState::Guess {
            return Err(SolverError::InvalidState(
                "a trial is only drawn while guessing",
            ));
        }

        let id = self
            .selector
            .select(&self.candidates, &mut self.rng)
            .ok_or(SolverError::InvalidState("no candidates left to guess"))?;

        self.trials += 1;
        self.state = GameState::AwaitingFeedback { trial: id };
        Ok(self.codec.pattern(id))
    }

    /// Apply feedback for the pending trial
    ///
    /// # Errors
    /// - `InvalidState` if no trial is pending
    /// - `ContradictoryFeedback` if no candidate is consistent with all
    ///   feedback; the session is then [`GameState::Impossible`]
    pub fn submit(&mut self, correction: Correction) -> Result<Progress> {
        let GameState::AwaitingFeedback { trial } = self.state else {
            return Err(SolverError::InvalidState("no trial is awaiting feedback"));
        };

        if correction.is_solved(self.codec.config().pattern_length()) {
            self.state = GameState::Solved { solution: trial };
            return Ok(Progress::Solved);
        }

        let pattern = self.codec.decode(trial);
        let learned = self
            .eliminator
            .learn(&pattern, correction, &mut self.candidates, self.trials);
        if let Err(err) = learned {
            self.state = GameState::Impossible;
            return Err(err);
        }

        self.state = GameState::Guess;
        Ok(Progress::Continue {
            remaining: self.candidates.count(),
        })
    }

    /// Play until solved, asking `oracle` for feedback on every trial
    ///
    /// # Errors
    /// Propagates oracle errors, and `ContradictoryFeedback` if the oracle's
    /// answers are inconsistent.
    pub fn play<O: Oracle>(
        &mut self,
        oracle: &mut O,
    ) -> std::result::Result<GameOutcome, O::Error> {
        loop {
            let trial = self.next_trial()?;
            let correction = oracle.judge(&trial, self.trials)?;
            match self.submit(correction)? {
                Progress::Solved => {
                    return Ok(GameOutcome {
                        trials: self.trials,
                        solution: trial,
                    });
                }
                Progress::Continue { remaining } => oracle.report(remaining)?,
            }
        }
    }
}

/// Play one simulated game against a random solution
///
/// Returns the number of trials needed.
///
/// # Errors
/// Only fails if scoring were inconsistent, which a simulated oracle never is.
pub fn simulate_game<R: Rng>(codec: &PatternCodec, rng: &mut R) -> Result<usize> {
    let mut oracle = SimulatedOracle::random(codec, rng);
    let outcome = GameSession::new(codec, rng).play(&mut oracle)?;
    Ok(outcome.trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Oracle replaying fixed answers
    struct Scripted(Vec<Correction>);

    impl Oracle for Scripted {
        type Error = SolverError;

        fn judge(&mut self, _trial: &Pattern, round: usize) -> Result<Correction> {
            Ok(self.0[round - 1])
        }
    }

    #[test]
    fn solves_every_classic_solution_sample() {
        let codec = PatternCodec::lazy(GameConfig::CLASSIC);
        let mut rng = StdRng::seed_from_u64(2024);

        for solution_id in [0, 1, 215, 777, 1295] {
            let solution = codec.pattern(solution_id);
            let mut oracle = SimulatedOracle::new(&codec, solution.clone());
            let mut session = GameSession::new(&codec, &mut rng);

            let outcome = session.play(&mut oracle).unwrap();
            assert_eq!(outcome.solution, solution);
            assert!(outcome.trials >= 1);
            assert!(outcome.trials as u64 <= codec.config().pattern_count());
            assert_eq!(session.state(), GameState::Solved { solution: solution_id });
        }
    }

    #[test]
    fn solution_stays_candidate_until_solved() {
        let codec = PatternCodec::lazy(GameConfig::new(4, 5).unwrap());
        let solution_id = codec.encode(&[4, 0, 4, 2]).unwrap();
        let mut oracle = SimulatedOracle::new(&codec, codec.pattern(solution_id));
        let mut session = GameSession::new(&codec, StdRng::seed_from_u64(5));

        loop {
            assert!(session.candidates().contains(solution_id));
            let trial = session.next_trial().unwrap();
            let correction = oracle.judge(&trial, session.trials()).unwrap();
            if session.submit(correction).unwrap() == Progress::Solved {
                break;
            }
        }
        assert!(session.state().is_terminal());
    }

    #[test]
    fn single_pattern_space_solved_first_try() {
        let codec = PatternCodec::lazy(GameConfig::new(3, 1).unwrap());
        let trials = simulate_game(&codec, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(trials, 1);
    }

    #[test]
    fn contradictory_answers_end_impossible() {
        let codec = PatternCodec::lazy(GameConfig::new(2, 2).unwrap());
        // Answering "nothing matches" to every trial runs out of candidates
        let mut oracle = Scripted(vec![Correction::new(0, 0); 4]);
        let mut session = GameSession::new(&codec, StdRng::seed_from_u64(3));

        let err = session.play(&mut oracle).unwrap_err();
        assert!(matches!(err, SolverError::ContradictoryFeedback { .. }));
        assert_eq!(session.state(), GameState::Impossible);
    }

    #[test]
    fn submit_requires_pending_trial() {
        let codec = PatternCodec::lazy(GameConfig::CLASSIC);
        let mut session = GameSession::new(&codec, StdRng::seed_from_u64(1));

        assert!(matches!(
            session.submit(Correction::new(0, 0)),
            Err(SolverError::InvalidState(_))
        ));

        session.next_trial().unwrap();
        assert!(matches!(
            session.next_trial(),
            Err(SolverError::InvalidState(_))
        ));
        assert_eq!(session.submit(Correction::solved(4)), Ok(Progress::Solved));
        assert!(session.next_trial().is_err());
    }

    #[test]
    fn materialized_and_lazy_play_identically() {
        let config = GameConfig::new(4, 6).unwrap();
        let lazy = PatternCodec::lazy(config);
        let cached = PatternCodec::materialized(config).unwrap();

        let a = simulate_game(&lazy, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = simulate_game(&cached, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }
}
