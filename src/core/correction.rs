//! Feedback scoring
//!
//! A [`Correction`] is the feedback for a trial: `red` pegs for positions with
//! the right color, `white` pegs for further color matches at other positions.
//! No peg of either pattern is counted twice.

use super::config::GameConfig;
use super::pattern::Color;
use std::fmt;

/// Feedback for one trial
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Correction {
    /// Positions where trial and solution share the same color
    pub red: u32,
    /// Further color matches ignoring position, excluding red positions
    pub white: u32,
}

impl Correction {
    #[inline]
    #[must_use]
    pub const fn new(red: u32, white: u32) -> Self {
        Self { red, white }
    }

    /// The feedback a fully correct trial receives
    #[inline]
    #[must_use]
    pub const fn solved(pattern_length: u32) -> Self {
        Self::new(pattern_length, 0)
    }

    /// Check whether every peg is red
    #[inline]
    #[must_use]
    pub const fn is_solved(self, pattern_length: u32) -> bool {
        self.red == pattern_length
    }

    /// Score `trial` against `solution` with a throwaway [`Scorer`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Correction, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let correction = Correction::calculate(&config, &[0, 1, 2, 3], &[0, 2, 1, 4]);
    /// assert_eq!(correction, Correction::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(config: &GameConfig, solution: &[Color], trial: &[Color]) -> Self {
        Scorer::new(config).score(solution, trial)
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} red, {} white", self.red, self.white)
    }
}

/// Reusable scorer
///
/// Holds the per-color tally so scoring every candidate in an elimination
/// pass does not allocate. The tally is all zeros between calls.
#[derive(Debug, Clone)]
pub struct Scorer {
    unmatched: Vec<u32>,
}

impl Scorer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            unmatched: vec![0; config.color_number() as usize],
        }
    }

    /// Compute the feedback `trial` receives when `solution` is hidden
    ///
    /// White is the sum over colors of `min(unmatched in solution, unmatched
    /// in trial)`. Consuming the solution tally while walking the unmatched
    /// trial pegs yields the same sum and only touches colors that occur.
    ///
    /// # Panics
    /// Panics if a color is outside the configured range.
    pub fn score(&mut self, solution: &[Color], trial: &[Color]) -> Correction {
        debug_assert_eq!(solution.len(), trial.len());

        let mut correction = Correction::default();

        for (&s, &t) in solution.iter().zip(trial) {
            if s == t {
                correction.red += 1;
            } else {
                self.unmatched[usize::from(s)] += 1;
            }
        }

        for (&s, &t) in solution.iter().zip(trial) {
            if s != t {
                let count = &mut self.unmatched[usize::from(t)];
                if *count > 0 {
                    *count -= 1;
                    correction.white += 1;
                }
            }
        }

        // Restore the all-zero tally
        for (&s, &t) in solution.iter().zip(trial) {
            if s != t {
                self.unmatched[usize::from(s)] = 0;
            }
        }

        correction
    }
}
