//! Trial selection
//!
//! Defines the [`TrialSelector`] trait and the random-consistent-guess
//! implementation used by every game.

use super::CandidateSet;
use crate::core::PatternId;
use rand::Rng;

/// A strategy for choosing the next trial from the remaining candidates
pub trait TrialSelector {
    /// Select the next trial
    ///
    /// Returns `None` if the candidate set is empty.
    fn select<R: Rng + ?Sized>(&self, candidates: &CandidateSet, rng: &mut R)
    -> Option<PatternId>;
}

/// Random selection
///
/// Plays a uniformly random candidate that is consistent with all feedback so
/// far. This is not minimax-optimal but costs only a rank walk per round.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl TrialSelector for RandomSelector {
    fn select<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet,
        rng: &mut R,
    ) -> Option<PatternId> {
        candidates.pick_uniform_random(rng)
    }
}
