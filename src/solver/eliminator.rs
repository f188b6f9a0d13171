//! Candidate elimination
//!
//! Removes every candidate that would not have produced the observed feedback
//! for a trial. This re-scores each remaining candidate, which makes it the
//! dominant cost of a round.

use super::{CandidateSet, PatternCodec};
use crate::core::{Color, Correction, Result, Scorer, SolverError};

/// Filters candidate sets against observed feedback
pub struct Eliminator<'a> {
    codec: &'a PatternCodec,
    scorer: Scorer,
}

impl<'a> Eliminator<'a> {
    #[must_use]
    pub fn new(codec: &'a PatternCodec) -> Self {
        Self {
            codec,
            scorer: Scorer::new(codec.config()),
        }
    }

    /// Keep only candidates `c` with `score(c, trial) == correction`
    ///
    /// `trials` is the number of trials played so far and only feeds the error.
    ///
    /// # Errors
    /// Returns `ContradictoryFeedback` if no candidate survives. The set is
    /// left empty in that case.
    pub fn learn(
        &mut self,
        trial: &[Color],
        correction: Correction,
        set: &mut CandidateSet,
        trials: usize,
    ) -> Result<()> {
        let codec = self.codec;
        let scorer = &mut self.scorer;
        set.retain(|id| scorer.score(&codec.decode(id), trial) == correction);

        if set.is_empty() {
            return Err(SolverError::ContradictoryFeedback { trials });
        }
        Ok(())
    }
}
