//! Mastermind solving engine
//!
//! Candidate elimination: keep the set of patterns consistent with all
//! feedback, guess one of them at random, and shrink the set with the answer.

mod candidates;
mod codec;
mod eliminator;
mod selector;
pub mod session;

pub use candidates::CandidateSet;
pub use codec::{MAX_MATERIALIZED_COLORS, PatternCodec};
pub use eliminator::Eliminator;
pub use selector::{RandomSelector, TrialSelector};
pub use session::{
    GameOutcome, GameSession, GameState, Oracle, Progress, SimulatedOracle, simulate_game,
};
