//! Core domain types for Mastermind
//!
//! Game dimensions, patterns, feedback scoring and errors. Nothing here
//! depends on the solver or on any I/O.

mod config;
mod correction;
mod error;
mod pattern;

pub use config::{GameConfig, MAX_COLORS, MAX_PATTERN_LENGTH, MAX_PATTERN_SPACE};
pub use correction::{Correction, Scorer};
pub use error::{Result, SolverError};
pub use pattern::{Color, Pattern, PatternId};
