//! Mastermind Solver
//!
//! Solves Mastermind codes by candidate elimination: every trial is a random
//! pattern that is still consistent with all feedback received, and each answer
//! removes the patterns that would have scored differently.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Correction, GameConfig};
//! use mastermind_solver::solver::{PatternCodec, simulate_game};
//! use rand::SeedableRng;
//!
//! let config = GameConfig::new(4, 6).unwrap();
//!
//! // Score a trial
//! let correction = Correction::calculate(&config, &[0, 1, 2, 3], &[0, 2, 1, 4]);
//! assert_eq!(correction, Correction::new(1, 2));
//!
//! // Play a whole game against a random code
//! let codec = PatternCodec::lazy(config);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let trials = simulate_game(&codec, &mut rng).unwrap();
//! assert!(trials >= 1);
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
