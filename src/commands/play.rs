//! Interactive mode
//!
//! The solver proposes trials and a human, who knows the hidden code, answers
//! with the number of red and white pegs.

use crate::core::{Correction, Pattern, SolverError};
use crate::output::formatters::format_pattern;
use crate::solver::{GameOutcome, GameSession, Oracle, PatternCodec};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why an interactive game stopped without a solution
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before the game was over")]
    EndOfInput,

    #[error("game abandoned")]
    Quit,

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// A line of feedback typed by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Answer(Correction),
    Quit,
}

/// Parse `"<red> <white>"`
///
/// Rejects anything that is not two non-negative integers, or that no trial of
/// `pattern_length` pegs could receive.
///
/// # Errors
/// Returns a message describing what is wrong with the input.
pub fn parse_feedback(input: &str, pattern_length: u32) -> Result<Feedback, String> {
    let input = input.trim();
    if matches!(input, "q" | "quit" | "exit") {
        return Ok(Feedback::Quit);
    }

    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| format!("'{token}' is not a non-negative number"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let [red, white] = numbers[..] else {
        return Err(format!(
            "expected two numbers (red white), got {}",
            numbers.len()
        ));
    };

    if red.saturating_add(white) > pattern_length {
        return Err(format!(
            "red + white cannot exceed the {pattern_length} pegs of a pattern"
        ));
    }

    Ok(Feedback::Answer(Correction::new(red, white)))
}

/// Oracle asking a human over a line-based console
pub struct ConsoleOracle<R, W> {
    input: R,
    output: W,
    pattern_length: u32,
}

impl<R: BufRead, W: Write> ConsoleOracle<R, W> {
    pub const fn new(input: R, output: W, pattern_length: u32) -> Self {
        Self {
            input,
            output,
            pattern_length,
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PlayError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::EndOfInput);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Oracle for ConsoleOracle<R, W> {
    type Error = PlayError;

    fn judge(&mut self, trial: &Pattern, round: usize) -> Result<Correction, PlayError> {
        writeln!(
            self.output,
            "\nTrial {round}: {}",
            format_pattern(trial).bright_white().bold()
        )?;

        loop {
            let line = self.read_line("Red and white pegs")?;
            match parse_feedback(&line, self.pattern_length) {
                Ok(Feedback::Answer(correction)) => return Ok(correction),
                Ok(Feedback::Quit) => return Err(PlayError::Quit),
                Err(message) => writeln!(self.output, "{} {message}", "❌".red())?,
            }
        }
    }

    fn report(&mut self, remaining: u64) -> Result<(), PlayError> {
        writeln!(self.output, "Possibilities left: {remaining}")?;
        Ok(())
    }
}

/// Play one interactive game
///
/// # Errors
/// Returns `PlayError::Solver(ContradictoryFeedback)` when the answers given
/// admit no code, and I/O or quit errors from the console.
pub fn play_game<R: BufRead, W: Write, G: Rng>(
    codec: &PatternCodec,
    oracle: &mut ConsoleOracle<R, W>,
    rng: G,
) -> Result<GameOutcome, PlayError> {
    GameSession::new(codec, rng).play(oracle)
}

/// Run the interactive solver on stdin/stdout until the player stops
///
/// # Errors
/// Returns an error on I/O failure.
pub fn run_play(codec: &PatternCodec) -> Result<(), PlayError> {
    let config = codec.config();
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Think of a code of {} pegs using colors 0 to {}.",
        config.pattern_length(),
        config.color_number() - 1
    );
    println!("After each trial, enter the number of red pegs, a space, then the number of white pegs.");
    println!("Type 'quit' to stop.");

    let stdin = io::stdin();
    let mut oracle = ConsoleOracle::new(stdin.lock(), io::stdout(), config.pattern_length());

    loop {
        match play_game(codec, &mut oracle, rand::rng()) {
            Ok(outcome) => {
                println!(
                    "\n{} {} in {} {}",
                    "🎉 Solved:".bright_green().bold(),
                    format_pattern(&outcome.solution).bright_cyan().bold(),
                    outcome.trials,
                    if outcome.trials == 1 { "trial" } else { "trials" }
                );
            }
            Err(PlayError::Solver(err @ SolverError::ContradictoryFeedback { .. })) => {
                println!(
                    "\n{} {err}",
                    "This is impossible, a wrong answer was given at some point:".red()
                );
            }
            Err(PlayError::Quit | PlayError::EndOfInput) => break,
            Err(err) => return Err(err),
        }

        match oracle.read_line("Play again? (yes/no)") {
            Ok(answer) if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!");
            }
            Ok(_) | Err(PlayError::EndOfInput) => break,
            Err(err) => return Err(err),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
