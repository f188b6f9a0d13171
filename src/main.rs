//! Mastermind Solver - CLI
//!
//! Interactive solver and parallel benchmark for Mastermind-style code breaking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_play, solve_code},
    core::{GameConfig, Pattern},
    output::{print_benchmark_result, print_solve_result},
    solver::PatternCodec,
};
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind solver using random consistent guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs per pattern
    #[arg(short, long, global = true, default_value_t = 4)]
    pegs: u32,

    /// Number of available colors
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you hold the code and answer with red/white pegs (default)
    Play,

    /// Run many simulated games in parallel and report trial statistics
    Benchmark {
        /// Number of games in total
        #[arg(short = 'n', long, default_value_t = 1000)]
        games: u64,

        /// Number of worker threads (default: available parallelism)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Games a worker claims at a time
        #[arg(short, long, default_value_t = 10)]
        batch_size: u64,

        /// Precompute every pattern up front (more memory, less decoding)
        #[arg(long)]
        precompute: bool,

        /// Base seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Solve one code and show each trial
    Solve {
        /// The code to solve, one color per peg (random if omitted)
        solution: Vec<u32>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Show candidate counts per trial
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.pegs, cli.colors).context("invalid game dimensions")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Benchmark {
            games,
            threads,
            batch_size,
            precompute,
            seed,
        } => run_benchmark_command(config, games, threads, batch_size, precompute, seed),
        Commands::Solve {
            solution,
            seed,
            verbose,
        } => run_solve_command(config, &solution, seed, verbose),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    let codec = PatternCodec::lazy(config);
    run_play(&codec)?;
    Ok(())
}

fn run_benchmark_command(
    config: GameConfig,
    games: u64,
    threads: Option<usize>,
    batch_size: u64,
    precompute: bool,
    seed: Option<u64>,
) -> Result<()> {
    let codec = if precompute {
        println!("Precomputing {} patterns...", config.pattern_count());
        let start = Instant::now();
        let codec = PatternCodec::materialized(config)?;
        println!("Done in {:.2}s", start.elapsed().as_secs_f64());
        codec
    } else {
        PatternCodec::lazy(config)
    };

    let mut settings = BenchmarkConfig::new(games);
    if let Some(threads) = threads {
        settings.threads = threads;
    }
    settings.batch_size = batch_size;
    settings.seed = seed;
    settings.show_progress = true;

    println!(
        "Running {games} games of {} pegs / {} colors on {} threads...",
        config.pattern_length(),
        config.color_number(),
        settings.threads
    );

    let result = run_benchmark(&codec, &settings)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_solve_command(
    config: GameConfig,
    solution: &[u32],
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let solution = if solution.is_empty() {
        None
    } else {
        Some(Pattern::from_colors(&config, solution)?)
    };

    let codec = PatternCodec::lazy(config);
    let mut solve_config = SolveConfig::new(solution);
    solve_config.seed = seed;

    let result = solve_code(solve_config, &codec)?;
    print_solve_result(&result, verbose);
    Ok(())
}
