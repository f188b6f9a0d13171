//! Display functions for command results

use super::formatters::{create_progress_bar, format_pattern, format_reduction};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        format_pattern(&result.solution).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTrial {}: {}  →  {}",
            i + 1,
            format_pattern(&step.trial),
            step.correction
        );

        if verbose {
            println!(
                "  Candidates: {}",
                format_reduction(step.candidates_before, step.candidates_after)
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} trials!", result.steps.len())
            .green()
            .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average trials:   {}",
        format!("{:.3}", result.average_trials)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_trials).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_trials).yellow()
    );
    println!("   Threads:          {}", result.threads);
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rows: Vec<_> = result.distribution.iter().collect();
    rows.sort_unstable_by_key(|(trials, _)| **trials);
    let peak = rows.iter().map(|(_, count)| **count).max().unwrap_or(0);

    for (trials, &count) in rows {
        let pct = count as f64 / result.total_games as f64 * 100.0;
        let bar = create_progress_bar(count as f64, peak as f64, 40);
        println!("   {trials:>3}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
