//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern as its colors separated by `" ; "`
#[must_use]
pub fn format_pattern(pattern: &Pattern) -> String {
    pattern
        .colors()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ; ")
}

/// Describe how much one trial shrank the candidate set, e.g. `"1296 → 256 (5.1x)"`
#[must_use]
pub fn format_reduction(before: u64, after: u64) -> String {
    if after == 0 {
        return format!("{before} → {after}");
    }
    let factor = before as f64 / after as f64;
    format!("{before} → {after} ({factor:.1}x)")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pattern_separators() {
        let pattern = Pattern::from(vec![0, 3, 1, 5]);
        assert_eq!(format_pattern(&pattern), "0 ; 3 ; 1 ; 5");
    }

    #[test]
    fn format_single_peg() {
        assert_eq!(format_pattern(&Pattern::from(vec![7])), "7");
    }

    #[test]
    fn reduction_shows_counts_and_factor() {
        assert_eq!(format_reduction(1296, 256), "1296 → 256 (5.1x)");
        assert_eq!(format_reduction(4, 1), "4 → 1 (4.0x)");
    }

    #[test]
    fn reduction_to_empty_has_no_factor() {
        assert_eq!(format_reduction(3, 0), "3 → 0");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
