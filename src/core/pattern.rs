//! Peg patterns
//!
//! A pattern is an ordered sequence of colors, one per peg. Scoring and
//! decoding work on plain `&[Color]` slices so cached and freshly decoded
//! patterns can be used interchangeably; [`Pattern`] is the owned form.

use super::config::GameConfig;
use super::error::{Result, SolverError};
use std::fmt;

/// A peg color, in `[0, color_number)`
pub type Color = u16;

/// Identifier of a pattern, in `[0, color_number^pattern_length)`
pub type PatternId = u64;

/// An owned pattern of colored pegs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Color>);

impl Pattern {
    /// Build a pattern from raw color values, checking it against the game dimensions
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the length differs from the configured peg
    /// count or any color is out of range.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{GameConfig, Pattern};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let pattern = Pattern::from_colors(&config, &[0, 1, 2, 3]).unwrap();
    /// assert_eq!(pattern.to_string(), "0 1 2 3");
    ///
    /// assert!(Pattern::from_colors(&config, &[0, 1, 2]).is_err());
    /// assert!(Pattern::from_colors(&config, &[0, 1, 2, 6]).is_err());
    /// ```
    pub fn from_colors(config: &GameConfig, colors: &[u32]) -> Result<Self> {
        if colors.len() != config.pattern_length() as usize {
            return Err(SolverError::InvalidPattern(format!(
                "expected {} pegs, got {}",
                config.pattern_length(),
                colors.len()
            )));
        }

        let colors = colors
            .iter()
            .map(|&c| {
                if c < config.color_number() {
                    Ok(c as Color)
                } else {
                    Err(SolverError::InvalidPattern(format!(
                        "color {c} is out of range 0..{}",
                        config.color_number()
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self(colors))
    }

    /// Get the pegs as a slice
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no pegs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Color>> for Pattern {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl From<&[Color]> for Pattern {
    fn from(colors: &[Color]) -> Self {
        Self(colors.to_vec())
    }
}

impl AsRef<[Color]> for Pattern {
    fn as_ref(&self) -> &[Color] {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_colors_valid() {
        let config = GameConfig::new(3, 2).unwrap();
        let pattern = Pattern::from_colors(&config, &[0, 0, 1]).unwrap();
        assert_eq!(pattern.colors(), &[0, 0, 1]);
        assert_eq!(pattern.len(), 3);
        assert!(!pattern.is_empty());
    }

    #[test]
    fn from_colors_wrong_length() {
        let config = GameConfig::CLASSIC;
        assert!(matches!(
            Pattern::from_colors(&config, &[0, 1, 2, 3, 4]),
            Err(SolverError::InvalidPattern(_))
        ));
        assert!(Pattern::from_colors(&config, &[]).is_err());
    }

    #[test]
    fn from_colors_out_of_range() {
        let config = GameConfig::new(2, 3).unwrap();
        assert!(Pattern::from_colors(&config, &[2, 3]).is_err());
        assert!(Pattern::from_colors(&config, &[2, 2]).is_ok());
    }

    #[test]
    fn display_space_separated() {
        let pattern = Pattern::from(vec![5, 0, 12]);
        assert_eq!(format!("{pattern}"), "5 0 12");
    }
}
