//! Game dimensions
//!
//! A [`GameConfig`] is validated once and then passed by value or reference to
//! every component, so nothing downstream has to re-check the pattern space.

use super::error::{Result, SolverError};

/// Largest pattern space the solver accepts.
///
/// The candidate set keeps one bit per pattern, so this caps it at 512 MiB.
pub const MAX_PATTERN_SPACE: u64 = 1 << 32;

/// Colors are stored as `u16`.
pub const MAX_COLORS: u32 = 1 << 16;

/// Longest pattern accepted, whatever the color count.
///
/// With a single color the pattern space stays at 1, so the space limit alone
/// does not bound the per-pattern buffers.
pub const MAX_PATTERN_LENGTH: u32 = 64;

/// Immutable dimensions of a Mastermind game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pattern_length: u32,
    color_number: u32,
    pattern_count: u64,
}

impl GameConfig {
    /// Classic Mastermind: 4 pegs, 6 colors
    pub const CLASSIC: Self = Self {
        pattern_length: 4,
        color_number: 6,
        pattern_count: 1296,
    };

    /// Create a validated configuration
    ///
    /// # Errors
    /// - `InvalidDimensions` if either dimension is zero, a pattern is longer
    ///   than [`MAX_PATTERN_LENGTH`], or there are more than [`MAX_COLORS`]
    ///   colors
    /// - `CapacityOverflow` if `color_number^pattern_length` exceeds
    ///   [`MAX_PATTERN_SPACE`]
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// assert_eq!(config.pattern_count(), 1296);
    ///
    /// assert!(GameConfig::new(0, 6).is_err());
    /// assert!(GameConfig::new(40, 10).is_err());
    /// ```
    pub fn new(pattern_length: u32, color_number: u32) -> Result<Self> {
        if pattern_length == 0 {
            return Err(SolverError::InvalidDimensions(
                "a pattern needs at least one peg".to_string(),
            ));
        }
        if pattern_length > MAX_PATTERN_LENGTH {
            return Err(SolverError::InvalidDimensions(format!(
                "{pattern_length} pegs requested, at most {MAX_PATTERN_LENGTH} are supported"
            )));
        }
        if color_number == 0 {
            return Err(SolverError::InvalidDimensions(
                "at least one color is required".to_string(),
            ));
        }
        if color_number > MAX_COLORS {
            return Err(SolverError::InvalidDimensions(format!(
                "{color_number} colors requested, at most {MAX_COLORS} are supported"
            )));
        }

        let overflow = SolverError::CapacityOverflow {
            pattern_length,
            color_number,
            limit: MAX_PATTERN_SPACE,
        };
        let pattern_count = u64::from(color_number)
            .checked_pow(pattern_length)
            .ok_or_else(|| overflow.clone())?;
        if pattern_count > MAX_PATTERN_SPACE {
            return Err(overflow);
        }

        Ok(Self {
            pattern_length,
            color_number,
            pattern_count,
        })
    }

    /// Number of pegs per pattern
    #[inline]
    #[must_use]
    pub const fn pattern_length(&self) -> u32 {
        self.pattern_length
    }

    /// Number of available colors
    #[inline]
    #[must_use]
    pub const fn color_number(&self) -> u32 {
        self.color_number
    }

    /// Size of the pattern space, `color_number^pattern_length`
    #[inline]
    #[must_use]
    pub const fn pattern_count(&self) -> u64 {
        self.pattern_count
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
