//! Pattern identifier codec
//!
//! Maps a [`PatternId`] to its pattern and back. The id is read as a number in
//! base `color_number` with `pattern_length` digits, least-significant digit
//! first, so id 1 is `[1, 0, 0, ...]`.
//!
//! The codec can optionally materialize every pattern up front into one flat
//! buffer. Lookups return a [`Cow`] either way, so callers never branch on
//! which mode is active.

use crate::core::{Color, GameConfig, Pattern, PatternId, Result, SolverError};
use rayon::prelude::*;
use std::borrow::Cow;

/// Largest number of colors (pegs across all patterns) a materialized codec may hold.
///
/// Colors are two bytes each, so this is 1 GiB.
pub const MAX_MATERIALIZED_COLORS: u64 = 1 << 29;

/// Bijection between pattern ids and patterns
#[derive(Debug, Clone)]
pub struct PatternCodec {
    config: GameConfig,
    /// Every decoded pattern back to back, `pattern_length` colors each
    cache: Option<Vec<Color>>,
}

impl PatternCodec {
    /// Codec that decodes on every lookup
    #[must_use]
    pub const fn lazy(config: GameConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    /// Codec that decodes every pattern once, up front
    ///
    /// # Errors
    /// Returns `MaterializationTooLarge` if the flat buffer would exceed
    /// [`MAX_MATERIALIZED_COLORS`].
    pub fn materialized(config: GameConfig) -> Result<Self> {
        let length = config.pattern_length() as usize;
        let entries = config
            .pattern_count()
            .checked_mul(u64::from(config.pattern_length()))
            .filter(|&n| n <= MAX_MATERIALIZED_COLORS)
            .ok_or(SolverError::MaterializationTooLarge {
                entries: config
                    .pattern_count()
                    .saturating_mul(u64::from(config.pattern_length())),
                limit: MAX_MATERIALIZED_COLORS,
            })?;

        let mut cache = vec![0; entries as usize];
        cache
            .par_chunks_mut(length)
            .enumerate()
            .for_each(|(id, slot)| decode_into(&config, id as PatternId, slot));

        Ok(Self {
            config,
            cache: Some(cache),
        })
    }

    /// Build a lazy or materialized codec depending on `precompute`
    ///
    /// # Errors
    /// See [`Self::materialized`].
    pub fn new(config: GameConfig, precompute: bool) -> Result<Self> {
        if precompute {
            Self::materialized(config)
        } else {
            Ok(Self::lazy(config))
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether patterns were precomputed
    #[inline]
    #[must_use]
    pub const fn is_materialized(&self) -> bool {
        self.cache.is_some()
    }

    /// Look up the pattern for `id`
    ///
    /// # Panics
    /// Panics if `id` is outside the pattern space.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    /// use mastermind_solver::solver::PatternCodec;
    ///
    /// let codec = PatternCodec::lazy(GameConfig::new(3, 4).unwrap());
    /// // 27 = 3 + 2×4 + 1×16
    /// assert_eq!(&*codec.decode(27), &[3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn decode(&self, id: PatternId) -> Cow<'_, [Color]> {
        assert!(
            id < self.config.pattern_count(),
            "pattern id {id} out of range"
        );

        match &self.cache {
            Some(cache) => {
                let length = self.config.pattern_length() as usize;
                let start = id as usize * length;
                Cow::Borrowed(&cache[start..start + length])
            }
            None => {
                let mut colors = vec![0; self.config.pattern_length() as usize];
                decode_into(&self.config, id, &mut colors);
                Cow::Owned(colors)
            }
        }
    }

    /// Look up the pattern for `id` as an owned [`Pattern`]
    #[must_use]
    pub fn pattern(&self, id: PatternId) -> Pattern {
        Pattern::from(self.decode(id).into_owned())
    }

    /// Inverse of [`Self::decode`]
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the pattern has the wrong length or a color
    /// outside the configured range.
    pub fn encode(&self, colors: &[Color]) -> Result<PatternId> {
        if colors.len() != self.config.pattern_length() as usize {
            return Err(SolverError::InvalidPattern(format!(
                "expected {} pegs, got {}",
                self.config.pattern_length(),
                colors.len()
            )));
        }

        let base = u64::from(self.config.color_number());
        colors.iter().rev().try_fold(0, |id, &color| {
            if u32::from(color) >= self.config.color_number() {
                return Err(SolverError::InvalidPattern(format!(
                    "color {color} is out of range 0..{}",
                    self.config.color_number()
                )));
            }
            Ok(id * base + u64::from(color))
        })
    }
}

/// Write the digits of `id` into `slot`, least-significant first
fn decode_into(config: &GameConfig, mut id: PatternId, slot: &mut [Color]) {
    let base = u64::from(config.color_number());
    for color in slot {
        *color = (id % base) as Color;
        id /= base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn decode_least_significant_first() {
        let codec = PatternCodec::lazy(GameConfig::new(4, 6).unwrap());
        assert_eq!(&*codec.decode(0), &[0, 0, 0, 0]);
        assert_eq!(&*codec.decode(1), &[1, 0, 0, 0]);
        assert_eq!(&*codec.decode(6), &[0, 1, 0, 0]);
        assert_eq!(&*codec.decode(1295), &[5, 5, 5, 5]);
    }

    #[test]
    fn decode_is_bijection() {
        let config = GameConfig::new(4, 5).unwrap();
        let codec = PatternCodec::lazy(config);

        let patterns: HashSet<Vec<Color>> = (0..config.pattern_count())
            .map(|id| codec.decode(id).into_owned())
            .collect();
        assert_eq!(patterns.len() as u64, config.pattern_count());

        for id in 0..config.pattern_count() {
            assert_eq!(codec.encode(&codec.decode(id)).unwrap(), id);
        }
    }

    #[test]
    fn materialized_agrees_with_lazy() {
        let config = GameConfig::new(5, 4).unwrap();
        let lazy = PatternCodec::lazy(config);
        let cached = PatternCodec::materialized(config).unwrap();

        assert!(!lazy.is_materialized());
        assert!(cached.is_materialized());
        for id in 0..config.pattern_count() {
            assert_eq!(lazy.decode(id), cached.decode(id));
        }
        assert!(matches!(cached.decode(7), Cow::Borrowed(_)));
        assert!(matches!(lazy.decode(7), Cow::Owned(_)));
    }

    #[test]
    fn materialization_limit_enforced() {
        // 2^32 patterns × 32 pegs is far beyond the cache limit
        let config = GameConfig::new(32, 2).unwrap();
        assert!(matches!(
            PatternCodec::materialized(config),
            Err(SolverError::MaterializationTooLarge { .. })
        ));
        assert!(PatternCodec::new(config, false).is_ok());
    }

    #[test]
    fn encode_rejects_bad_patterns() {
        let codec = PatternCodec::lazy(GameConfig::new(3, 2).unwrap());
        assert!(codec.encode(&[0, 1]).is_err());
        assert!(codec.encode(&[0, 1, 2]).is_err());
        assert_eq!(codec.encode(&[1, 0, 1]).unwrap(), 5);
    }

    #[test]
    fn owned_pattern_lookup() {
        let codec = PatternCodec::lazy(GameConfig::new(2, 3).unwrap());
        assert_eq!(codec.pattern(5).colors(), &[2, 1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn decode_out_of_range_panics() {
        let codec = PatternCodec::lazy(GameConfig::new(2, 2).unwrap());
        let _ = codec.decode(4);
    }
}
