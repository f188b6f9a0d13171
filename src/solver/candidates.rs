//! Candidate set
//!
//! One bit per pattern id, packed into `u64` words. The population count is
//! kept alongside so [`CandidateSet::count`] is O(1).

use crate::core::PatternId;
use rand::Rng;

const WORD_BITS: u64 = u64::BITS as u64;

/// Set of pattern ids still consistent with every piece of feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<u64>,
    capacity: u64,
    count: u64,
}

impl CandidateSet {
    /// Create a set containing every id in `[0, capacity)`
    #[must_use]
    pub fn full(capacity: u64) -> Self {
        let word_count = capacity.div_ceil(WORD_BITS) as usize;
        let mut words = vec![u64::MAX; word_count];

        let tail = capacity % WORD_BITS;
        if tail != 0
            && let Some(last) = words.last_mut()
        {
            *last = (1 << tail) - 1;
        }

        Self {
            words,
            capacity,
            count: capacity,
        }
    }

    /// Size of the id space this set was created over
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of ids present
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: PatternId) -> bool {
        id < self.capacity && self.words[(id / WORD_BITS) as usize] & (1 << (id % WORD_BITS)) != 0
    }

    /// Remove `id`, returning whether it was present
    pub fn remove(&mut self, id: PatternId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.words[(id / WORD_BITS) as usize] &= !(1 << (id % WORD_BITS));
        self.count -= 1;
        true
    }

    /// Keep only the ids for which `keep` returns true
    ///
    /// Ids are visited in ascending order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(PatternId) -> bool,
    {
        let mut count = 0;
        for (index, word) in self.words.iter_mut().enumerate() {
            let base = index as u64 * WORD_BITS;
            let mut bits = *word;
            while bits != 0 {
                let bit = u64::from(bits.trailing_zeros());
                bits &= bits - 1;
                if !keep(base + bit) {
                    *word &= !(1 << bit);
                }
            }
            count += u64::from(word.count_ones());
        }
        self.count = count;
    }

    /// Iterate over present ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = PatternId> + '_ {
        self.words.iter().enumerate().flat_map(|(index, &word)| {
            let base = index as u64 * WORD_BITS;
            SetBits(word).map(move |bit| base + bit)
        })
    }

    /// The present id of the given rank (0 = smallest)
    ///
    /// Walks the words from the start, so the cost is linear in `rank`. Ranks
    /// stay small because the set shrinks every round; a rank/select index
    /// would only pay off for very large candidate spaces.
    #[must_use]
    pub fn nth(&self, mut rank: u64) -> Option<PatternId> {
        if rank >= self.count {
            return None;
        }

        for (index, &word) in self.words.iter().enumerate() {
            let ones = u64::from(word.count_ones());
            if rank < ones {
                let bit = SetBits(word).nth(rank as usize)?;
                return Some(index as u64 * WORD_BITS + bit);
            }
            rank -= ones;
        }
        None
    }

    /// Pick a present id uniformly at random
    ///
    /// Returns `None` when the set is empty.
    pub fn pick_uniform_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<PatternId> {
        if self.is_empty() {
            return None;
        }
        self.nth(rng.random_range(0..self.count))
    }
}

/// Positions of set bits in a word, lowest first
struct SetBits(u64);

impl Iterator for SetBits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let bit = u64::from(self.0.trailing_zeros());
        self.0 &= self.0 - 1;
        Some(bit)
    }
}
