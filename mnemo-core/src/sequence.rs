//! Symbols and pseudo-random sequence generation
//!
//! A symbol is one of the four LED/button pairs on the panel. Each round
//! generates one immutable sequence of symbols, replays it on the LEDs,
//! and then matches button presses against it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of LED/button pairs on the panel
pub const SYMBOL_COUNT: usize = 4;

/// Longest sequence a round can ask for
///
/// Round length is `level / 3 + 3`, so this bound is reached around
/// level 183 - far beyond anything the ten-lives rule allows in
/// practice.
pub const MAX_SEQUENCE_LEN: usize = 64;

/// One of the four game inputs/outputs, bound to one LED and one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from a panel index
    ///
    /// # Panics
    /// Panics if `index >= SYMBOL_COUNT`.
    pub fn new(index: usize) -> Self {
        assert!(index < SYMBOL_COUNT, "symbol index out of range");
        Self(index as u8)
    }

    /// Panel index of this symbol (0..SYMBOL_COUNT)
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all symbols in panel order
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..SYMBOL_COUNT).map(|i| Symbol(i as u8))
    }
}

/// Ordered list of symbols to be replayed and then matched
pub type Sequence = heapless::Vec<Symbol, MAX_SEQUENCE_LEN>;

/// Sequence generator wrapping a small, seedable PRNG
///
/// Seeded exactly once at startup by the firmware (from a
/// high-resolution time source); never reseeded during a run. Tests
/// inject fixed seeds for determinism.
pub struct SequenceRng {
    rng: SmallRng,
}

impl SequenceRng {
    /// Create a generator from an explicit seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate `length` independent, uniformly distributed symbols
    ///
    /// `length = 0` yields an empty sequence.
    ///
    /// # Panics
    /// Panics if `length > MAX_SEQUENCE_LEN` - a caller bug, not a
    /// runtime condition.
    pub fn generate(&mut self, length: usize) -> Sequence {
        assert!(
            length <= MAX_SEQUENCE_LEN,
            "requested sequence length exceeds capacity"
        );
        (0..length)
            .map(|_| Symbol(self.rng.gen_range(0..SYMBOL_COUNT as u8)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_sequence_is_legal() {
        let mut rng = SequenceRng::seeded(1);
        assert!(rng.generate(0).is_empty());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SequenceRng::seeded(99).generate(16);
        let b = SequenceRng::seeded(99).generate(16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_symbol_round_trip() {
        for (i, symbol) in Symbol::all().enumerate() {
            assert_eq!(symbol.index(), i);
            assert_eq!(Symbol::new(i), symbol);
        }
    }

    #[test]
    #[should_panic]
    fn test_over_capacity_request_fails_fast() {
        let mut rng = SequenceRng::seeded(0);
        let _ = rng.generate(MAX_SEQUENCE_LEN + 1);
    }

    proptest! {
        #[test]
        fn generate_returns_exact_length_in_range(
            seed in any::<u64>(),
            length in 0usize..=MAX_SEQUENCE_LEN,
        ) {
            let seq = SequenceRng::seeded(seed).generate(length);
            prop_assert_eq!(seq.len(), length);
            for symbol in &seq {
                prop_assert!(symbol.index() < SYMBOL_COUNT);
            }
        }
    }
}
