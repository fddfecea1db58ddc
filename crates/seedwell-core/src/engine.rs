//! MT19937 engine seeded from [`SeedMaterial`].
//!
//! The engine has a single observable state, "seeded", reached at
//! construction. There is no reseed operation: a differently seeded stream
//! needs a new `Engine` value. [`Engine::new`] performs no warm-up; the
//! generators in [`crate::lazy`] and [`Engine::from_entropy`] discard
//! `warmup_discard` outputs when configured to.

use rand::RngCore;

use crate::config::GeneratorConfig;
use crate::distribution::{self, UniformInt};
use crate::entropy::{collect_entropy, ClockFn, EntropySource};
use crate::errors::RandError;
use crate::mixer::{expand, SeedMaterial, SeedMixer};
use crate::provenance::{SeedOrigin, SeedReport};

/// Number of 32-bit words in the engine state.
pub const STATE_WORDS: usize = 624;

const SHIFT: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 32-bit Mersenne Twister (period 2^19937 - 1).
///
/// Construction from the same [`SeedMaterial`] always yields the same output
/// stream, and the stream equals that of `std::mt19937` seeded from a
/// `std::seed_seq` over the same raw words.
#[derive(Clone)]
pub struct Engine {
    state: Box<[u32; STATE_WORDS]>,
    index: usize,
}

impl Engine {
    /// Creates an engine from seed material.
    ///
    /// Material of [`STATE_WORDS`] words becomes the state directly; any
    /// other length is expanded through the mixer first.
    pub fn new(seed: &SeedMaterial) -> Self {
        let expanded;
        let words = if seed.is_state_sized() {
            seed.words()
        } else {
            expanded = expand(seed.words(), STATE_WORDS);
            &expanded[..]
        };

        let mut state = Box::new([0u32; STATE_WORDS]);
        state.copy_from_slice(words);
        // An all-zero significant state would only ever emit zeros.
        if state[0] & UPPER_MASK == 0 && state[1..].iter().all(|&word| word == 0) {
            state[0] = UPPER_MASK;
        }

        Self {
            state,
            index: STATE_WORDS,
        }
    }

    /// Collects entropy, seeds an engine and applies the configured warm-up.
    ///
    /// Unlike the lazy generators this surfaces
    /// [`RandError::EntropyUnavailable`] instead of degrading.
    pub fn from_entropy<S>(
        source: &mut S,
        clock: ClockFn,
        config: &GeneratorConfig,
    ) -> Result<(Self, SeedReport), RandError>
    where
        S: EntropySource + ?Sized,
    {
        config.validate()?;
        let entropy = collect_entropy(source, config.entropy_words)?;
        let ticks = clock();
        let material = SeedMixer::build(&entropy, ticks);
        let mut engine = Self::new(&material);
        engine.discard(config.warmup_discard);
        let report = SeedReport::new(
            SeedOrigin::Entropy {
                source: source.name().to_string(),
            },
            entropy.len(),
            ticks,
            &material,
            config.warmup_discard,
        );
        Ok((engine, report))
    }

    /// Returns the next output word, advancing the state.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        if self.index >= STATE_WORDS {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Advances past `count` outputs without returning them.
    pub fn discard(&mut self, count: usize) {
        for _ in 0..count {
            self.next_word();
        }
    }

    /// Draws a uniformly distributed value in `[min, max]`.
    pub fn sample<T: UniformInt>(&mut self, min: T, max: T) -> Result<T, RandError> {
        distribution::sample(self, min, max)
    }

    fn twist(&mut self) {
        for i in 0..STATE_WORDS {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % STATE_WORDS] & LOWER_MASK);
            let mut next = self.state[(i + SHIFT) % STATE_WORDS] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }

    #[cfg(test)]
    fn from_classic_seed(seed: u32) -> Self {
        let mut state = Box::new([0u32; STATE_WORDS]);
        state[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            state,
            index: STATE_WORDS,
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Engine {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_word());
        let high = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Constructs an independent engine from explicit material.
pub fn seeded_engine(seed: &SeedMaterial) -> Engine {
    Engine::new(seed)
}
