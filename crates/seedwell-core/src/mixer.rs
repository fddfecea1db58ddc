//! Seed material and the avalanche expansion that fills engine state.
//!
//! A 19968-bit engine seeded from one 32-bit value can reach at most 2^32 of
//! its states, and some early outputs become unreachable. The mixer instead
//! takes the clock plus several entropy words and expands them to the full
//! state size so that every output word depends on every input bit.
//!
//! The expansion is the `seed_seq` generation procedure of the C++ standard
//! library, which keeps streams comparable with `std::mt19937` seeded through
//! a `std::seed_seq` holding the same words.

use std::hash::{Hash, Hasher};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use siphasher::sip::SipHasher13;

use crate::engine::STATE_WORDS;
use crate::errors::{ErrorInfo, RandError};

const FILL: u32 = 0x8b8b_8b8b;
const MIX_ADD: u32 = 1_664_525;
const MIX_XOR: u32 = 1_566_083_941;

/// Number of words the degraded path derives in place of real entropy.
const DEGRADED_WORDS: usize = 7;

static DEGRADED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Ordered seed words used to initialise an engine.
///
/// Never empty. Material of exactly [`STATE_WORDS`] words is loaded into the
/// engine as-is; shorter or longer material is expanded first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SeedMaterial {
    words: Vec<u32>,
}

impl SeedMaterial {
    /// Wraps raw words, rejecting an empty list.
    pub fn from_words(words: Vec<u32>) -> Result<Self, RandError> {
        if words.is_empty() {
            return Err(RandError::InvalidSeed(
                ErrorInfo::new("empty-seed", "seed material must hold at least one word")
                    .with_hint("use build_seed_material to derive material from entropy"),
            ));
        }
        Ok(Self { words })
    }

    /// Seed words in order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of seed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the material already matches the engine state size.
    pub fn is_state_sized(&self) -> bool {
        self.words.len() == STATE_WORDS
    }

    /// Hex SHA-256 digest of the words (little-endian), safe to log.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.words {
            hasher.update(word.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Number of differing bits against `other`, compared word by word.
    ///
    /// Words past the shorter sequence count as fully different.
    pub fn hamming_distance(&self, other: &SeedMaterial) -> u32 {
        let shared: u32 = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        let extra = self.words.len().abs_diff(other.words.len()) as u32;
        shared + extra * 32
    }
}

impl TryFrom<Vec<u32>> for SeedMaterial {
    type Error = RandError;

    fn try_from(words: Vec<u32>) -> Result<Self, Self::Error> {
        Self::from_words(words)
    }
}

impl From<SeedMaterial> for Vec<u32> {
    fn from(material: SeedMaterial) -> Self {
        material.words
    }
}

/// Builds engine-sized seed material from entropy and a clock reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedMixer;

impl SeedMixer {
    /// Mixes `[clock_ticks, entropy...]` into [`STATE_WORDS`] words.
    ///
    /// Pure: equal inputs always give equal material.
    pub fn build(entropy: &[u32], clock_ticks: u32) -> SeedMaterial {
        let mut input = Vec::with_capacity(entropy.len() + 1);
        input.push(clock_ticks);
        input.extend_from_slice(entropy);
        SeedMaterial {
            words: expand(&input, STATE_WORDS),
        }
    }

    /// Material for when no entropy word could be read.
    ///
    /// Hashes process-local values that differ between runs (timestamp,
    /// process id, thread id, a stack address, a call counter) in place of
    /// real entropy. Two processes started in the same nanosecond on the same
    /// host may still collide; callers relying on this path get variety, not
    /// unpredictability.
    pub fn degraded(clock_ticks: u32) -> SeedMaterial {
        let counter = DEGRADED_COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let marker = 0u8;
        let stack_addr = &marker as *const u8 as usize;

        let mut words = Vec::with_capacity(DEGRADED_WORDS);
        for lane in 0..DEGRADED_WORDS as u64 {
            let mut hasher = SipHasher13::new_with_keys(counter, lane);
            hasher.write_i64(nanos);
            hasher.write_u32(process::id());
            thread::current().id().hash(&mut hasher);
            hasher.write_usize(stack_addr);
            let digest = hasher.finish();
            words.push((digest ^ (digest >> 32)) as u32);
        }
        Self::build(&words, clock_ticks)
    }
}

/// Expands `input` into `len` words with the `seed_seq` avalanche rounds.
pub fn expand(input: &[u32], len: usize) -> Vec<u32> {
    let n = len;
    let mut out = vec![FILL; n];
    if n == 0 {
        return out;
    }

    let s = input.len();
    let t = if n >= 623 {
        11
    } else if n >= 68 {
        7
    } else if n >= 39 {
        5
    } else if n >= 7 {
        3
    } else {
        (n - 1) / 2
    };
    let p = (n - t) / 2;
    let q = p + t;
    let m = (s + 1).max(n);

    for k in 0..m {
        let r1 = MIX_ADD.wrapping_mul(tempter(
            out[k % n] ^ out[(k + p) % n] ^ out[(k + n - 1) % n],
        ));
        let r2 = if k == 0 {
            r1.wrapping_add(s as u32)
        } else if k <= s {
            r1.wrapping_add((k % n) as u32).wrapping_add(input[k - 1])
        } else {
            r1.wrapping_add((k % n) as u32)
        };
        out[(k + p) % n] = out[(k + p) % n].wrapping_add(r1);
        out[(k + q) % n] = out[(k + q) % n].wrapping_add(r2);
        out[k % n] = r2;
    }

    for k in m..m + n {
        let r3 = MIX_XOR.wrapping_mul(tempter(
            out[k % n]
                .wrapping_add(out[(k + p) % n])
                .wrapping_add(out[(k + n - 1) % n]),
        ));
        let r4 = r3.wrapping_sub((k % n) as u32);
        out[(k + p) % n] ^= r3;
        out[(k + q) % n] ^= r4;
        out[k % n] = r4;
    }

    out
}

#[inline]
fn tempter(x: u32) -> u32 {
    x ^ (x >> 27)
}
