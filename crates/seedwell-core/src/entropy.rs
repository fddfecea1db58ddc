//! Entropy sources and the clock reading mixed into every seed.
//!
//! Sources are consulted only while seeding. They may be slow or depletable,
//! so callers collect a handful of words once and never retry a failed read.

use std::collections::VecDeque;

use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{ErrorInfo, RandError};

/// Produces hard-to-predict 32-bit words for seeding.
pub trait EntropySource {
    /// Returns the next entropy word.
    ///
    /// Implementations report exhaustion or platform failure with
    /// [`RandError::EntropyUnavailable`].
    fn next_u32(&mut self) -> Result<u32, RandError>;

    /// Short label recorded in seed reports and log lines.
    fn name(&self) -> &'static str;
}

/// Operating-system randomness read through [`OsRng`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_u32(&mut self) -> Result<u32, RandError> {
        let mut buf = [0u8; 4];
        OsRng.try_fill_bytes(&mut buf).map_err(|err| {
            RandError::EntropyUnavailable(
                ErrorInfo::new("entropy-unavailable", "operating system source failed")
                    .with_context("source", "os")
                    .with_context("cause", err.to_string()),
            )
        })?;
        Ok(u32::from_le_bytes(buf))
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

/// Replays a fixed list of words, then reports itself unavailable.
///
/// Used for reproducible runs: a generator fed by `FixedEntropy` and a fixed
/// clock produces the same stream on every run.
#[derive(Debug, Clone, Default)]
pub struct FixedEntropy {
    words: VecDeque<u32>,
}

impl FixedEntropy {
    /// Creates a source that yields `words` in order.
    pub fn new(words: impl IntoIterator<Item = u32>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Number of words left before the source runs dry.
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl EntropySource for FixedEntropy {
    fn next_u32(&mut self) -> Result<u32, RandError> {
        self.words.pop_front().ok_or_else(|| {
            RandError::EntropyUnavailable(
                ErrorInfo::new("entropy-unavailable", "fixed entropy list exhausted")
                    .with_context("source", "fixed"),
            )
        })
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn next_u32(&mut self) -> Result<u32, RandError> {
        (**self).next_u32()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Reads `count` words from `source`, stopping at the first failure.
pub fn collect_entropy<S>(source: &mut S, count: usize) -> Result<Vec<u32>, RandError>
where
    S: EntropySource + ?Sized,
{
    let mut words = Vec::with_capacity(count);
    for idx in 0..count {
        let word = source.next_u32().map_err(|err| match err {
            RandError::EntropyUnavailable(info) => RandError::EntropyUnavailable(
                info.with_context("collected", idx.to_string())
                    .with_context("requested", count.to_string()),
            ),
            other => other,
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Clock reading in nanoseconds, truncated to the seed word width.
pub fn clock_ticks() -> u32 {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().wrapping_mul(1_000));
    nanos as u32
}

/// Signature of a clock that can stand in for [`clock_ticks`].
pub type ClockFn = fn() -> u32;
