//! Records describing how a generator was seeded.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::mixer::SeedMaterial;

/// Where the seed words came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedOrigin {
    /// Every requested word was read from the named entropy source.
    Entropy {
        /// Label of the source, e.g. `os`.
        source: String,
    },
    /// Entropy failed and the degraded fallback was used instead.
    Degraded {
        /// Diagnostic from the failed entropy read.
        reason: String,
    },
}

impl SeedOrigin {
    /// Whether the seed fell back to degraded material.
    pub fn is_degraded(&self) -> bool {
        matches!(self, SeedOrigin::Degraded { .. })
    }
}

/// Provenance attached to a seeded generator.
///
/// Holds a fingerprint of the material rather than the words themselves so
/// reports can be logged freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    /// Origin of the seed words.
    pub origin: SeedOrigin,
    /// Entropy words that went into the material.
    pub entropy_words: usize,
    /// Clock reading mixed into the material.
    pub clock_ticks: u32,
    /// SHA-256 fingerprint of the material.
    pub fingerprint: String,
    /// Outputs discarded after seeding.
    pub warmup_discard: usize,
    /// RFC 3339 timestamp of the seeding.
    pub seeded_at: String,
}

impl SeedReport {
    /// Builds a report stamped with the current time.
    pub fn new(
        origin: SeedOrigin,
        entropy_words: usize,
        clock_ticks: u32,
        material: &SeedMaterial,
        warmup_discard: usize,
    ) -> Self {
        Self {
            origin,
            entropy_words,
            clock_ticks,
            fingerprint: material.fingerprint(),
            warmup_discard,
            seeded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
