//! Seeding parameters and their bounds.

use serde::{Deserialize, Serialize};

use crate::engine::STATE_WORDS;
use crate::errors::{ErrorInfo, RandError};

/// Largest warm-up a configuration may request.
pub const MAX_WARMUP_DISCARD: usize = 1_000_000;

/// Seeding parameters shared by the lazy and explicit generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Entropy words collected next to the clock reading.
    #[serde(default = "default_entropy_words")]
    pub entropy_words: usize,
    /// Outputs discarded right after seeding.
    #[serde(default)]
    pub warmup_discard: usize,
}

fn default_entropy_words() -> usize {
    GeneratorConfig::DEFAULT.entropy_words
}

impl GeneratorConfig {
    /// Seven entropy words plus the clock, no warm-up.
    pub const DEFAULT: GeneratorConfig = GeneratorConfig {
        entropy_words: 7,
        warmup_discard: 0,
    };

    /// Checks bounds on every field.
    pub fn validate(&self) -> Result<(), RandError> {
        // The clock occupies one input word.
        let max_words = STATE_WORDS - 1;
        if self.entropy_words == 0 || self.entropy_words > max_words {
            return Err(RandError::Config(
                ErrorInfo::new("config-out-of-range", "entropy_words outside accepted range")
                    .with_context("entropy_words", self.entropy_words.to_string())
                    .with_context("max", max_words.to_string())
                    .with_hint("seeding needs at least one entropy word"),
            ));
        }
        if self.warmup_discard > MAX_WARMUP_DISCARD {
            return Err(RandError::Config(
                ErrorInfo::new("config-out-of-range", "warmup_discard outside accepted range")
                    .with_context("warmup_discard", self.warmup_discard.to_string())
                    .with_context("max", MAX_WARMUP_DISCARD.to_string()),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
