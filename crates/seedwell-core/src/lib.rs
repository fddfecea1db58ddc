#![deny(missing_docs)]

//! Self-seeding pseudo-random number generation.
//!
//! Entropy words and a clock reading are expanded by the [`SeedMixer`] into
//! a full 624-word state for an MT19937 [`Engine`]; [`UniformRange`] maps
//! engine output onto closed integer ranges without modulo bias. The
//! process-wide generator behind [`get`] is seeded exactly once, on first
//! use, and never reseeded. Code that wants its randomness as an explicit
//! dependency holds a [`LazyGenerator`] or an [`Engine`] instead.
//!
//! Conformance: `Engine::new(&build_seed_material(&[42], 0))` emits
//! `90271246, 1871190197, 3973171788` first, matching `std::mt19937` seeded
//! through `std::seed_seq{0, 42}`.

pub mod config;
pub mod distribution;
pub mod engine;
pub mod entropy;
pub mod errors;
pub mod lazy;
pub mod mixer;
pub mod provenance;

pub use config::GeneratorConfig;
pub use distribution::{sample, shuffle, UniformInt, UniformRange};
pub use engine::{seeded_engine, Engine, STATE_WORDS};
pub use entropy::{clock_ticks, EntropySource, FixedEntropy, OsEntropy};
pub use errors::{ErrorInfo, RandError};
pub use lazy::{
    ensure_global_seeded, get, global_report, global_seed_events, global_state,
    observe_global_seeding, shuffle_global, GeneratorState, LazyGenerator, SeedObserver,
};
pub use mixer::{SeedMaterial, SeedMixer};
pub use provenance::{SeedOrigin, SeedReport};

/// Expands entropy words and a clock reading into engine-sized material.
pub fn build_seed_material(entropy: &[u32], clock_ticks: u32) -> SeedMaterial {
    SeedMixer::build(entropy, clock_ticks)
}
