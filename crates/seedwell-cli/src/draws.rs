use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use seedwell_core::{
    build_seed_material, ensure_global_seeded, get, shuffle_global, Engine, LazyGenerator,
    OsEntropy, RandError, SeedOrigin, SeedReport, UniformInt,
};
use tracing::info;

use crate::config::load_config;

/// Options selecting where draws come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Explicit entropy words; makes every draw reproducible.
    #[arg(long = "seed", value_name = "WORD", num_args = 1..)]
    pub seed: Vec<u32>,
    /// Clock reading mixed with explicit seed words.
    #[arg(long, default_value_t = 0, requires = "seed")]
    pub clock: u32,
    /// YAML generator configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// A seeded engine, a configured lazy generator or the process global.
pub enum Draws {
    Explicit {
        engine: Engine,
        report: SeedReport,
    },
    Configured(LazyGenerator<OsEntropy>),
    Global,
}

impl Draws {
    pub fn from_args(args: &SourceArgs) -> Result<Self, Box<dyn Error>> {
        let config = match &args.config {
            Some(path) => Some(load_config(path)?),
            None => None,
        };

        if !args.seed.is_empty() {
            let config = config.unwrap_or_default();
            let material = build_seed_material(&args.seed, args.clock);
            let mut engine = Engine::new(&material);
            engine.discard(config.warmup_discard);
            let report = SeedReport::new(
                SeedOrigin::Entropy {
                    source: "explicit".into(),
                },
                args.seed.len(),
                args.clock,
                &material,
                config.warmup_discard,
            );
            info!(fingerprint = %report.fingerprint, "using explicit seed");
            return Ok(Draws::Explicit { engine, report });
        }

        Ok(match config {
            Some(config) => Draws::Configured(LazyGenerator::with_config(config, OsEntropy)),
            None => Draws::Global,
        })
    }

    pub fn get<T: UniformInt>(&mut self, min: T, max: T) -> Result<T, RandError> {
        match self {
            Draws::Explicit { engine, .. } => engine.sample(min, max),
            Draws::Configured(generator) => generator.get(min, max),
            Draws::Global => get(min, max),
        }
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            Draws::Explicit { engine, .. } => seedwell_core::shuffle(engine, items),
            Draws::Configured(generator) => generator.shuffle(items),
            Draws::Global => shuffle_global(items),
        }
    }

    /// Provenance of the underlying generator, seeding it if necessary.
    pub fn report(&self) -> SeedReport {
        match self {
            Draws::Explicit { report, .. } => report.clone(),
            Draws::Configured(generator) => generator.ensure_seeded().clone(),
            Draws::Global => ensure_global_seeded(),
        }
    }
}
