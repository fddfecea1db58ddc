//! First-use seeded generators and the process-wide instance.
//!
//! A [`LazyGenerator`] moves through `Uninitialized -> Initializing -> Ready`
//! exactly once. Concurrent first callers block on the same initialisation
//! and none of them can observe a partially built engine. Once ready, every
//! draw locks the engine so advances are serialised. Entropy failures are
//! absorbed during initialisation by seeding from degraded material; a
//! generator that never produces a value is worse than a less random one.

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::distribution::{self, UniformInt};
use crate::engine::Engine;
use crate::entropy::{clock_ticks, collect_entropy, ClockFn, EntropySource, OsEntropy};
use crate::errors::RandError;
use crate::mixer::SeedMixer;
use crate::provenance::{SeedOrigin, SeedReport};

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const READY: u8 = 2;

/// Callback invoked once per seeding event.
///
/// Runs on the thread that completed seeding, after the generator is ready.
/// A panic in the observer reaches that caller only; the generator stays
/// seeded and the observer is not called again.
pub type SeedObserver = Box<dyn Fn(&SeedReport) + Send + Sync>;

/// Lifecycle of a [`LazyGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// No caller has drawn yet.
    Uninitialized,
    /// Seeding is in progress on some thread.
    Initializing,
    /// The engine is seeded and serving draws.
    Ready,
}

struct Seeded {
    engine: Mutex<Engine>,
    report: SeedReport,
}

/// Generator seeded on first use from an [`EntropySource`].
///
/// Cheap to declare in a `static`; no work happens until the first draw.
pub struct LazyGenerator<S> {
    config: GeneratorConfig,
    clock: ClockFn,
    source: Mutex<S>,
    seeded: OnceLock<Seeded>,
    state: AtomicU8,
    seed_events: AtomicUsize,
    observer: OnceLock<SeedObserver>,
    notified: AtomicBool,
}

impl<S: EntropySource + Send> LazyGenerator<S> {
    /// Generator with the default configuration and the system clock.
    pub const fn new(source: S) -> Self {
        Self::with_config(GeneratorConfig::DEFAULT, source)
    }

    /// Generator with an explicit configuration.
    ///
    /// The configuration is validated on first use; an invalid one falls
    /// back to [`GeneratorConfig::DEFAULT`].
    pub const fn with_config(config: GeneratorConfig, source: S) -> Self {
        Self {
            config,
            clock: clock_ticks,
            source: Mutex::new(source),
            seeded: OnceLock::new(),
            state: AtomicU8::new(UNINITIALIZED),
            seed_events: AtomicUsize::new(0),
            observer: OnceLock::new(),
            notified: AtomicBool::new(false),
        }
    }

    /// Replaces the clock read at seeding time.
    pub fn with_clock(mut self, clock: ClockFn) -> Self {
        self.clock = clock;
        self
    }

    /// Installs the seeding observer. Only the first installation wins.
    pub fn observe_seeding(&self, observer: SeedObserver) -> Result<(), SeedObserver> {
        self.observer.set(observer)
    }

    /// Draws a uniformly distributed value in `[min, max]`.
    ///
    /// Seeds the generator first if no caller has drawn yet. A `min > max`
    /// range is rejected before seeding.
    pub fn get<T: UniformInt>(&self, min: T, max: T) -> Result<T, RandError> {
        let range = distribution::UniformRange::new(min, max)?;
        let mut engine = self.engine();
        Ok(range.sample(&mut *engine))
    }

    /// Shuffles `items` with the shared engine.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        let mut engine = self.engine();
        distribution::shuffle(&mut *engine, items);
    }

    /// Runs `f` with exclusive access to the seeded engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        let mut engine = self.engine();
        f(&mut *engine)
    }

    /// Seeds the generator now if no caller has drawn yet.
    ///
    /// Lets startup code pay the seeding cost up front instead of on the
    /// first draw.
    pub fn ensure_seeded(&self) -> &SeedReport {
        &self.ready().report
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GeneratorState {
        match self.state.load(Ordering::Acquire) {
            UNINITIALIZED => GeneratorState::Uninitialized,
            INITIALIZING => GeneratorState::Initializing,
            _ => GeneratorState::Ready,
        }
    }

    /// Seeding provenance, once the generator is ready.
    pub fn report(&self) -> Option<&SeedReport> {
        self.seeded.get().map(|seeded| &seeded.report)
    }

    /// Number of times this generator has been seeded (zero or one).
    pub fn seed_events(&self) -> usize {
        self.seed_events.load(Ordering::Acquire)
    }

    fn ready(&self) -> &Seeded {
        let seeded = self.seeded.get_or_init(|| self.seed());
        // Claimed before the call so a panicking observer is never rerun.
        if !self.notified.load(Ordering::Acquire) && !self.notified.swap(true, Ordering::AcqRel) {
            if let Some(observer) = self.observer.get() {
                observer(&seeded.report);
            }
        }
        seeded
    }

    fn engine(&self) -> MutexGuard<'_, Engine> {
        // The engine state is valid between draws even if a holder panicked.
        self.ready()
            .engine
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn seed(&self) -> Seeded {
        self.state.store(INITIALIZING, Ordering::Release);

        let config = match self.config.validate() {
            Ok(()) => self.config,
            Err(err) => {
                warn!(error = %err, "invalid generator config, using defaults");
                GeneratorConfig::DEFAULT
            }
        };

        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        let ticks = (self.clock)();
        let (material, origin, entropy_words) =
            match collect_entropy(&mut *source, config.entropy_words) {
                Ok(words) => (
                    SeedMixer::build(&words, ticks),
                    SeedOrigin::Entropy {
                        source: source.name().to_string(),
                    },
                    words.len(),
                ),
                Err(err) => {
                    warn!(
                        source = source.name(),
                        error = %err,
                        "entropy unavailable, seeding from degraded material"
                    );
                    (
                        SeedMixer::degraded(ticks),
                        SeedOrigin::Degraded {
                            reason: err.to_string(),
                        },
                        0,
                    )
                }
            };
        drop(source);

        let mut engine = Engine::new(&material);
        engine.discard(config.warmup_discard);
        let report = SeedReport::new(
            origin,
            entropy_words,
            ticks,
            &material,
            config.warmup_discard,
        );
        debug!(
            fingerprint = %report.fingerprint,
            entropy_words,
            degraded = report.origin.is_degraded(),
            warmup = config.warmup_discard,
            "generator seeded"
        );

        self.seed_events.fetch_add(1, Ordering::AcqRel);
        self.state.store(READY, Ordering::Release);
        Seeded {
            engine: Mutex::new(engine),
            report,
        }
    }
}

static GLOBAL: LazyGenerator<OsEntropy> = LazyGenerator::new(OsEntropy);

/// Draws a uniformly distributed value in `[min, max]` from the shared
/// process-wide generator.
///
/// The generator seeds itself from the operating system on the first call
/// from any thread and is never reseeded.
///
/// ```
/// let roll = seedwell_core::get(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn get<T: UniformInt>(min: T, max: T) -> Result<T, RandError> {
    GLOBAL.get(min, max)
}

/// Shuffles `items` with the shared process-wide generator.
///
/// ```
/// let mut deck: Vec<u32> = (0..52).collect();
/// seedwell_core::shuffle_global(&mut deck);
/// deck.sort_unstable();
/// assert_eq!(deck, (0..52).collect::<Vec<_>>());
/// ```
pub fn shuffle_global<T>(items: &mut [T]) {
    GLOBAL.shuffle(items)
}

/// Seeds the shared generator now if needed and returns its provenance.
pub fn ensure_global_seeded() -> SeedReport {
    GLOBAL.ensure_seeded().clone()
}

/// Lifecycle state of the shared generator.
pub fn global_state() -> GeneratorState {
    GLOBAL.state()
}

/// Seeding provenance of the shared generator, once it has been used.
pub fn global_report() -> Option<SeedReport> {
    GLOBAL.report().cloned()
}

/// Number of seeding events on the shared generator (zero or one).
pub fn global_seed_events() -> usize {
    GLOBAL.seed_events()
}

/// Installs the seeding observer of the shared generator.
///
/// Must run before the first draw to see the event. Returns the observer
/// back if one was already installed.
pub fn observe_global_seeding(observer: SeedObserver) -> Result<(), SeedObserver> {
    GLOBAL.observe_seeding(observer)
}
