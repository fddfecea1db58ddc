//! Unbiased inclusive-range sampling over raw engine output.
//!
//! Each draw rejects the low `2^w mod span` raw values so the remaining
//! space splits evenly into `span` buckets; reducing the raw value modulo
//! `span` without that step would favour small offsets. Types up to 32 bits
//! consume 32-bit words, wider types consume 64-bit words.
//!
//! Engine call counts are part of the contract: `min == max` returns `min`
//! without touching the engine, and `min > max` fails without touching it.

use std::fmt::Display;

use rand::RngCore;

use crate::errors::RandError;

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can be sampled uniformly from a closed range.
///
/// Sealed: implemented for the primitive integers only.
///
/// ```compile_fail
/// use std::fmt;
///
/// #[derive(Clone, Copy, PartialEq, PartialOrd)]
/// struct Meters(u32);
///
/// impl fmt::Display for Meters {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}m", self.0)
///     }
/// }
///
/// impl seedwell_core::UniformInt for Meters {}
/// ```
pub trait UniformInt: sealed::Sealed + Copy + PartialOrd + Display {
    /// Draws a value in `[min, max]`; callers guarantee `min < max`.
    #[doc(hidden)]
    fn sample_span<R: RngCore + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;
}

/// Draws `offset` in `[0, range]` from 32-bit words.
#[inline]
fn offset_u32<R: RngCore + ?Sized>(rng: &mut R, range: u32) -> u32 {
    if range == u32::MAX {
        return rng.next_u32();
    }
    let span = range + 1;
    let threshold = span.wrapping_neg() % span;
    loop {
        let value = rng.next_u32();
        if value >= threshold {
            return value % span;
        }
    }
}

/// Draws `offset` in `[0, range]` from 64-bit words.
#[inline]
fn offset_u64<R: RngCore + ?Sized>(rng: &mut R, range: u64) -> u64 {
    if range == u64::MAX {
        return rng.next_u64();
    }
    let span = range + 1;
    let threshold = span.wrapping_neg() % span;
    loop {
        let value = rng.next_u64();
        if value >= threshold {
            return value % span;
        }
    }
}

macro_rules! impl_uniform_int {
    ($($ty:ty => $unsigned:ty, $word:ty, $draw:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl UniformInt for $ty {
                #[inline]
                fn sample_span<R: RngCore + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    let range = (max as $unsigned).wrapping_sub(min as $unsigned) as $word;
                    let offset = $draw(rng, range);
                    (min as $unsigned).wrapping_add(offset as $unsigned) as $ty
                }
            }
        )*
    };
}

impl_uniform_int! {
    u8 => u8, u32, offset_u32;
    u16 => u16, u32, offset_u32;
    u32 => u32, u32, offset_u32;
    u64 => u64, u64, offset_u64;
    usize => usize, u64, offset_u64;
    i8 => u8, u32, offset_u32;
    i16 => u16, u32, offset_u32;
    i32 => u32, u32, offset_u32;
    i64 => u64, u64, offset_u64;
    isize => usize, u64, offset_u64;
}

/// Closed interval `[min, max]` reused across draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformRange<T> {
    min: T,
    max: T,
}

impl<T: UniformInt> UniformRange<T> {
    /// Creates the range, rejecting `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, RandError> {
        if min > max {
            return Err(RandError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Draws one value; a single-value range never consults `rng`.
    #[inline]
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> T {
        if self.min == self.max {
            return self.min;
        }
        T::sample_span(rng, self.min, self.max)
    }
}

/// Draws one value in `[min, max]` from `rng`.
pub fn sample<T, R>(rng: &mut R, min: T, max: T) -> Result<T, RandError>
where
    T: UniformInt,
    R: RngCore + ?Sized,
{
    Ok(UniformRange::new(min, max)?.sample(rng))
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R: RngCore + ?Sized>(rng: &mut R, items: &mut [T]) {
    for idx in (1..items.len()).rev() {
        let pick = UniformRange { min: 0usize, max: idx }.sample(rng);
        items.swap(idx, pick);
    }
}
