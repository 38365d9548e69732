//! # Seeded Sequence
//!
//! String-keyed deterministic stream driving every choice a card makes.
//!
//! This is **not** a general-purpose RNG. It is a deliberately simple,
//! auditable mapping `((seed + offset * 12345) mod 100) / 100` with a
//! visible period. Every card in the catalog already owns its art through
//! this exact arithmetic, so it must never be swapped for a "better" generator.
//!
//! ## Determinism Guarantee
//!
//! The id is folded with 32-bit wrapping multiply/add, bit-for-bit what a
//! native signed 32-bit accumulator produces, on any platform.

/// Multiplier applied to the offset before reducing mod 100.
const OFFSET_STRIDE: u64 = 12_345;

/// Number of distinct values `next` can produce.
const RESOLUTION: u64 = 100;

/// Deterministic stream keyed by a card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeededSequence {
    seed: u32,
}

impl SeededSequence {
    /// Creates a sequence from a raw seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Creates a sequence from a card identifier.
    #[inline]
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::new(seed(id))
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn seed(self) -> u32 {
        self.seed
    }

    /// Returns the value at `offset`, in `[0, 1)` with a resolution of 0.01.
    #[inline]
    #[must_use]
    pub fn next(self, offset: u32) -> f64 {
        next(self.seed, offset)
    }

    /// Picks one of `options` using the value at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    #[inline]
    #[must_use]
    pub fn pick<T>(self, offset: u32, options: &[T]) -> &T {
        pick(self.seed, offset, options)
    }
}

/// Folds an identifier into a seed.
///
/// `acc = acc * 31 + code` over the UTF-16 code units, wrapping as signed
/// 32-bit arithmetic, then the absolute value. `i32::MIN` maps to
/// `2_147_483_648`, which is why the result is `u32`.
#[must_use]
pub fn seed(id: &str) -> u32 {
    let acc = id
        .encode_utf16()
        .fold(0i32, |acc, code| acc.wrapping_mul(31).wrapping_add(i32::from(code)));
    acc.unsigned_abs()
}

/// Value of the stream for `seed` at `offset`.
#[inline]
#[must_use]
pub fn next(seed: u32, offset: u32) -> f64 {
    let step = (u64::from(seed) + u64::from(offset) * OFFSET_STRIDE) % RESOLUTION;
    step as f64 / RESOLUTION as f64
}

/// Picks `options[floor(next(seed, offset) * len)]`.
///
/// # Panics
///
/// Panics if `options` is empty.
#[inline]
#[must_use]
pub fn pick<T>(seed: u32, offset: u32, options: &[T]) -> &T {
    let index = (next(seed, offset) * options.len() as f64).floor() as usize;
    &options[index]
}
