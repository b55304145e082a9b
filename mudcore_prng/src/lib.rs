// Deterministic, portable pseudo-random number generator for mudcore.
//
// Implements xorshift128+ (Vigna, 2014) with explicit state threading: every
// operation consumes a `SeedState` and returns the advanced state alongside
// its result. Nothing in this crate holds hidden generator state — all state
// lives in the value the caller passes around, which is what makes area
// resets, loot rolls, and generated descriptions replayable from a stored
// seed.
//
// This is a hand-rolled implementation with zero RNG dependencies, chosen
// for portability and to guarantee identical output across all platforms.
//
// **Critical constraint: determinism.** Every operation here must produce
// identical output given the same prior state, regardless of platform,
// compiler version, or optimization level. Do not use stdlib PRNG, hash-map
// iteration order, or any other source of non-determinism in this crate.
// The sole non-deterministic entry point is entropy seeding in `seed.rs`,
// reached only through `Seed::Missing`.
//
// Architecture:
// - `lib.rs` (this file): `SeedState` — the 128-bit state, the core step,
//   and the scalar derivations built on it
// - `seed.rs`: the `Seed` descriptor and sanitization into a valid state
// - `choice.rs`: collection operations — uniform choice, weighted choice,
//   Fisher-Yates shuffle
// - `error.rs`: the `RngError` taxonomy

pub mod choice;
pub mod error;
pub mod seed;

// Re-export key types at crate root for convenience.
pub use choice::{choose_uniform, choose_weighted, shuffle};
pub use error::RngError;
pub use seed::{Seed, sanitize_seed};

use serde::{Deserialize, Serialize};

/// Xorshift128+ generator state: two 64-bit words.
///
/// Invariant: never all-zero (an all-zero state is a fixed point of the
/// recurrence and would emit zeros forever). The only way to construct one
/// is [`sanitize_seed`], which enforces this; every advancing operation
/// preserves it.
///
/// `SeedState` is `Copy` and every operation returns a fresh value, so a
/// caller can fork a stream by reusing an old state — two chains advanced
/// from the same value produce identical sub-streams, which is how
/// reproducibility is tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedState {
    pub(crate) s0: u64,
    pub(crate) s1: u64,
}

impl SeedState {
    /// Advance the state by one xorshift128+ step and emit one raw draw.
    ///
    /// This is the engine every derivation is built on: exactly one call
    /// per draw consumed. The raw value is `s0' + s1'` with wrapping
    /// addition, per the reference recurrence. Never fails.
    pub fn step(self) -> (SeedState, u64) {
        let mut x = self.s0;
        let y = self.s1;
        x ^= x << 23;
        x ^= x >> 17;
        x ^= y ^ (y >> 26);
        let next = SeedState { s0: y, s1: x };
        let raw = next.s0.wrapping_add(next.s1);
        (next, raw)
    }

    /// Generate a uniform integer in `[0, n)`, consuming one draw.
    ///
    /// Fails with `InvalidRange` if `n == 0`. The reduction is a plain
    /// modulo: when `n` does not evenly divide 2^64 the low values are
    /// very slightly favored. That bias is an accepted, documented
    /// property of this engine — the draw count per call is part of the
    /// reproducibility contract, so no rejection loop is used.
    pub fn uniform_int(self, n: u64) -> Result<(SeedState, u64), RngError> {
        if n == 0 {
            return Err(RngError::InvalidRange);
        }
        let (next, raw) = self.step();
        Ok((next, raw % n))
    }

    /// Generate a uniform float in `[0, bound)`, consuming one draw.
    ///
    /// Fails with `InvalidRange` unless `bound` is finite and positive.
    /// The draw's upper 53 bits fill the f64 mantissa (full double
    /// precision), then the unit value is scaled by `bound`.
    pub fn uniform_float(self, bound: f64) -> Result<(SeedState, f64), RngError> {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(RngError::InvalidRange);
        }
        let (next, raw) = self.step();
        let unit = (raw >> 11) as f64 / (1u64 << 53) as f64;
        Ok((next, unit * bound))
    }

    /// Generate a uniform integer in `[min, max]` (inclusive both ends),
    /// consuming exactly one draw — even when `min == max`.
    ///
    /// Fails with `InvalidRange` if `min > max`. The span is computed in
    /// unsigned space so the full `i64` range works; wrapping arithmetic
    /// lands the offset back in `[min, max]`.
    pub fn clamped_int(self, min: i64, max: i64) -> Result<(SeedState, i64), RngError> {
        if min > max {
            return Err(RngError::InvalidRange);
        }
        let (next, raw) = self.step();
        let span = max.wrapping_sub(min) as u64;
        let offset = if span == u64::MAX { raw } else { raw % (span + 1) };
        Ok((next, min.wrapping_add(offset as i64)))
    }
}
