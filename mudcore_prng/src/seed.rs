// Seed descriptors and sanitization.
//
// Callers hand the subsystem a seed in whatever shape their script produced:
// nothing at all, a single integer, a single float, or a stored `(s0, s1)`
// pair from an earlier session. `sanitize_seed` is the single conversion
// point from any of those shapes into a valid `SeedState`.
//
// Entropy seeding (`Seed::Missing`) is the sole non-deterministic path in
// the crate and is confined to `entropy_words` below. Deterministic tests
// must never go through it.

use crate::error::RngError;
use crate::SeedState;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Replacement for a sanitized `s0` of zero. SplitMix64's increment.
const ZERO_S0: u64 = 0x9e37_79b9_7f4a_7c15;
/// Replacement for a sanitized `s1` of zero. Distinct from [`ZERO_S0`] so an
/// all-zero pair still maps to two different words.
const ZERO_S1: u64 = 0x6a09_e667_f3bc_c909;

/// A seed in one of the shapes the scripting layer can supply.
///
/// Closed set: anything else is malformed by construction. Use
/// [`Seed::from_slice`] to convert a stored word array, which rejects
/// wrong-length input with `InvalidSeed`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Seed {
    /// No seed supplied: sanitization draws from host entropy.
    Missing,
    /// A single integer, expanded deterministically into both state words.
    Int(i64),
    /// A single float, expanded from its bit pattern. Non-finite values
    /// fail sanitization.
    Float(f64),
    /// A stored `(s0, s1)` pair, interpreted directly (bit-cast into
    /// unsigned space, wrapping — no error).
    Pair(i64, i64),
}

impl Seed {
    /// Interpret a stored word array as a seed pair.
    ///
    /// Only length 2 is a valid shape; anything else is `InvalidSeed`.
    pub fn from_slice(words: &[i64]) -> Result<Seed, RngError> {
        match words {
            [s0, s1] => Ok(Seed::Pair(*s0, *s1)),
            _ => Err(RngError::InvalidSeed),
        }
    }
}

/// Convert a seed descriptor into a valid generator state.
///
/// Deterministic for every shape except `Missing`: identical descriptors
/// always yield identical states. Zero words are replaced after conversion
/// (`s0` → `0x9e37_79b9_7f4a_7c15`, `s1` → `0x6a09_e667_f3bc_c909`), so the
/// result is never the all-zero fixed point of the recurrence.
pub fn sanitize_seed(seed: Seed) -> Result<SeedState, RngError> {
    let (s0, s1) = match seed {
        Seed::Missing => entropy_words(),
        Seed::Int(v) => expand(v as u64),
        Seed::Float(v) => {
            if !v.is_finite() {
                return Err(RngError::InvalidSeed);
            }
            expand(v.to_bits())
        }
        Seed::Pair(a, b) => (a as u64, b as u64),
    };
    Ok(SeedState {
        s0: if s0 == 0 { ZERO_S0 } else { s0 },
        s1: if s1 == 0 { ZERO_S1 } else { s1 },
    })
}

/// Expand a single 64-bit word into both state words via SplitMix64.
///
/// This is the standard recommendation from the xorshift/xoshiro authors
/// for growing a small seed into a larger state.
fn expand(word: u64) -> (u64, u64) {
    let mut sm = word;
    (splitmix64(&mut sm), splitmix64(&mut sm))
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Monotonic per-process tick mixed into entropy seeds, so two `Missing`
/// sanitizations in the same nanosecond still differ.
static ENTROPY_TICK: AtomicU64 = AtomicU64::new(0);

/// Host entropy: wall-clock nanos mixed with the process tick counter
/// through SplitMix64. Non-deterministic by design; only `Seed::Missing`
/// reaches this.
fn entropy_words() -> (u64, u64) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let tick = ENTROPY_TICK.fetch_add(1, Ordering::Relaxed);
    expand(nanos ^ tick.rotate_left(32))
}
