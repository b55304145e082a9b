// Ambient (unseeded) randomness for scripts that don't care about replay.
//
// Wraps one process-wide `SeedState` behind a mutex and exposes the same
// operations as `mudcore_prng` without explicit state threading. First use
// seeds the state from host entropy, so this crate is non-reproducible by
// design — scripts that need replayable streams hold their own `SeedState`
// and call the core directly.
//
// Every call takes the lock for the whole read-derive-store cycle, so no
// two concurrent callers can advance from the same state snapshot (one
// would reuse the other's draw). The core stays free of this singleton:
// nothing in `mudcore_prng` knows it exists.

use mudcore_prng::{RngError, Seed, SeedState, choice, sanitize_seed};
use std::sync::{LazyLock, Mutex};

/// The process-wide generator state, lazily seeded from host entropy.
static STATE: LazyLock<Mutex<SeedState>> = LazyLock::new(|| {
    // `Missing` never fails sanitization.
    let state = sanitize_seed(Seed::Missing).expect("entropy seed is always valid");
    Mutex::new(state)
});

/// Run one deterministic operation against the shared state, storing the
/// advanced state back before returning. A failed operation stores nothing
/// (the state it would have advanced is untouched).
fn with_state<R>(
    op: impl FnOnce(SeedState) -> Result<(SeedState, R), RngError>,
) -> Result<R, RngError> {
    // A poisoned lock is recoverable here: the state is a plain value that
    // is only ever replaced whole, never left half-written.
    let mut guard = STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let (next, out) = op(*guard)?;
    *guard = next;
    Ok(out)
}

/// A uniform float in `[0, bound)` from the shared generator.
///
/// Fails with `InvalidRange` unless `bound` is finite and positive.
pub fn random_float(bound: f64) -> Result<f64, RngError> {
    with_state(|s| s.uniform_float(bound))
}

/// A uniform integer in `[min, max]` (inclusive) from the shared generator.
///
/// Fails with `InvalidRange` if `min > max`.
pub fn random_clamp(min: i64, max: i64) -> Result<i64, RngError> {
    with_state(|s| s.clamped_int(min, max))
}

/// One key from an ordered weighted set, drawn from the shared generator.
///
/// Same contract as [`mudcore_prng::choice::choose_weighted`]:
/// `EmptyCollection` on an empty slice, `ZeroWeight` when no entry has
/// positive weight.
pub fn choose_weighted<T>(entries: &[(T, f64)]) -> Result<&T, RngError> {
    with_state(|s| choice::choose_weighted(s, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn random_float_in_range() {
        for _ in 0..1_000 {
            let v = random_float(3.0).unwrap();
            assert!((0.0..3.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn random_float_rejects_bad_bounds() {
        assert_eq!(random_float(0.0), Err(RngError::InvalidRange));
        assert_eq!(random_float(-2.0), Err(RngError::InvalidRange));
        assert_eq!(random_float(f64::NAN), Err(RngError::InvalidRange));
    }

    #[test]
    fn random_clamp_in_range() {
        for _ in 0..1_000 {
            let v = random_clamp(-5, 5).unwrap();
            assert!((-5..=5).contains(&v), "out of range: {v}");
        }
        assert_eq!(random_clamp(7, 7).unwrap(), 7);
    }

    #[test]
    fn random_clamp_rejects_inverted_range() {
        assert_eq!(random_clamp(3, 1), Err(RngError::InvalidRange));
    }

    #[test]
    fn choose_weighted_respects_weights() {
        let entries = [("never", 0.0), ("always", 1.0)];
        for _ in 0..500 {
            assert_eq!(*choose_weighted(&entries).unwrap(), "always");
        }
        let empty: [(&str, f64); 0] = [];
        assert_eq!(choose_weighted(&empty), Err(RngError::EmptyCollection));
    }

    #[test]
    fn consecutive_draws_advance_the_state() {
        // Two identical draws would mean a caller reused a state snapshot.
        // Collision of two independent 53-bit draws is negligible.
        let a = random_float(1.0).unwrap();
        let b = random_float(1.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn concurrent_callers_stay_in_range() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..1_000 {
                        let v = random_clamp(0, 100).unwrap();
                        assert!((0..=100).contains(&v));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
