// Collection operations: uniform choice, weighted choice, shuffle.
//
// All three thread state explicitly, like the scalar derivations. Weighted
// choice takes an ordered slice of `(key, weight)` pairs — never a hash
// map — because cumulative-bucket order decides which draws map to which
// key, and iteration order must be stable for same-seed reproducibility.

use crate::error::RngError;
use crate::SeedState;

/// Pick one element of `items` uniformly, consuming one draw.
///
/// Fails with `EmptyCollection` on an empty slice.
pub fn choose_uniform<T>(state: SeedState, items: &[T]) -> Result<(SeedState, &T), RngError> {
    if items.is_empty() {
        return Err(RngError::EmptyCollection);
    }
    let (next, idx) = state.uniform_int(items.len() as u64)?;
    Ok((next, &items[idx as usize]))
}

/// Pick one key from an ordered weighted set, consuming one draw.
///
/// Each key's probability is `weight / total` over the positive weights;
/// zero, negative, and NaN weights contribute nothing and can never be
/// chosen. Buckets run in slice order and an exact boundary belongs to the
/// lower-indexed entry (the comparison on the upper bound is strict).
///
/// Fails with `EmptyCollection` on an empty slice and `ZeroWeight` when no
/// entry carries positive weight — both before any draw is consumed.
pub fn choose_weighted<T>(
    state: SeedState,
    entries: &[(T, f64)],
) -> Result<(SeedState, &T), RngError> {
    if entries.is_empty() {
        return Err(RngError::EmptyCollection);
    }
    let total: f64 = entries
        .iter()
        .map(|(_, w)| if *w > 0.0 { *w } else { 0.0 })
        .sum();
    if total <= 0.0 {
        return Err(RngError::ZeroWeight);
    }
    let (next, d) = state.uniform_float(total)?;
    let mut upper = 0.0;
    for (key, w) in entries {
        // Mirrors the total: anything that isn't strictly positive (zero,
        // negative, NaN) gets no bucket.
        if w.is_nan() || *w <= 0.0 {
            continue;
        }
        upper += *w;
        if d < upper {
            return Ok((next, key));
        }
    }
    // Rounding in the running sum can leave `d` at the final bound; that
    // sliver belongs to the last entry with positive weight.
    match entries.iter().rev().find(|(_, w)| *w > 0.0) {
        Some((key, _)) => Ok((next, key)),
        None => Err(RngError::ZeroWeight),
    }
}

/// Fisher-Yates shuffle of a copy of `items`, high index to low.
///
/// The input is never mutated; the permuted copy comes back with the final
/// state. One draw per swap position, threaded sequentially, so the
/// permutation is a pure function of the starting state. Inputs of length
/// 0 or 1 come back unchanged with the state bit-identical (no draws).
pub fn shuffle<T: Clone>(state: SeedState, items: &[T]) -> (SeedState, Vec<T>) {
    let mut out = items.to_vec();
    if out.len() <= 1 {
        return (state, out);
    }
    let mut s = state;
    for i in (1..out.len()).rev() {
        let (next, raw) = s.step();
        s = next;
        // j ranges over [0, i]; i == j is a legal self-swap.
        let j = (raw % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    (s, out)
}
