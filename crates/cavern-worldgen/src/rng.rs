//! Guarded random draws over an explicitly threaded [`fastrand::Rng`].
//!
//! `fastrand` panics on empty ranges. Room sizes and layout extents can
//! legitimately collapse to an empty range, so every draw whose bounds are
//! computed goes through these helpers, which return the lower bound instead.

use fastrand::Rng;

/// Uniform `usize` in `[lo, hi)`, or `lo` when the range is empty.
pub fn range_usize(rng: &mut Rng, lo: usize, hi: usize) -> usize {
    if hi <= lo {
        lo
    } else {
        rng.usize(lo..hi)
    }
}

/// Uniform `u32` in `[lo, hi)`, or `lo` when the range is empty.
pub fn range_u32(rng: &mut Rng, lo: u32, hi: u32) -> u32 {
    if hi <= lo {
        lo
    } else {
        rng.u32(lo..hi)
    }
}

/// Uniform `f32` in `[lo, hi)`, or `lo` when the range is empty.
pub fn range_f32(rng: &mut Rng, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        lo
    } else {
        lo + rng.f32() * (hi - lo)
    }
}

/// Uniformly picks one element of a slice.
pub fn pick<T: Copy>(rng: &mut Rng, items: &[T]) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.usize(..items.len())])
    }
}

/// Mixes a world seed with a salt into an independent sub-seed (splitmix64).
#[must_use]
pub fn derive_seed(seed: u64, salt: u64) -> u64 {
    let mut z = seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
