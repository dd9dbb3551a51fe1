//! Unbiased random permutation.
//!
//! Fisher–Yates over a copy of the input. The RNG is a parameter so
//! callers can seed it for reproducible sessions.

use rand::Rng;

/// Return a uniformly random permutation of `items`.
///
/// The input is left untouched. Empty and single-element inputs come
/// back as plain copies.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
