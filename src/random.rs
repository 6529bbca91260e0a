//! Randomness using the `SplitMix` algorithm.

use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_STATE: AtomicU64 = AtomicU64::new(0x193A_6754_A8A7_D469);

/// Generates a pseudo-random `u64` from the given `u64` value.
pub fn random_u64_from_state(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Generates a pseudo-random `u64` from the two given `u64` values.
pub fn random_u64_from_two_states(a: u64, b: u64) -> u64 {
    random_u64_from_state(a ^ random_u64_from_state(b))
}

/// Generates a pseudo-random `u64` from a process-global sequence.
pub fn random_u64() -> u64 {
    // `SplitMix` advances its state by the same constant every step, so a
    // relaxed `fetch_add` gives each caller a distinct state to mix.
    random_u64_from_state(GLOBAL_STATE.fetch_add(0x9E3779B97F4A7C15, Ordering::Relaxed))
}

/// Converts a pseudo-random `u64` to a uniform `f64` in `[0, 1)`, using the
/// upper 53 bits.
pub fn uniform_fraction(random: u64) -> f64 {
    (random >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generates a uniform pseudo-random `f64` in `[-1, 1)` from the
/// process-global sequence.
pub fn uniform_symmetric_unit() -> f64 {
    2.0 * uniform_fraction(random_u64()) - 1.0
}
