//! Random draws used by scene generation.
//!
//! All helpers take `&mut dyn Rng` so callers can inject any generator; tests seed a
//! [`rand::rngs::StdRng`] for reproducible layouts.
use std::ops::Range;

use rand::Rng;

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Draw a float uniformly from `range` (half-open).
#[inline]
pub(crate) fn uniform_f64(rng: &mut dyn Rng, range: &Range<f64>) -> f64 {
    let v = range.start + rand01(rng) * (range.end - range.start);
    // Rounding can land exactly on the excluded end.
    if v >= range.end {
        next_down(range.end).max(range.start)
    } else {
        v
    }
}

/// Draw an `f32` uniformly from `range` (half-open), drawing in double precision.
/// `range.end` must be positive.
#[inline]
pub(crate) fn uniform_f32(rng: &mut dyn Rng, range: &Range<f32>) -> f32 {
    let wide = range.start as f64..range.end as f64;
    let v = uniform_f64(rng, &wide) as f32;
    // Narrowing can round up onto the excluded end.
    if v >= range.end {
        f32::from_bits(range.end.to_bits() - 1).max(range.start)
    } else {
        v
    }
}

/// Draw an index uniformly from `0..n` without modulo bias. `n` must be > 0.
pub(crate) fn uniform_index(rng: &mut dyn Rng, n: usize) -> usize {
    debug_assert!(n > 0, "uniform_index needs a non-empty range");
    let n = n as u64;
    let zone = u64::MAX - (u64::MAX % n);
    loop {
        let v = rng.next_u64();
        if v < zone {
            return (v % n) as usize;
        }
    }
}

/// Draw an integer uniformly from `range` (half-open). The range must be non-empty.
#[inline]
pub(crate) fn uniform_i32(rng: &mut dyn Rng, range: Range<i32>) -> i32 {
    let span = (range.end as i64 - range.start as i64) as usize;
    range.start + uniform_index(rng, span) as i32
}

/// Compute the next smaller representable float value.
#[inline]
pub(crate) fn next_down(val: f64) -> f64 {
    if val.is_nan() || val == f64::NEG_INFINITY {
        return val;
    }
    if val == f64::INFINITY {
        return f64::MAX;
    }
    if val == 0.0 {
        return -f64::from_bits(1);
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits + 1)
    }
}
