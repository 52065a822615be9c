//! Floating-point comparison by units in the last place.
//!
//! Used by the unit and integration tests; exported so downstream crates can
//! check their own results against this one the same way.

use crate::Vector;

/// Maps an `f64` onto `u64` so that ordering and adjacency match the reals.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Number of representable doubles between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Absolute-tolerance check on the rectangular projections of two vectors.
#[track_caller]
pub fn assert_vector_near(a: &Vector, b: &Vector, tolerance: f64, ctx: &str) {
    let (pa, pb) = (a.to_array(), b.to_array());
    for i in 0..3 {
        assert!(
            (pa[i] - pb[i]).abs() <= tolerance,
            "{}: component {} differs, {} vs {} (tolerance {})",
            ctx,
            i,
            pa[i],
            pb[i],
            tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_adjacent() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_diff(a, b), 1);
        assert_eq!(ulp_diff(b, a), 1);
    }

    #[test]
    fn test_ulp_across_zero() {
        assert_eq!(ulp_diff(0.0, -0.0), 1);
        assert!(ulp_diff(-1e-300, 1e-300) > 0);
    }

    #[test]
    #[should_panic(expected = "ULP=")]
    fn test_assert_ulp_le_fails() {
        assert_ulp_le(1.0, 1.0 + 1e-10, 4, "distant");
    }
}
