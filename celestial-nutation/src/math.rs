use crate::constants::TWOPI;

/// Wraps an azimuth into `[0, 2π)`.
///
/// Inputs from `atan2` lie in `(-π, π]`, so a single shift suffices. The
/// final check guards the case where `angle + 2π` rounds up to exactly `2π`.
#[inline]
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = if angle < 0.0 { angle + TWOPI } else { angle };
    if wrapped >= TWOPI {
        0.0
    } else {
        wrapped
    }
}

/// Fractional part of `x`, as `x - floor(x)`.
#[inline]
pub fn frac(x: f64) -> f64 {
    x - libm::floor(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_wrap_two_pi() {
        assert_eq!(wrap_two_pi(0.0), 0.0);
        assert_eq!(wrap_two_pi(PI), PI);
        assert!((wrap_two_pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-15);
        assert_eq!(wrap_two_pi(-1e-300), 0.0);
    }

    #[test]
    fn test_frac_negative() {
        assert!((frac(-0.25) - 0.75).abs() < 1e-15);
        assert!((frac(3.5) - 0.5).abs() < 1e-15);
    }
}
