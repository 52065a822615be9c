//! Low-precision nutation after Duffett-Smith, *Astronomy with your Personal
//! Computer*.
//!
//! Thirteen terms in longitude and nine in obliquity, built from mean
//! longitudes in degrees. Model selection only offers it for `|T| ≤ 1`.
//!
//! The mean-longitude polynomials keep their published constants and are
//! evaluated directly at `T`. The doubled node argument `N2` is formed from
//! `N1` after `N1` has already been converted to radians, while `L2` and `D2`
//! are doubled from degrees and converted afterwards. Both are reproduced as
//! published.

use super::types::NutationResult;
use crate::constants::{ARCSEC_TO_RAD, DEG_TO_RAD};
use crate::math::frac;

/// Degrees of motion accumulated by `rate` revolutions per century over `t`.
#[inline]
fn revolutions_deg(rate: f64, t: f64) -> f64 {
    360.0 * frac(rate * t)
}

/// Fast approximate nutation `(Δψ, Δε)` in radians.
///
/// ```
/// use celestial_nutation::nutation::fast::fast_nutation;
/// use celestial_nutation::constants::ARCSEC_TO_RAD;
///
/// let n = fast_nutation(0.0);
/// assert!((n.delta_psi / ARCSEC_TO_RAD - 17.3727).abs() < 1e-4);
/// assert!((n.delta_eps / ARCSEC_TO_RAD + 2.2703).abs() < 1e-4);
/// ```
pub fn fast_nutation(t: f64) -> NutationResult {
    let t2 = t * t;

    let l1 = 279.6967 + 0.000303 * t2 + revolutions_deg(100.0021358, t);
    let l2 = 2.0 * l1 * DEG_TO_RAD;
    let d1 = 270.4342 - 0.001133 * t2 + revolutions_deg(1336.855231, t);
    let d2 = 2.0 * d1 * DEG_TO_RAD;
    let m1 = (358.4758 - 0.00015 * t2 + revolutions_deg(99.99736056, t)) * DEG_TO_RAD;
    let m2 = (296.1046 + 0.009192 * t2 + revolutions_deg(1325.552359, t)) * DEG_TO_RAD;
    let n1 = (259.1833 + 0.002078 * t2 - revolutions_deg(5.372616667, t)) * DEG_TO_RAD;
    let n2 = 2.0 * n1;

    let sin = libm::sin;
    let cos = libm::cos;

    let mut dpsi = (-17.2327 - 0.01737 * t) * sin(n1);
    dpsi += (-1.2729 - 0.00013 * t) * sin(l2) + 0.2088 * sin(n2);
    dpsi += -0.2037 * sin(d2) + (0.1261 - 0.00031 * t) * sin(m1);
    dpsi += 0.0675 * sin(m2) - (0.0497 - 0.00012 * t) * sin(l2 + m1);
    dpsi += -0.0342 * sin(d2 - n1) - 0.0261 * sin(d2 + m2);
    dpsi += 0.0214 * sin(l2 - m1) - 0.0149 * sin(l2 - d2 + m2);
    dpsi += 0.0124 * sin(l2 - n1) + 0.0114 * sin(d2 - m2);

    let mut deps = (9.21 + 0.00091 * t) * cos(n1);
    deps += (0.5522 - 0.00029 * t) * cos(l2) - 0.0904 * cos(n2);
    deps += 0.0884 * cos(d2) + 0.0216 * cos(l2 + m1);
    deps += 0.0183 * cos(d2 - n1) + 0.0113 * cos(d2 + m2);
    deps += -0.0093 * cos(l2 - m1) - 0.0066 * cos(l2 - n1);

    NutationResult {
        delta_psi: dpsi * ARCSEC_TO_RAD,
        delta_eps: deps * ARCSEC_TO_RAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_arcsec(rad: f64) -> f64 {
        rad / ARCSEC_TO_RAD
    }

    #[test]
    fn test_bounded_amplitude() {
        for i in -10..=10 {
            let t = f64::from(i) / 10.0;
            let n = fast_nutation(t);
            assert!(to_arcsec(n.delta_psi).abs() < 19.5, "dpsi at t={}", t);
            assert!(to_arcsec(n.delta_eps).abs() < 10.5, "deps at t={}", t);
        }
    }

    #[test]
    fn test_regression_values() {
        let cases = [
            (0.0, 17.37270153404286, -2.27025572660678),
            (0.5, -3.310884934461377, 8.346696550958612),
            (-0.25, -6.151954284461688, 7.990123215789908),
            (1.0, -13.956893408460374, -5.764172564897499),
        ];
        for (t, dpsi, deps) in cases {
            let n = fast_nutation(t);
            assert!((to_arcsec(n.delta_psi) - dpsi).abs() < 1e-9, "dpsi at t={}", t);
            assert!((to_arcsec(n.delta_eps) - deps).abs() < 1e-9, "deps at t={}", t);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fast_nutation(0.123), fast_nutation(0.123));
    }
}
