//! Time argument helpers.
//!
//! Every model in this crate takes `t`, Julian centuries of dynamical time
//! (TT/TDB) from J2000.0. [`jd_to_centuries`] derives it from a two-part
//! Julian Date and [`centuries_to_jd`] goes back.

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Converts a two-part Julian Date to Julian centuries from J2000.0.
///
/// The two-part split preserves precision. Typically:
/// - `jd1 = 2451545.0` (J2000.0 epoch)
/// - `jd2` = days from that epoch
///
/// ```
/// use celestial_nutation::utils::jd_to_centuries;
/// use celestial_nutation::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};
///
/// assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
/// assert_eq!(jd_to_centuries(J2000_JD, DAYS_PER_JULIAN_CENTURY), 1.0);
/// ```
#[inline]
pub fn jd_to_centuries(jd1: f64, jd2: f64) -> f64 {
    ((jd1 - J2000_JD) + jd2) / DAYS_PER_JULIAN_CENTURY
}

/// Converts Julian centuries from J2000.0 back to a single Julian Date.
#[inline]
pub fn centuries_to_jd(t: f64) -> f64 {
    J2000_JD + t * DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_to_centuries_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD, 0.0), 0.0);
    }

    #[test]
    fn test_jd_to_centuries_negative() {
        let t = jd_to_centuries(J2000_JD, -DAYS_PER_JULIAN_CENTURY);
        assert_eq!(t, -1.0);
    }

    #[test]
    fn test_jd_to_centuries_two_part() {
        let t = jd_to_centuries(2_400_000.5, 51544.5);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_jd_to_centuries_precision() {
        let t = jd_to_centuries(J2000_JD, 0.123456789);
        let expected = 0.123456789 / DAYS_PER_JULIAN_CENTURY;
        assert!((t - expected).abs() < 1e-15);
    }

    #[test]
    fn test_centuries_round_trip() {
        let jd = 2460000.25;
        let t = jd_to_centuries(jd, 0.0);
        assert!((centuries_to_jd(t) - jd).abs() < 1e-8);
    }
}
