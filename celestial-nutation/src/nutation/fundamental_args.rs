//! Fundamental arguments of the IAU 2000A series.
//!
//! The luni-solar series uses the Delaunay arguments of Simon et al. (1994),
//! quartics in arcseconds. The planetary series uses the MHB2000 linear forms
//! for the lunar arguments, the Souchay et al. (1999) mean planetary
//! longitudes and the general accumulated precession `pA`. The two sets differ
//! slightly for the same physical angle; each series uses its own.
//!
//! None of the arguments are range-reduced; multiples of 2π cancel inside
//! `sin`/`cos` of the series arguments.
//!
//! # References
//!
//! - Simon, J.-L. et al. 1994, A&A 282, 663
//! - Souchay, J. et al. 1999, A&AS 135, 111
//! - Mathews, Herring, & Buffett 2002, J. Geophys. Res. 107(B4)

use crate::constants::ARCSEC_TO_RAD;

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarArguments(pub [f64; 5]);

impl LunisolarArguments {
    /// Mean anomaly of the Moon.
    pub fn moon_mean_anomaly(&self) -> f64 {
        self.0[0]
    }

    /// Mean anomaly of the Sun.
    pub fn sun_mean_anomaly(&self) -> f64 {
        self.0[1]
    }

    /// Mean argument of latitude of the Moon.
    pub fn moon_argument_of_latitude(&self) -> f64 {
        self.0[2]
    }

    /// Mean elongation of the Moon from the Sun.
    pub fn mean_elongation(&self) -> f64 {
        self.0[3]
    }

    /// Mean longitude of the Moon's ascending node.
    pub fn moon_node_longitude(&self) -> f64 {
        self.0[4]
    }

    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }
}

/// Planetary-series arguments
/// `[l, l', F, D, Ω, Me, Ve, Ea, Ma, Ju, Sa, Ur, Ne, pA]` in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryArguments(pub [f64; 14]);

impl PlanetaryArguments {
    /// Mean longitude of a planet, Mercury (`0`) through Neptune (`7`).
    ///
    /// Returns `None` for any other index.
    pub fn planet_longitude(&self, planet: usize) -> Option<f64> {
        self.0[5..13].get(planet).copied()
    }

    /// General accumulated precession in longitude.
    pub fn general_precession(&self) -> f64 {
        self.0[13]
    }

    pub fn as_array(&self) -> &[f64; 14] {
        &self.0
    }
}

/// Delaunay arguments for the luni-solar series at `t` Julian centuries TT.
#[inline]
pub fn lunisolar_arguments(t: f64) -> LunisolarArguments {
    let l = 485868.249036
        + t * (1717915923.2178 + t * (31.8792 + t * (0.051635 - t * 0.00024470)));
    let lp = 1287104.79305
        + t * (129596581.0481 + t * (-0.5532 + t * (0.000136 - t * 0.00001149)));
    let f = 335779.526232
        + t * (1739527262.8478 + t * (-12.7512 + t * (-0.001037 + t * 0.00000417)));
    let d = 1072260.70369
        + t * (1602961601.2090 + t * (-6.3706 + t * (0.006593 - t * 0.00003169)));
    let om = 450160.398036
        + t * (-6962890.5431 + t * (7.4722 + t * (0.007702 - t * 0.00005939)));

    LunisolarArguments([
        l * ARCSEC_TO_RAD,
        lp * ARCSEC_TO_RAD,
        f * ARCSEC_TO_RAD,
        d * ARCSEC_TO_RAD,
        om * ARCSEC_TO_RAD,
    ])
}

/// Arguments for the planetary series at `t` Julian centuries TT.
#[inline]
pub fn planetary_arguments(t: f64) -> PlanetaryArguments {
    PlanetaryArguments([
        2.35555598 + 8328.6914269554 * t,
        6.24006013 + 628.301955 * t,
        1.627905234 + 8433.466158131 * t,
        5.198466741 + 7771.3771468121 * t,
        2.18243920 - 33.757045 * t,
        4.402608842 + 2608.7903141574 * t,
        3.176146697 + 1021.3285546211 * t,
        1.753470314 + 628.3075849991 * t,
        6.203480913 + 334.0612426700 * t,
        0.599546497 + 52.9690962641 * t,
        0.874016757 + 21.3299104960 * t,
        5.481293871 + 7.4781598567 * t,
        5.321159000 + 3.8127774000 * t,
        (0.02438175 + 0.00000538691 * t) * t,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunisolar_at_j2000() {
        let args = lunisolar_arguments(0.0);
        assert_eq!(args.moon_mean_anomaly(), 485868.249036 * ARCSEC_TO_RAD);
        assert_eq!(args.sun_mean_anomaly(), 1287104.79305 * ARCSEC_TO_RAD);
        assert_eq!(args.moon_argument_of_latitude(), 335779.526232 * ARCSEC_TO_RAD);
        assert_eq!(args.mean_elongation(), 1072260.70369 * ARCSEC_TO_RAD);
        assert_eq!(args.moon_node_longitude(), 450160.398036 * ARCSEC_TO_RAD);
    }

    #[test]
    fn test_lunisolar_not_reduced() {
        // Ten centuries of lunar motion is thousands of revolutions.
        let args = lunisolar_arguments(10.0);
        assert!(args.moon_mean_anomaly() > 1.0e4);
        assert!(args.moon_node_longitude() < 0.0);
    }

    #[test]
    fn test_planetary_at_j2000() {
        let args = planetary_arguments(0.0);
        let a = args.as_array();
        assert_eq!(a[0], 2.35555598);
        assert_eq!(a[1], 6.24006013);
        assert_eq!(a[4], 2.18243920);
        assert_eq!(args.planet_longitude(0), Some(4.402608842));
        assert_eq!(args.planet_longitude(7), Some(5.321159000));
        assert_eq!(args.planet_longitude(8), None);
        assert_eq!(args.general_precession(), 0.0);
    }

    #[test]
    fn test_general_precession_quadratic() {
        let t = 2.0;
        let expected = (0.02438175 + 0.00000538691 * t) * t;
        assert_eq!(planetary_arguments(t).general_precession(), expected);
    }

    #[test]
    fn test_lunar_arguments_agree_between_sets() {
        // Both formulations describe the same angles to within a few arcseconds.
        let t = 0.25;
        let ls = lunisolar_arguments(t);
        let pl = planetary_arguments(t);
        let wrap = |a: f64| a.rem_euclid(std::f64::consts::TAU);
        for i in 0..5 {
            let diff = (wrap(ls.0[i]) - wrap(pl.0[i])).abs();
            let diff = diff.min(std::f64::consts::TAU - diff);
            assert!(diff < 5e-5, "argument {}: diff = {}", i, diff);
        }
    }
}
