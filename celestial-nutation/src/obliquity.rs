//! Mean obliquity of the ecliptic.
//!
//! The nutation rotation needs the mean obliquity ε_m at the same epoch. It
//! is supplied through [`ObliquityModel`], so callers can plug in whatever
//! precession theory the rest of their pipeline uses. Two IAU polynomials
//! ship with the crate:
//!
//! | Type | Model | J2000.0 Value | Polynomial Order |
//! |------|-------|---------------|------------------|
//! | [`MeanObliquityIAU2006`] | IAU 2006 | 84381.406″ | 5th order |
//! | [`MeanObliquityIAU1980`] | IAU 1980 | 84381.448″ | 3rd order |
//!
//! Any `Fn(f64) -> f64` mapping Julian centuries to radians is also a model.
//!
//! ```
//! use celestial_nutation::obliquity::{MeanObliquityIAU2006, ObliquityModel};
//!
//! let eps = MeanObliquityIAU2006.mean_obliquity(0.0);
//! assert!((eps.to_degrees() - 23.4392794).abs() < 1e-6);
//!
//! let fixed = |_t: f64| 0.409;
//! assert_eq!(fixed.mean_obliquity(3.0), 0.409);
//! ```

use crate::constants::ARCSEC_TO_RAD;

/// Provider of the mean obliquity ε_m(t), radians, for `t` Julian centuries
/// TT from J2000.0.
pub trait ObliquityModel {
    fn mean_obliquity(&self, t: f64) -> f64;
}

impl<F> ObliquityModel for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn mean_obliquity(&self, t: f64) -> f64 {
        self(t)
    }
}

/// IAU 2006 mean obliquity (Capitaine et al. 2003, P03).
///
/// At J2000.0: ε₀ = 84381.406″ ≈ 23°26′21.406″
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanObliquityIAU2006;

impl ObliquityModel for MeanObliquityIAU2006 {
    fn mean_obliquity(&self, t: f64) -> f64 {
        let obliquity_arcsec = 84381.406
            + (-46.836769
                + (-0.0001831 + (0.00200340 + (-0.000000576 + (-0.0000000434) * t) * t) * t) * t)
                * t;

        obliquity_arcsec * ARCSEC_TO_RAD
    }
}

/// IAU 1980 mean obliquity (Lieske et al. 1977).
///
/// At J2000.0: ε₀ = 84381.448″ ≈ 23°26′21.448″
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanObliquityIAU1980;

impl ObliquityModel for MeanObliquityIAU1980 {
    fn mean_obliquity(&self, t: f64) -> f64 {
        let obliquity_arcsec = 84381.448 + (-46.8150 + (-0.00059 + (0.001813) * t) * t) * t;

        obliquity_arcsec * ARCSEC_TO_RAD
    }
}

/// Built-in obliquity polynomials, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObliquityKind {
    #[default]
    Iau2006,
    Iau1980,
}

impl ObliquityModel for ObliquityKind {
    fn mean_obliquity(&self, t: f64) -> f64 {
        match self {
            Self::Iau2006 => MeanObliquityIAU2006.mean_obliquity(t),
            Self::Iau1980 => MeanObliquityIAU1980.mean_obliquity(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_values() {
        assert_eq!(
            MeanObliquityIAU2006.mean_obliquity(0.0),
            84381.406 * ARCSEC_TO_RAD
        );
        assert_eq!(
            MeanObliquityIAU1980.mean_obliquity(0.0),
            84381.448 * ARCSEC_TO_RAD
        );
    }

    #[test]
    fn test_obliquity_decreases() {
        let now = MeanObliquityIAU2006.mean_obliquity(0.0);
        let later = MeanObliquityIAU2006.mean_obliquity(1.0);
        // About 47 arcseconds per century.
        let drop = (now - later) / ARCSEC_TO_RAD;
        assert!((drop - 46.84).abs() < 0.01, "drop = {}", drop);
    }

    #[test]
    fn test_models_agree_near_j2000() {
        let t = 0.2;
        let diff = MeanObliquityIAU2006.mean_obliquity(t) - MeanObliquityIAU1980.mean_obliquity(t);
        assert!((diff / ARCSEC_TO_RAD).abs() < 0.1);
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(ObliquityKind::default(), ObliquityKind::Iau2006);
        assert_eq!(
            ObliquityKind::Iau1980.mean_obliquity(0.3),
            MeanObliquityIAU1980.mean_obliquity(0.3)
        );
        assert_eq!(
            ObliquityKind::Iau2006.mean_obliquity(-0.3),
            MeanObliquityIAU2006.mean_obliquity(-0.3)
        );
    }

    #[test]
    fn test_closure_model() {
        let linear = |t: f64| 0.4 - 1e-4 * t;
        assert_eq!(linear.mean_obliquity(2.0), 0.4 - 2e-4);
    }
}
