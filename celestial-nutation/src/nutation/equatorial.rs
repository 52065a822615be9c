//! Rotation between the mean and true equator and equinox of date.
//!
//! Given (Δψ, Δε) and the mean obliquity ε_m, with true obliquity
//! ε_t = ε_m + Δε, the mean-to-true rotation is
//! `N = R1(−ε_t) · R3(−Δψ) · R1(ε_m)`, written out element by element in
//! [`nutation_matrix`]. True-to-mean uses its transpose. See the Explanatory
//! Supplement to the Astronomical Almanac, pp. 114-115.
//!
//! ```
//! use celestial_nutation::nutation::{nutate_equatorial, NutationDirection};
//! use celestial_nutation::Vector;
//!
//! let mean = Vector::rectangular(0.3, -0.5, 0.81);
//! let t = 0.24;
//!
//! let apparent = nutate_equatorial(t, true, &mean, NutationDirection::MeanToTrue);
//! let back = nutate_equatorial(t, true, &apparent, NutationDirection::TrueToMean);
//! assert!((back - mean).normalize() < 1e-14);
//! ```

use super::types::{compute_nutation, NutationResult};
use crate::matrix::{RotationMatrix3, Vector};
use crate::obliquity::{MeanObliquityIAU2006, ObliquityKind, ObliquityModel};

/// Which way to rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NutationDirection {
    /// Mean equator/equinox of date to true.
    MeanToTrue,
    /// True equator/equinox of date back to mean.
    TrueToMean,
}

impl NutationDirection {
    pub fn inverse(self) -> Self {
        match self {
            Self::MeanToTrue => Self::TrueToMean,
            Self::TrueToMean => Self::MeanToTrue,
        }
    }
}

/// `true` is mean-to-true.
impl From<bool> for NutationDirection {
    fn from(mean_to_true: bool) -> Self {
        if mean_to_true {
            Self::MeanToTrue
        } else {
            Self::TrueToMean
        }
    }
}

/// Mean-to-true nutation matrix for the given angles, all in radians.
///
/// With `c`/`s` for cosine/sine, `ψ = Δψ`, `m = ε_m` and `t = ε_m + Δε`, the
/// rows are
///
/// ```text
/// | cψ        −sψ·cm                −sψ·sm              |
/// | sψ·ct     cψ·cm·ct + sm·st      cψ·sm·ct − cm·st    |
/// | sψ·st     cψ·cm·st − sm·ct      cψ·sm·st + cm·ct    |
/// ```
pub fn nutation_matrix(delta_psi: f64, delta_eps: f64, mean_obliquity: f64) -> RotationMatrix3 {
    let true_obliquity = mean_obliquity + delta_eps;

    let (sobm, cobm) = libm::sincos(mean_obliquity);
    let (sobt, cobt) = libm::sincos(true_obliquity);
    let (spsi, cpsi) = libm::sincos(delta_psi);

    let xx = cpsi;
    let yx = -spsi * cobm;
    let zx = -spsi * sobm;
    let xy = spsi * cobt;
    let yy = cpsi * cobm * cobt + sobm * sobt;
    let zy = cpsi * sobm * cobt - cobm * sobt;
    let xz = spsi * sobt;
    let yz = cpsi * cobm * sobt - sobm * cobt;
    let zz = cpsi * sobm * sobt + cobm * cobt;

    RotationMatrix3::from_array([[xx, yx, zx], [xy, yy, zy], [xz, yz, zz]])
}

/// Nutation rotation with a configurable mean-obliquity provider.
///
/// ```
/// use celestial_nutation::nutation::{EquatorialNutation, NutationDirection};
/// use celestial_nutation::obliquity::MeanObliquityIAU1980;
/// use celestial_nutation::Vector;
///
/// let nutation = EquatorialNutation::new(MeanObliquityIAU1980, false);
/// let v = nutation.apply(0.1, &Vector::z_axis(), NutationDirection::MeanToTrue);
/// assert!((v.normalize() - 1.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialNutation<O = MeanObliquityIAU2006> {
    obliquity: O,
    use_fast_model: bool,
}

impl Default for EquatorialNutation {
    fn default() -> Self {
        Self::new(MeanObliquityIAU2006, true)
    }
}

impl<O: ObliquityModel> EquatorialNutation<O> {
    pub fn new(obliquity: O, use_fast_model: bool) -> Self {
        Self {
            obliquity,
            use_fast_model,
        }
    }

    pub fn use_fast_model(&self) -> bool {
        self.use_fast_model
    }

    pub fn obliquity_model(&self) -> &O {
        &self.obliquity
    }

    /// Nutation angles at `t` under this configuration's model rule.
    pub fn nutation(&self, t: f64) -> NutationResult {
        compute_nutation(t, self.use_fast_model)
    }

    /// Matrix taking vectors in the given direction at `t`.
    pub fn matrix(&self, t: f64, direction: impl Into<NutationDirection>) -> RotationMatrix3 {
        let direction = direction.into();
        let nutation = self.nutation(t);
        let mean_obliquity = self.obliquity.mean_obliquity(t);
        log::debug!(
            "equatorial nutation {:?} at t={} (mean obliquity {} rad)",
            direction,
            t,
            mean_obliquity
        );
        let forward = nutation_matrix(nutation.delta_psi, nutation.delta_eps, mean_obliquity);

        match direction {
            NutationDirection::MeanToTrue => forward,
            NutationDirection::TrueToMean => forward.transpose(),
        }
    }

    /// Rotates an equatorial vector; `v` is left untouched and the result is
    /// rectangular.
    pub fn apply(&self, t: f64, v: &Vector, direction: impl Into<NutationDirection>) -> Vector {
        self.matrix(t, direction) * v.to_rectangular()
    }

    /// Rotates an ecliptic vector about the ecliptic pole by the nutation in
    /// longitude: mean-to-true adds Δψ to the ecliptic longitude, true-to-mean
    /// removes it. The obliquity plays no part.
    pub fn apply_ecliptic(
        &self,
        t: f64,
        v: &Vector,
        direction: impl Into<NutationDirection>,
    ) -> Vector {
        let direction = direction.into();
        let delta_psi = self.nutation(t).delta_psi;
        log::debug!("ecliptic nutation {:?} at t={}", direction, t);

        let mut matrix = RotationMatrix3::identity();
        match direction {
            NutationDirection::MeanToTrue => matrix.rotate_z(-delta_psi),
            NutationDirection::TrueToMean => matrix.rotate_z(delta_psi),
        }
        matrix * v.to_rectangular()
    }
}

/// Typed configuration for an [`EquatorialNutation`].
///
/// Defaults: the fast model is allowed (within a century of J2000.0) and the
/// mean obliquity is IAU 2006.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NutationSettings {
    pub use_fast_model: bool,
    pub obliquity: ObliquityKind,
}

impl Default for NutationSettings {
    fn default() -> Self {
        Self {
            use_fast_model: true,
            obliquity: ObliquityKind::Iau2006,
        }
    }
}

impl NutationSettings {
    pub fn build(&self) -> EquatorialNutation<ObliquityKind> {
        EquatorialNutation::new(self.obliquity, self.use_fast_model)
    }
}

impl From<NutationSettings> for EquatorialNutation<ObliquityKind> {
    fn from(settings: NutationSettings) -> Self {
        settings.build()
    }
}

/// Rotates `v` between mean and true equator of date using the IAU 2006 mean
/// obliquity.
pub fn nutate_equatorial(
    t: f64,
    use_fast_model: bool,
    v: &Vector,
    direction: impl Into<NutationDirection>,
) -> Vector {
    EquatorialNutation::new(MeanObliquityIAU2006, use_fast_model).apply(t, v, direction)
}

/// Rotates an ecliptic `v` between mean and true equinox of date.
pub fn nutate_ecliptic(
    t: f64,
    use_fast_model: bool,
    v: &Vector,
    direction: impl Into<NutationDirection>,
) -> Vector {
    EquatorialNutation::new(MeanObliquityIAU2006, use_fast_model).apply_ecliptic(t, v, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorKind;

    #[test]
    fn test_zero_nutation_is_identity() {
        let m = nutation_matrix(0.0, 0.0, 0.409);
        assert!(m.max_difference(&RotationMatrix3::identity()) < 1e-16);
    }

    #[test]
    fn test_matrix_is_rotation() {
        let cases = [
            (0.0, 0.0, 0.0),
            (6.75e-5, -2.8e-5, 0.409),
            (-1.0e-4, 4.0e-5, 0.41),
            (0.3, -0.2, 1.2),
            (2.5, 1.0, -0.7),
        ];
        for (dpsi, deps, eps) in cases {
            let m = nutation_matrix(dpsi, deps, eps);
            assert!(m.is_rotation_matrix(1e-14), "{:?}", (dpsi, deps, eps));
        }
    }

    #[test]
    fn test_matrix_is_composition() {
        let (dpsi, deps, eps) = (0.01, -0.004, 0.409);
        let mut expected = RotationMatrix3::identity();
        expected.rotate_x(eps);
        expected.rotate_z(-dpsi);
        expected.rotate_x(-(eps + deps));
        assert!(nutation_matrix(dpsi, deps, eps).max_difference(&expected) < 1e-15);
    }

    #[test]
    fn test_equinox_shift() {
        // The mean equinox moves by Δψ·cos ε in true right ascension.
        let t = 0.1;
        let n = compute_nutation(t, false);
        let eps = MeanObliquityIAU2006.mean_obliquity(t);

        let v = nutate_equatorial(t, false, &Vector::x_axis(), NutationDirection::MeanToTrue);
        let [y, z] = [v.to_array()[1], v.to_array()[2]];
        assert!((y - n.delta_psi * (eps + n.delta_eps).cos()).abs() < 1e-12);
        assert!((z - n.delta_psi * (eps + n.delta_eps).sin()).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_both_models() {
        let v = Vector::rectangular(-0.2, 0.7, -0.68);
        for &(t, fast) in &[(0.0, true), (0.5, true), (1.5, true), (-0.8, false)] {
            let forward = nutate_equatorial(t, fast, &v, true);
            let back = nutate_equatorial(t, fast, &forward, false);
            assert!((back - v).normalize() < 1e-14, "t={} fast={}", t, fast);
        }
    }

    #[test]
    fn test_input_untouched_and_result_rectangular() {
        let v = Vector::spherical(2.0, 1.0, 0.3);
        let copy = v;
        let out = nutate_equatorial(0.2, true, &v, NutationDirection::MeanToTrue);
        assert_eq!(v, copy);
        assert_eq!(out.kind(), VectorKind::Rectangular);
        assert!((out.normalize() - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_true_to_mean_uses_transpose() {
        let nutation: EquatorialNutation = EquatorialNutation::default();
        let forward = nutation.matrix(0.3, NutationDirection::MeanToTrue);
        let inverse = nutation.matrix(0.3, NutationDirection::TrueToMean);
        assert_eq!(inverse, forward.transpose());
    }

    #[test]
    fn test_direction_from_bool() {
        assert_eq!(NutationDirection::from(true), NutationDirection::MeanToTrue);
        assert_eq!(NutationDirection::from(false), NutationDirection::TrueToMean);
        assert_eq!(
            NutationDirection::MeanToTrue.inverse(),
            NutationDirection::TrueToMean
        );
    }

    #[test]
    fn test_ecliptic_longitude_shift() {
        let t = 0.05;
        let dpsi = compute_nutation(t, true).delta_psi;
        let mean = Vector::spherical(1.0, 1.0, 0.2);

        let apparent = nutate_ecliptic(t, true, &mean, NutationDirection::MeanToTrue);
        let [r, phi, theta] = apparent.to_spherical().components();
        assert!((r - 1.0).abs() < 1e-15);
        assert!((phi - (1.0 + dpsi)).abs() < 1e-14);
        assert!((theta - 0.2).abs() < 1e-14);

        let back = nutate_ecliptic(t, true, &apparent, NutationDirection::TrueToMean);
        assert!((back - mean).normalize() < 1e-14);
    }

    #[test]
    fn test_settings_build() {
        let settings = NutationSettings::default();
        assert!(settings.use_fast_model);
        assert_eq!(settings.obliquity, ObliquityKind::Iau2006);

        let custom = NutationSettings {
            use_fast_model: false,
            obliquity: ObliquityKind::Iau1980,
        };
        let nutation: EquatorialNutation<ObliquityKind> = custom.into();
        assert!(!nutation.use_fast_model());
        assert_eq!(*nutation.obliquity_model(), ObliquityKind::Iau1980);
    }

    #[test]
    fn test_default_matches_free_function() {
        let v = Vector::rectangular(0.1, 0.2, 0.97);
        let nutation: EquatorialNutation = EquatorialNutation::default();
        let a = nutation.apply(0.4, &v, true);
        let b = nutate_equatorial(0.4, true, &v, true);
        assert_eq!(a, b);
    }
}
