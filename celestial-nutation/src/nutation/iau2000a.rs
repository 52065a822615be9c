//! IAU 2000A nutation model.
//!
//! The MHB2000 rigid-Earth series without free core nutation:
//!
//! - **678 luni-solar terms** over the Delaunay arguments `[l, l', F, D, Ω]`
//! - **687 planetary terms** over the lunar arguments, the eight planetary
//!   longitudes and the general precession `pA`
//!
//! Each series is summed in descending term order and converted from
//! 0.1 µas to radians on its own before the two are added.
//! [`NutationIAU2000A::compute`] then applies the Wallace & Capitaine (2006)
//! adjustment for the IAU 2006 precession rates (eq. 5):
//!
//! ```text
//! Δψ += Δψ · (0.4697e-6 − 2.7774e-6·T)
//! Δε −= Δε · (2.7774e-6·T)
//! ```
//!
//! ## Reference
//!
//! - Mathews, Herring & Buffett (2002), J. Geophys. Res. 107, B4
//! - Wallace & Capitaine (2006), A&A 459, 981

use super::fundamental_args::{lunisolar_arguments, planetary_arguments};
use super::lunisolar_terms::LUNISOLAR_TERMS;
use super::planetary_terms::PLANETARY_TERMS;
use super::series::sum_series;
use super::types::NutationResult;

/// IAU 2000A nutation calculator.
///
/// Stateless; `t` is Julian centuries of TT from J2000.0.
///
/// ```
/// use celestial_nutation::nutation::NutationIAU2000A;
///
/// let result = NutationIAU2000A::new().compute(0.0);
/// // Δψ ≈ -13.93″ and Δε ≈ -5.77″ at J2000.0
/// assert!((result.delta_psi + 6.754e-5).abs() < 1e-8);
/// assert!((result.delta_eps + 2.797e-5).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NutationIAU2000A;

impl NutationIAU2000A {
    pub fn new() -> Self {
        Self
    }

    /// Nutation with the precession-rate adjustment applied.
    pub fn compute(&self, t: f64) -> NutationResult {
        apply_precession_rate_adjustment(self.compute_unadjusted(t), t)
    }

    /// Luni-solar plus planetary series, without the precession-rate adjustment.
    pub fn compute_unadjusted(&self, t: f64) -> NutationResult {
        let lunisolar = self.compute_lunisolar(t);
        let planetary = self.compute_planetary(t);

        NutationResult {
            delta_psi: lunisolar.delta_psi + planetary.delta_psi,
            delta_eps: lunisolar.delta_eps + planetary.delta_eps,
        }
    }

    /// Luni-solar contribution in radians.
    pub fn compute_lunisolar(&self, t: f64) -> NutationResult {
        let args = lunisolar_arguments(t);
        sum_series(&LUNISOLAR_TERMS, args.as_array(), t).to_radians()
    }

    /// Planetary contribution in radians.
    pub fn compute_planetary(&self, t: f64) -> NutationResult {
        let args = planetary_arguments(t);
        sum_series(&PLANETARY_TERMS, args.as_array(), t).to_radians()
    }
}

/// Wallace & Capitaine (2006) eq. 5 applied to a raw IAU 2000A result.
#[inline]
pub fn apply_precession_rate_adjustment(raw: NutationResult, t: f64) -> NutationResult {
    let mut adjusted = raw;
    adjusted.delta_psi += raw.delta_psi * (0.4697e-6 - 2.7774e-6 * t);
    adjusted.delta_eps -= raw.delta_eps * (2.7774e-6 * t);
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_ulp_le;

    #[test]
    fn test_table_sizes() {
        assert_eq!(LUNISOLAR_TERMS.len(), 678);
        assert_eq!(PLANETARY_TERMS.len(), 687);
    }

    #[test]
    fn test_leading_terms() {
        // 18.6-year node term leads the luni-solar table.
        let first = &LUNISOLAR_TERMS[0];
        assert_eq!(first.multipliers, [0, 0, 0, 0, 1]);
        assert_eq!(first.coefficients.psi_sin, -172064161.0);
        assert_eq!(first.coefficients.eps_cos, 92052331.0);

        assert_eq!(PLANETARY_TERMS[0].coefficients.psi_sin, 1440.0);
    }

    #[test]
    fn test_unadjusted_j2000() {
        let raw = NutationIAU2000A::new().compute_unadjusted(0.0);
        assert!((raw.delta_psi - -6.754422426417299e-05).abs() < 1e-15);
        assert!((raw.delta_eps - -2.7970831192374143e-05).abs() < 1e-15);
    }

    #[test]
    fn test_unadjusted_is_sum_of_parts() {
        let nut = NutationIAU2000A::new();
        let t = -0.37;
        let ls = nut.compute_lunisolar(t);
        let pl = nut.compute_planetary(t);
        let total = nut.compute_unadjusted(t);
        assert_eq!(total.delta_psi, ls.delta_psi + pl.delta_psi);
        assert_eq!(total.delta_eps, ls.delta_eps + pl.delta_eps);
        // Planetary terms are a few milliarcseconds at most.
        assert!(pl.delta_psi.abs() < 1e-7);
        assert!(pl.delta_eps.abs() < 1e-7);
    }

    #[test]
    fn test_adjustment_is_exact() {
        let raw = NutationResult {
            delta_psi: 1.0e-4,
            delta_eps: -4.0e-5,
        };
        let t = 0.8;
        let adjusted = apply_precession_rate_adjustment(raw, t);
        assert_ulp_le(
            adjusted.delta_psi,
            raw.delta_psi + raw.delta_psi * (0.4697e-6 - 2.7774e-6 * t),
            0,
            "adjusted dpsi",
        );
        assert_ulp_le(
            adjusted.delta_eps,
            raw.delta_eps - raw.delta_eps * (2.7774e-6 * t),
            0,
            "adjusted deps",
        );
    }

    #[test]
    fn test_adjustment_at_j2000_only_touches_psi() {
        let nut = NutationIAU2000A::new();
        let raw = nut.compute_unadjusted(0.0);
        let adjusted = nut.compute(0.0);
        assert_eq!(adjusted.delta_eps, raw.delta_eps);
        assert_ne!(adjusted.delta_psi, raw.delta_psi);
    }

    #[test]
    fn test_compute_values() {
        let cases = [
            (0.0, -6.754425598969513e-05, -2.7970831192374143e-05),
            (-0.2, -3.778735126293171e-05, -4.2606960961081466e-05),
            (0.5, 7.355340205717094e-05, -2.5839179951785377e-05),
            (1.5, -7.823982904516288e-05, -1.2978132287322332e-05),
        ];
        for (t, dpsi, deps) in cases {
            let r = NutationIAU2000A::new().compute(t);
            assert!((r.delta_psi - dpsi).abs() < 1e-15, "dpsi at t={}", t);
            assert!((r.delta_eps - deps).abs() < 1e-15, "deps at t={}", t);
        }
    }
}
