//! Harmonic series evaluation shared by the luni-solar and planetary tables.
//!
//! Each table row pairs integer multipliers with amplitude coefficients. For
//! one row the argument is `Σ mᵢ·argᵢ` over the fundamental arguments, and the
//! row contributes to Δψ and Δε through its sine and cosine. Rows are summed
//! from the last (smallest) to the first (largest) to reduce rounding error,
//! and the sums stay in the tables' native unit of 0.1 µas until
//! [`SeriesSum::to_radians`].

use super::types::NutationResult;
use crate::constants::{ARCSEC_TO_RAD, SERIES_UNITS_PER_ARCSEC};

/// One row of a nutation series over `K` fundamental arguments.
pub trait HarmonicTerm<const K: usize> {
    fn multipliers(&self) -> &[i8; K];

    /// `(Δψ, Δε)` contribution in 0.1 µas, given the sine and cosine of the
    /// row's argument.
    fn contribution(&self, t: f64, sin_arg: f64, cos_arg: f64) -> (f64, f64);

    /// Linear combination `Σ mᵢ·argᵢ`, accumulated left to right.
    #[inline]
    fn argument(&self, args: &[f64; K]) -> f64 {
        self.multipliers()
            .iter()
            .zip(args)
            .fold(0.0, |acc, (&m, &arg)| acc + f64::from(m) * arg)
    }
}

/// Raw series sums in units of 0.1 µas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeriesSum {
    pub delta_psi: f64,
    pub delta_eps: f64,
}

impl SeriesSum {
    #[inline]
    pub fn to_radians(self) -> NutationResult {
        NutationResult {
            delta_psi: self.delta_psi * ARCSEC_TO_RAD / SERIES_UNITS_PER_ARCSEC,
            delta_eps: self.delta_eps * ARCSEC_TO_RAD / SERIES_UNITS_PER_ARCSEC,
        }
    }
}

/// Sums `terms` in descending order at fundamental arguments `args`.
///
/// An empty table yields zero sums.
pub fn sum_series<const K: usize, H: HarmonicTerm<K>>(
    terms: &[H],
    args: &[f64; K],
    t: f64,
) -> SeriesSum {
    let mut sum = SeriesSum::default();

    for term in terms.iter().rev() {
        let (sin_arg, cos_arg) = libm::sincos(term.argument(args));
        let (dpsi, deps) = term.contribution(t, sin_arg, cos_arg);
        sum.delta_psi += dpsi;
        sum.delta_eps += deps;
    }

    log::trace!(
        "series of {} terms: dpsi={} deps={} (0.1 uas)",
        terms.len(),
        sum.delta_psi,
        sum.delta_eps
    );
    sum
}

/// Amplitudes of a luni-solar row, 0.1 µas (and 0.1 µas per century for the
/// `_t` rates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarCoefficients {
    pub psi_sin: f64,
    pub psi_sin_t: f64,
    pub psi_cos: f64,
    pub eps_cos: f64,
    pub eps_cos_t: f64,
    pub eps_sin: f64,
}

/// Luni-solar row over `[l, l', F, D, Ω]`.
///
/// ```text
/// Δψ += (psi_sin + psi_sin_t·T)·sin(arg) + psi_cos·cos(arg)
/// Δε += (eps_cos + eps_cos_t·T)·cos(arg) + eps_sin·sin(arg)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunisolarTerm {
    pub multipliers: [i8; 5],
    pub coefficients: LunisolarCoefficients,
}

impl LunisolarTerm {
    /// Builds a row from multipliers and `[ψ sin, ψ sin·T, ψ cos, ε cos, ε cos·T, ε sin]`.
    pub const fn new(multipliers: [i8; 5], c: [f64; 6]) -> Self {
        Self {
            multipliers,
            coefficients: LunisolarCoefficients {
                psi_sin: c[0],
                psi_sin_t: c[1],
                psi_cos: c[2],
                eps_cos: c[3],
                eps_cos_t: c[4],
                eps_sin: c[5],
            },
        }
    }
}

impl HarmonicTerm<5> for LunisolarTerm {
    #[inline]
    fn multipliers(&self) -> &[i8; 5] {
        &self.multipliers
    }

    #[inline]
    fn contribution(&self, t: f64, sin_arg: f64, cos_arg: f64) -> (f64, f64) {
        let c = &self.coefficients;
        (
            (c.psi_sin + c.psi_sin_t * t) * sin_arg + c.psi_cos * cos_arg,
            (c.eps_cos + c.eps_cos_t * t) * cos_arg + c.eps_sin * sin_arg,
        )
    }
}

/// Amplitudes of a planetary row, 0.1 µas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryCoefficients {
    pub psi_sin: f64,
    pub psi_cos: f64,
    pub eps_sin: f64,
    pub eps_cos: f64,
}

/// Planetary row over `[l, l', F, D, Ω, Me, Ve, Ea, Ma, Ju, Sa, Ur, Ne, pA]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetaryTerm {
    pub multipliers: [i8; 14],
    pub coefficients: PlanetaryCoefficients,
}

impl PlanetaryTerm {
    /// Builds a row from multipliers and `[ψ sin, ψ cos, ε sin, ε cos]`.
    pub const fn new(multipliers: [i8; 14], c: [f64; 4]) -> Self {
        Self {
            multipliers,
            coefficients: PlanetaryCoefficients {
                psi_sin: c[0],
                psi_cos: c[1],
                eps_sin: c[2],
                eps_cos: c[3],
            },
        }
    }
}

impl HarmonicTerm<14> for PlanetaryTerm {
    #[inline]
    fn multipliers(&self) -> &[i8; 14] {
        &self.multipliers
    }

    #[inline]
    fn contribution(&self, _t: f64, sin_arg: f64, cos_arg: f64) -> (f64, f64) {
        let c = &self.coefficients;
        (
            c.psi_sin * sin_arg + c.psi_cos * cos_arg,
            c.eps_sin * sin_arg + c.eps_cos * cos_arg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_argument_is_linear_combination() {
        let term = LunisolarTerm::new([1, -2, 0, 3, 1], [0.0; 6]);
        let args = [0.5, 0.25, 9.0, 0.125, 2.0];
        assert_eq!(term.argument(&args), 0.5 - 0.5 + 0.375 + 2.0);
    }

    #[test]
    fn test_empty_series_is_zero() {
        let terms: [LunisolarTerm; 0] = [];
        let sum = sum_series(&terms, &[1.0; 5], 0.3);
        assert_eq!(sum, SeriesSum::default());
        assert_eq!(sum.to_radians(), NutationResult::default());
    }

    #[test]
    fn test_lunisolar_contribution() {
        let term = LunisolarTerm::new([0, 0, 0, 0, 1], [10.0, 2.0, 3.0, 5.0, 4.0, 7.0]);

        // arg = 0: sin 0, cos 1
        let (dpsi, deps) = term.contribution(0.5, 0.0, 1.0);
        assert_eq!(dpsi, 3.0);
        assert_eq!(deps, 5.0 + 4.0 * 0.5);

        // arg = π/2: sin 1, cos 0
        let (dpsi, deps) = term.contribution(0.5, 1.0, 0.0);
        assert_eq!(dpsi, 10.0 + 2.0 * 0.5);
        assert_eq!(deps, 7.0);
    }

    #[test]
    fn test_planetary_contribution_ignores_time() {
        let mut multipliers = [0i8; 14];
        multipliers[13] = 1;
        let term = PlanetaryTerm::new(multipliers, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(term.contribution(0.0, 0.6, 0.8), term.contribution(5.0, 0.6, 0.8));
        assert_eq!(term.contribution(0.0, 1.0, 0.0), (1.0, 3.0));
        assert_eq!(term.contribution(0.0, 0.0, 1.0), (2.0, 4.0));
    }

    #[test]
    fn test_sum_series_single_term() {
        let terms = [LunisolarTerm::new([1, 0, 0, 0, 0], [2.0, 0.0, 0.0, 0.0, 0.0, 3.0])];
        let sum = sum_series(&terms, &[HALF_PI, 0.0, 0.0, 0.0, 0.0], 0.0);
        assert!((sum.delta_psi - 2.0).abs() < 1e-15);
        assert!((sum.delta_eps - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_sum_series_descending_order() {
        // The small rows at the end are accumulated before the large first row.
        let terms = [
            LunisolarTerm::new([0, 0, 0, 0, 0], [0.0, 0.0, 1.0e16, 0.0, 0.0, 0.0]),
            LunisolarTerm::new([0, 0, 0, 0, 0], [0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
            LunisolarTerm::new([0, 0, 0, 0, 0], [0.0, 0.0, 1.0, 0.0, 0.0, 0.0]),
        ];
        let sum = sum_series(&terms, &[0.0; 5], 0.0);
        assert_eq!(sum.delta_psi, 1.0e16 + 2.0);
    }

    #[test]
    fn test_to_radians_scale() {
        let sum = SeriesSum {
            delta_psi: 1.0e7,
            delta_eps: -2.0e7,
        };
        let result = sum.to_radians();
        assert!((result.delta_psi - ARCSEC_TO_RAD).abs() < 1e-20);
        assert!((result.delta_eps + 2.0 * ARCSEC_TO_RAD).abs() < 1e-20);
    }
}
