//! Nutation results and model selection.
//!
//! - [`NutationResult`]: the computed angles (Δψ, Δε) in radians
//! - [`NutationModel`]: which of the two models to evaluate, and the
//!   time-range rule that picks one
//! - [`compute_nutation`]: selection plus evaluation in one call

use super::fast::fast_nutation;
use super::iau2000a::NutationIAU2000A;
use crate::constants::ARCSEC_TO_RAD;
use std::fmt;

/// Nutation in longitude and obliquity.
///
/// - `delta_psi` (Δψ): along the ecliptic, radians
/// - `delta_eps` (Δε): in the obliquity of the ecliptic, radians
///
/// Adding `delta_eps` to the mean obliquity gives the true obliquity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutationResult {
    pub delta_psi: f64,
    pub delta_eps: f64,
}

impl NutationResult {
    pub fn delta_psi_arcsec(&self) -> f64 {
        self.delta_psi / ARCSEC_TO_RAD
    }

    pub fn delta_eps_arcsec(&self) -> f64 {
        self.delta_eps / ARCSEC_TO_RAD
    }
}

impl fmt::Display for NutationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dpsi={:.6}\" deps={:.6}\"",
            self.delta_psi_arcsec(),
            self.delta_eps_arcsec()
        )
    }
}

/// The two available nutation models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NutationModel {
    /// Duffett-Smith closed form, see [`fast_nutation`].
    Fast,
    /// Full IAU 2000A series with the precession-rate adjustment.
    #[default]
    Iau2000A,
}

impl NutationModel {
    /// Picks [`Fast`](Self::Fast) only when it is requested and `|t| ≤ 1`
    /// (within a century of J2000.0); everything else gets the full series.
    ///
    /// ```
    /// use celestial_nutation::nutation::NutationModel;
    ///
    /// assert_eq!(NutationModel::select(0.5, true), NutationModel::Fast);
    /// assert_eq!(NutationModel::select(1.5, true), NutationModel::Iau2000A);
    /// assert_eq!(NutationModel::select(0.5, false), NutationModel::Iau2000A);
    /// ```
    pub fn select(t: f64, use_fast_model: bool) -> Self {
        if use_fast_model && t.abs() <= 1.0 {
            Self::Fast
        } else {
            Self::Iau2000A
        }
    }

    /// Evaluates this model at `t`, with no range check.
    pub fn compute(&self, t: f64) -> NutationResult {
        match self {
            Self::Fast => fast_nutation(t),
            Self::Iau2000A => NutationIAU2000A::new().compute(t),
        }
    }
}

impl fmt::Display for NutationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fast => f.write_str("fast"),
            Self::Iau2000A => f.write_str("IAU 2000A"),
        }
    }
}

/// Nutation at `t` Julian centuries TT from J2000.0, choosing the model with
/// [`NutationModel::select`].
pub fn compute_nutation(t: f64, use_fast_model: bool) -> NutationResult {
    let model = NutationModel::select(t, use_fast_model);
    log::trace!("nutation at t={} using {} model", t, model);
    model.compute(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_rule() {
        assert_eq!(NutationModel::select(0.5, true), NutationModel::Fast);
        assert_eq!(NutationModel::select(-0.5, true), NutationModel::Fast);
        assert_eq!(NutationModel::select(1.0, true), NutationModel::Fast);
        assert_eq!(NutationModel::select(-1.0, true), NutationModel::Fast);
        assert_eq!(NutationModel::select(1.5, true), NutationModel::Iau2000A);
        assert_eq!(NutationModel::select(-1.5, true), NutationModel::Iau2000A);
        for t in [-3.0, -0.5, 0.0, 0.5, 3.0] {
            assert_eq!(NutationModel::select(t, false), NutationModel::Iau2000A);
        }
    }

    #[test]
    fn test_nan_time_uses_full_model() {
        assert_eq!(NutationModel::select(f64::NAN, true), NutationModel::Iau2000A);
    }

    #[test]
    fn test_compute_nutation_dispatch() {
        assert_eq!(compute_nutation(0.5, true), fast_nutation(0.5));
        assert_eq!(
            compute_nutation(1.5, true),
            NutationIAU2000A::new().compute(1.5)
        );
        assert_eq!(
            compute_nutation(0.5, false),
            NutationIAU2000A::new().compute(0.5)
        );
    }

    #[test]
    fn test_default_model() {
        assert_eq!(NutationModel::default(), NutationModel::Iau2000A);
    }

    #[test]
    fn test_result_arcsec_and_display() {
        let r = NutationResult {
            delta_psi: 2.0 * ARCSEC_TO_RAD,
            delta_eps: -ARCSEC_TO_RAD,
        };
        assert!((r.delta_psi_arcsec() - 2.0).abs() < 1e-12);
        assert!((r.delta_eps_arcsec() + 1.0).abs() < 1e-12);
        assert_eq!(r.to_string(), "dpsi=2.000000\" deps=-1.000000\"");
    }
}
