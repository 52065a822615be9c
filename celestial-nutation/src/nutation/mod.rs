//! Nutation in longitude and obliquity, and the rotation it induces.
//!
//! Nutation is the short-period oscillation of Earth's rotational axis about
//! its mean position, driven by lunar and solar torques on the equatorial
//! bulge. The principal term has the 18.6-year period of the lunar node and
//! an amplitude of about 17″ in longitude and 9″ in obliquity.
//!
//! Two models are available:
//!
//! | Model | Terms | Use |
//! |-------|-------|-----|
//! | [`fast`] | 13 in Δψ, 9 in Δε | quick estimates within a century of J2000.0 |
//! | [`NutationIAU2000A`] | 678 luni-solar + 687 planetary | everything else |
//!
//! [`compute_nutation`] picks one with [`NutationModel::select`]: the fast
//! model is used only when requested and `|T| ≤ 1`.
//!
//! # Time Argument
//!
//! `t` is always Julian centuries of dynamical time (TT) from J2000.0; see
//! [`crate::utils::jd_to_centuries`].
//!
//! # Example
//!
//! ```
//! use celestial_nutation::nutation::compute_nutation;
//!
//! let full = compute_nutation(0.0, false);
//! println!("Δψ = {:.6}″, Δε = {:.6}″", full.delta_psi_arcsec(), full.delta_eps_arcsec());
//! ```
//!
//! # Sub-modules
//!
//! - [`fundamental_args`]: Delaunay and planetary arguments
//! - [`series`]: harmonic term records and the series summation
//! - [`lunisolar_terms`], [`planetary_terms`]: coefficient tables
//! - [`fast`]: Duffett-Smith closed form
//! - [`iau2000a`]: full series with the precession-rate adjustment
//! - [`types`]: [`NutationResult`], [`NutationModel`]
//! - [`equatorial`]: mean/true rotation of equatorial and ecliptic vectors

pub mod equatorial;
pub mod fast;
pub mod fundamental_args;
pub mod iau2000a;
pub mod lunisolar_terms;
pub mod planetary_terms;
pub mod series;
pub mod types;

pub use equatorial::{
    nutate_ecliptic, nutate_equatorial, nutation_matrix, EquatorialNutation, NutationDirection,
    NutationSettings,
};
pub use fast::fast_nutation;
pub use fundamental_args::{
    lunisolar_arguments, planetary_arguments, LunisolarArguments, PlanetaryArguments,
};
pub use iau2000a::{apply_precession_rate_adjustment, NutationIAU2000A};
pub use series::{sum_series, HarmonicTerm, LunisolarTerm, PlanetaryTerm, SeriesSum};
pub use types::{compute_nutation, NutationModel, NutationResult};
