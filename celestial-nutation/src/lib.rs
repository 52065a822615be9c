//! Earth nutation and mean/true equator-of-date rotation.
//!
//! `celestial-nutation` computes the nutation in longitude (Δψ) and obliquity
//! (Δε) for a dynamical time and rotates position vectors between the mean
//! and true equator and equinox of date. It is pure Rust with no state and
//! no I/O.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector`] (rectangular or spherical) and [`RotationMatrix3`] |
//! | [`nutation`] | Fundamental arguments, series, fast and IAU 2000A models, rotation |
//! | [`obliquity`] | Mean obliquity of the ecliptic (IAU 1980, 2006) |
//! | [`constants`] | J2000, unit conversions |
//! | [`utils`] | Julian Date to centuries |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Pipeline
//!
//! ```
//! use celestial_nutation::nutation::{compute_nutation, nutation_matrix};
//! use celestial_nutation::obliquity::{MeanObliquityIAU2006, ObliquityModel};
//! use celestial_nutation::utils::jd_to_centuries;
//! use celestial_nutation::Vector;
//!
//! let t = jd_to_centuries(2451545.0, 8766.0);
//! let nut = compute_nutation(t, false);
//! let eps = MeanObliquityIAU2006.mean_obliquity(t);
//!
//! let mean = Vector::spherical(1.0, 1.2, 0.3);
//! let apparent = nutation_matrix(nut.delta_psi, nut.delta_eps, eps) * mean;
//! assert!((apparent.normalize() - 1.0).abs() < 1e-14);
//! ```
//!
//! # Logging
//!
//! Model selection and series sums are reported at `trace` level, rotations
//! at `debug`, through the [`log`] facade. No logger is installed here.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public value types.

pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod obliquity;
pub mod utils;

pub use errors::{AstroError, AstroResult};
pub use matrix::{RotationMatrix3, Vector, VectorKind};
pub use nutation::{
    compute_nutation, nutate_ecliptic, nutate_equatorial, NutationDirection, NutationModel,
    NutationResult, NutationSettings,
};
pub use obliquity::{ObliquityKind, ObliquityModel};

pub mod test_helpers;
