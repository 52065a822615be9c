//! Physical 3-vectors with two interchangeable representations.
//!
//! Ephemeris code hands positions around either as Cartesian components or as
//! magnitude/azimuth/elevation triples. [`Vector`] carries both forms as a
//! single tagged value so callers never need to know which one they received.
//!
//! # Rectangular vs Spherical
//!
//! | Variant | Components | Ranges after conversion |
//! |---------|------------|-------------------------|
//! | [`Vector::Rectangular`] | `x`, `y`, `z` | any real |
//! | [`Vector::Spherical`] | `r`, `phi` (azimuth), `theta` (elevation) | `r ≥ 0`, `φ ∈ [0, 2π)`, `θ ∈ [−π/2, π/2]` |
//!
//! Both denote the same physical vector under
//!
//! ```text
//! x = r·cosθ·cosφ    y = r·cosθ·sinφ    z = r·sinθ
//! ```
//!
//! The degenerate directions are fixed by convention: a vector on the z axis
//! has `φ = 0`, and the zero vector has `φ = θ = 0`.
//!
//! ```
//! use celestial_nutation::{Vector, VectorKind};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let pole = Vector::rectangular(0.0, 0.0, 1.0).to_spherical();
//! assert_eq!(pole, Vector::spherical(1.0, 0.0, FRAC_PI_2));
//! assert_eq!(pole.kind(), VectorKind::Spherical);
//! ```
//!
//! # Arithmetic
//!
//! Every operation first projects its operands to rectangular form, works
//! component-wise and returns a rectangular result, whatever the input
//! variants were:
//!
//! ```
//! use celestial_nutation::Vector;
//!
//! let a = Vector::spherical(2.0, 0.0, 0.0);
//! let b = Vector::rectangular(0.0, 1.0, 0.0);
//!
//! assert_eq!(a + b, Vector::rectangular(2.0, 1.0, 0.0));
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector::rectangular(0.0, 0.0, 2.0));
//! ```
//!
//! Compound assignment (`+=`, `-=`, `*=`, `/=`, and `*=` with a rotation
//! matrix) computes the binary result and stores it in the receiver through
//! [`Vector::assign`], so the receiver ends up rectangular.
use crate::math::wrap_two_pi;
use crate::{AstroError, AstroResult, RotationMatrix3};
use std::fmt;
use std::str::FromStr;

/// Representation tag of a [`Vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VectorKind {
    /// Cartesian `(x, y, z)`.
    Rectangular,
    /// Magnitude, azimuth and elevation `(r, φ, θ)`.
    Spherical,
}

impl VectorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Spherical => "spherical",
        }
    }
}

/// Parses `"rectangular"` or `"spherical"` (ASCII case-insensitive).
///
/// Any other name is an [`AstroError::UnsupportedRepresentation`].
impl FromStr for VectorKind {
    type Err = AstroError;

    fn from_str(s: &str) -> AstroResult<Self> {
        if s.eq_ignore_ascii_case("rectangular") {
            Ok(Self::Rectangular)
        } else if s.eq_ignore_ascii_case("spherical") {
            Ok(Self::Spherical)
        } else {
            Err(AstroError::unsupported_representation(s))
        }
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A physical 3-vector in rectangular or spherical form.
///
/// Angles are in radians. The value owns its three components; the only
/// in-place mutations are [`assign`](Self::assign), [`set`](Self::set),
/// indexing on a rectangular vector, and the compound-assignment operators.
///
/// # Construction
///
/// ```
/// use celestial_nutation::Vector;
///
/// let v = Vector::rectangular(1.0, 2.0, 3.0);
/// let s = Vector::spherical(1.0, 0.5, 0.3);
/// let from_array = Vector::from([1.0, 2.0, 3.0]);
/// assert_eq!(v, from_array);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Vector {
    Rectangular { x: f64, y: f64, z: f64 },
    Spherical { r: f64, phi: f64, theta: f64 },
}

impl Default for Vector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Vector {
    /// Creates a rectangular vector.
    #[inline]
    pub fn rectangular(x: f64, y: f64, z: f64) -> Self {
        Self::Rectangular { x, y, z }
    }

    /// Creates a spherical vector from magnitude, azimuth and elevation.
    ///
    /// The components are stored as given; they are not range-reduced.
    #[inline]
    pub fn spherical(r: f64, phi: f64, theta: f64) -> Self {
        Self::Spherical { r, phi, theta }
    }

    /// Returns the rectangular zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::rectangular(0.0, 0.0, 0.0)
    }

    /// Unit vector along +X (toward the equinox in equatorial frames).
    #[inline]
    pub fn x_axis() -> Self {
        Self::rectangular(1.0, 0.0, 0.0)
    }

    /// Unit vector along +Y.
    #[inline]
    pub fn y_axis() -> Self {
        Self::rectangular(0.0, 1.0, 0.0)
    }

    /// Unit vector along +Z (toward the pole in equatorial frames).
    #[inline]
    pub fn z_axis() -> Self {
        Self::rectangular(0.0, 0.0, 1.0)
    }

    /// Returns the representation tag.
    #[inline]
    pub fn kind(&self) -> VectorKind {
        match self {
            Self::Rectangular { .. } => VectorKind::Rectangular,
            Self::Spherical { .. } => VectorKind::Spherical,
        }
    }

    /// Returns a vector of the requested representation denoting the same
    /// physical vector.
    ///
    /// Converting to the variant the vector already has returns a copy.
    pub fn convert(&self, kind: VectorKind) -> Self {
        match (*self, kind) {
            (Self::Rectangular { .. }, VectorKind::Rectangular)
            | (Self::Spherical { .. }, VectorKind::Spherical) => *self,
            (Self::Spherical { r, phi, theta }, VectorKind::Rectangular) => {
                let (x, y, z) = spherical_to_rectangular(r, phi, theta);
                Self::rectangular(x, y, z)
            }
            (Self::Rectangular { x, y, z }, VectorKind::Spherical) => {
                let (r, phi, theta) = rectangular_to_spherical(x, y, z);
                Self::spherical(r, phi, theta)
            }
        }
    }

    /// Shorthand for `convert(VectorKind::Rectangular)`.
    #[inline]
    pub fn to_rectangular(&self) -> Self {
        self.convert(VectorKind::Rectangular)
    }

    /// Shorthand for `convert(VectorKind::Spherical)`.
    #[inline]
    pub fn to_spherical(&self) -> Self {
        self.convert(VectorKind::Spherical)
    }

    /// Rectangular components `[x, y, z]`, converting if necessary.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        let (x, y, z) = self.xyz();
        [x, y, z]
    }

    /// Raw components in the vector's own representation.
    ///
    /// `[x, y, z]` for rectangular vectors and `[r, phi, theta]` for spherical.
    #[inline]
    pub fn components(&self) -> [f64; 3] {
        match *self {
            Self::Rectangular { x, y, z } => [x, y, z],
            Self::Spherical { r, phi, theta } => [r, phi, theta],
        }
    }

    /// Replaces all three components of `self`, possibly changing its variant.
    #[inline]
    pub fn assign(&mut self, other: Vector) {
        *self = other;
    }

    /// Returns the rectangular component at `index` (0=x, 1=y, 2=z).
    ///
    /// Spherical vectors are projected first. For panicking access on a
    /// rectangular vector use `v[i]`.
    pub fn get(&self, index: usize) -> AstroResult<f64> {
        let [x, y, z] = self.to_array();
        match index {
            0 => Ok(x),
            1 => Ok(y),
            2 => Ok(z),
            _ => Err(AstroError::index_out_of_bounds("Vector::get", index)),
        }
    }

    /// Sets the rectangular component at `index` (0=x, 1=y, 2=z).
    ///
    /// A spherical receiver is rebound as rectangular before the write. The
    /// receiver is left untouched when the index is out of range.
    pub fn set(&mut self, index: usize, value: f64) -> AstroResult<()> {
        if index > 2 {
            return Err(AstroError::index_out_of_bounds("Vector::set", index));
        }
        let mut components = self.to_array();
        components[index] = value;
        self.assign(Self::from(components));
        Ok(())
    }

    /// Dot product of the rectangular projections.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let (x1, y1, z1) = self.xyz();
        let (x2, y2, z2) = other.xyz();
        x1 * x2 + y1 * y2 + z1 * z2
    }

    /// Cross product by the determinant expansion, right-hand rule.
    pub fn cross(&self, other: &Self) -> Self {
        let (x1, y1, z1) = self.xyz();
        let (x2, y2, z2) = other.xyz();
        Self::rectangular(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2)
    }

    /// Replaces `self` with `self × other`.
    pub fn cross_assign(&mut self, other: &Self) {
        let product = self.cross(other);
        self.assign(product);
    }

    /// Euclidean magnitude, `sqrt(v · v)`.
    ///
    /// The zero vector yields exactly 0. Unlike most vector libraries this
    /// returns the length, not a unit vector.
    ///
    /// ```
    /// use celestial_nutation::Vector;
    ///
    /// assert_eq!(Vector::rectangular(3.0, 4.0, 0.0).normalize(), 5.0);
    /// assert_eq!(Vector::zeros().normalize(), 0.0);
    /// ```
    #[inline]
    pub fn normalize(&self) -> f64 {
        libm::sqrt(self.dot(self))
    }

    #[inline]
    fn xyz(&self) -> (f64, f64, f64) {
        match *self {
            Self::Rectangular { x, y, z } => (x, y, z),
            Self::Spherical { r, phi, theta } => spherical_to_rectangular(r, phi, theta),
        }
    }
}

#[inline]
fn spherical_to_rectangular(r: f64, phi: f64, theta: f64) -> (f64, f64, f64) {
    let (sin_phi, cos_phi) = libm::sincos(phi);
    let (sin_el, cos_el) = libm::sincos(theta);
    (r * cos_phi * cos_el, r * sin_phi * cos_el, r * sin_el)
}

#[inline]
fn rectangular_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let xy_sqr = x * x + y * y;
    let r = libm::sqrt(xy_sqr + z * z);

    let phi = if x == 0.0 && y == 0.0 {
        0.0
    } else {
        wrap_two_pi(libm::atan2(y, x))
    };

    let rho = libm::sqrt(xy_sqr);
    let theta = if z == 0.0 && rho == 0.0 {
        0.0
    } else {
        libm::atan2(z, rho)
    };

    (r, phi, theta)
}

impl From<[f64; 3]> for Vector {
    fn from(arr: [f64; 3]) -> Self {
        Self::rectangular(arr[0], arr[1], arr[2])
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

/// Vector + Vector
impl std::ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (x1, y1, z1) = self.xyz();
        let (x2, y2, z2) = rhs.xyz();
        Self::rectangular(x1 + x2, y1 + y2, z1 + z2)
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (x1, y1, z1) = self.xyz();
        let (x2, y2, z2) = rhs.xyz();
        Self::rectangular(x1 - x2, y1 - y2, z1 - z2)
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        let (x, y, z) = self.xyz();
        Self::rectangular(x * scalar, y * scalar, z * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vec: Vector) -> Vector {
        vec * self
    }
}

/// Vector / scalar (IEEE-754 semantics for a zero divisor)
impl std::ops::Div<f64> for Vector {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        let (x, y, z) = self.xyz();
        Self::rectangular(x / scalar, y / scalar, z / scalar)
    }
}

/// -Vector
impl std::ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        let (x, y, z) = self.xyz();
        Self::rectangular(-x, -y, -z)
    }
}

impl std::ops::AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.assign(*self + rhs);
    }
}

impl std::ops::SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        self.assign(*self - rhs);
    }
}

impl std::ops::MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.assign(*self * scalar);
    }
}

impl std::ops::DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        self.assign(*self / scalar);
    }
}

/// v *= M stores M·v
impl std::ops::MulAssign<RotationMatrix3> for Vector {
    fn mul_assign(&mut self, matrix: RotationMatrix3) {
        self.assign(matrix * *self);
    }
}

impl std::ops::MulAssign<&RotationMatrix3> for Vector {
    fn mul_assign(&mut self, matrix: &RotationMatrix3) {
        self.assign(matrix * *self);
    }
}

/// v[i] on a rectangular vector (panics if i > 2 or the vector is spherical)
impl std::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self {
            Self::Rectangular { x, y, z } => match index {
                0 => x,
                1 => y,
                2 => z,
                _ => panic!("Vector index out of bounds: {}", index),
            },
            Self::Spherical { .. } => {
                panic!("Vector indexing requires a rectangular vector")
            }
        }
    }
}

/// v[i] = value on a rectangular vector (panics if i > 2 or the vector is spherical)
impl std::ops::IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self {
            Self::Rectangular { x, y, z } => match index {
                0 => x,
                1 => y,
                2 => z,
                _ => panic!("Vector index out of bounds: {}", index),
            },
            Self::Spherical { .. } => {
                panic!("Vector indexing requires a rectangular vector")
            }
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangular { x, y, z } => {
                write!(f, "Rectangular({:.9}, {:.9}, {:.9})", x, y, z)
            }
            Self::Spherical { r, phi, theta } => {
                write!(f, "Spherical(r={:.9}, phi={:.9}, theta={:.9})", r, phi, theta)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, QUARTER_PI, SQRT2, TWOPI};

    fn assert_close(a: &Vector, b: &Vector, tol: f64) {
        let (pa, pb) = (a.to_array(), b.to_array());
        for i in 0..3 {
            let scale = pa[i].abs().max(pb[i].abs()).max(1.0);
            assert!(
                (pa[i] - pb[i]).abs() <= tol * scale,
                "component {}: {} vs {}",
                i,
                pa[i],
                pb[i]
            );
        }
    }

    #[test]
    fn test_construction_and_kind() {
        let v = Vector::rectangular(1.0, 2.0, 3.0);
        assert_eq!(v.kind(), VectorKind::Rectangular);
        assert_eq!(v.components(), [1.0, 2.0, 3.0]);

        let s = Vector::spherical(2.0, 0.5, -0.25);
        assert_eq!(s.kind(), VectorKind::Spherical);
        assert_eq!(s.components(), [2.0, 0.5, -0.25]);

        assert_eq!(Vector::default(), Vector::zeros());
        assert_eq!(Vector::from([4.0, 5.0, 6.0]), Vector::rectangular(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_convert_same_kind_is_copy() {
        let v = Vector::rectangular(1.0, -2.0, 3.0);
        assert_eq!(v.convert(VectorKind::Rectangular), v);

        let s = Vector::spherical(-1.0, 7.0, 3.0);
        assert_eq!(s.convert(VectorKind::Spherical), s);
    }

    #[test]
    fn test_literal_conversions() {
        assert_eq!(
            Vector::x_axis().to_spherical(),
            Vector::spherical(1.0, 0.0, 0.0)
        );

        let y = Vector::y_axis().to_spherical();
        assert_eq!(y.components()[0], 1.0);
        assert!((y.components()[1] - HALF_PI).abs() < 1e-15);
        assert_eq!(y.components()[2], 0.0);

        assert_eq!(
            Vector::z_axis().to_spherical(),
            Vector::spherical(1.0, 0.0, HALF_PI)
        );

        let diag = Vector::rectangular(1.0, 1.0, 0.0).to_spherical();
        let [r, phi, theta] = diag.components();
        assert!((r - SQRT2).abs() < 1e-15);
        assert!((phi - QUARTER_PI).abs() < 1e-15);
        assert_eq!(theta, 0.0);
    }

    #[test]
    fn test_degenerate_conventions() {
        assert_eq!(Vector::zeros().to_spherical(), Vector::spherical(0.0, 0.0, 0.0));

        let south = Vector::rectangular(0.0, 0.0, -3.0).to_spherical();
        assert_eq!(south, Vector::spherical(3.0, 0.0, -HALF_PI));
    }

    #[test]
    fn test_spherical_ranges() {
        let samples = [
            Vector::rectangular(-1.0, 0.0, 0.0),
            Vector::rectangular(-1.0, -1e-12, 0.5),
            Vector::rectangular(0.3, -0.7, -0.2),
            Vector::rectangular(-5.0, -5.0, -5.0),
            Vector::rectangular(1e-300, -1e-300, 1e300),
        ];
        for v in samples {
            let [r, phi, theta] = v.to_spherical().components();
            assert!(r >= 0.0);
            assert!((0.0..TWOPI).contains(&phi), "phi = {}", phi);
            assert!((-HALF_PI..=HALF_PI).contains(&theta), "theta = {}", theta);
        }
    }

    #[test]
    fn test_negative_azimuth_is_wrapped() {
        let [_, phi, _] = Vector::rectangular(0.0, -1.0, 0.0).to_spherical().components();
        assert!((phi - 3.0 * HALF_PI).abs() < 1e-14);
    }

    #[test]
    fn test_round_trip() {
        let samples = [
            Vector::rectangular(1.0, 2.0, 3.0),
            Vector::rectangular(-0.4, 0.9, -0.1),
            Vector::rectangular(-7.5e3, -2.0e3, 4.0e2),
            Vector::rectangular(0.0, 0.0, -2.0),
            Vector::rectangular(1.0e-8, 0.0, 0.0),
        ];
        for v in samples {
            let back = v.to_spherical().to_rectangular();
            assert_eq!(back.kind(), VectorKind::Rectangular);
            assert_close(&back, &v, 1e-12);
        }
    }

    #[test]
    fn test_spherical_to_rectangular() {
        let v = Vector::spherical(2.0, HALF_PI, 0.0).to_rectangular();
        assert_close(&v, &Vector::rectangular(0.0, 2.0, 0.0), 1e-15);

        let v = Vector::spherical(1.0, 0.0, -HALF_PI).to_rectangular();
        assert_close(&v, &Vector::rectangular(0.0, 0.0, -1.0), 1e-15);
    }

    #[test]
    fn test_dot_cross_normalize() {
        let a = Vector::x_axis();
        let b = Vector::y_axis();
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Vector::z_axis());
        assert_eq!(Vector::rectangular(3.0, 4.0, 0.0).normalize(), 5.0);
        assert_eq!(Vector::zeros().normalize(), 0.0);

        let c = Vector::rectangular(1.0, 2.0, 3.0);
        let d = Vector::rectangular(4.0, 5.0, 6.0);
        assert_eq!(c.dot(&d), 32.0);
        assert_eq!(c.cross(&d), Vector::rectangular(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_mixed_variant_arithmetic() {
        let s = Vector::spherical(2.0, 0.0, 0.0);
        let r = Vector::rectangular(1.0, 1.0, 1.0);

        let sum = s + r;
        assert_eq!(sum.kind(), VectorKind::Rectangular);
        assert_close(&sum, &Vector::rectangular(3.0, 1.0, 1.0), 1e-15);
        assert_close(&(r - s), &Vector::rectangular(-1.0, 1.0, 1.0), 1e-15);
        assert_close(&(-s), &Vector::rectangular(-2.0, 0.0, 0.0), 1e-15);
        assert_close(&(s * 1.5), &Vector::rectangular(3.0, 0.0, 0.0), 1e-15);
        assert_close(&(0.5 * s), &Vector::rectangular(1.0, 0.0, 0.0), 1e-15);
        assert_close(&(s / 4.0), &Vector::rectangular(0.5, 0.0, 0.0), 1e-15);
        assert_eq!((-s).kind(), VectorKind::Rectangular);
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        let v = Vector::rectangular(1.0, -1.0, 0.0) / 0.0;
        let [x, y, z] = v.components();
        assert_eq!(x, f64::INFINITY);
        assert_eq!(y, f64::NEG_INFINITY);
        assert!(z.is_nan());
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector::spherical(1.0, 0.0, 0.0);
        v += Vector::rectangular(1.0, 2.0, 3.0);
        assert_eq!(v.kind(), VectorKind::Rectangular);
        assert_close(&v, &Vector::rectangular(2.0, 2.0, 3.0), 1e-15);

        v -= Vector::rectangular(1.0, 1.0, 1.0);
        assert_close(&v, &Vector::rectangular(1.0, 1.0, 2.0), 1e-15);

        v *= 2.0;
        assert_close(&v, &Vector::rectangular(2.0, 2.0, 4.0), 1e-15);

        v /= 2.0;
        assert_close(&v, &Vector::rectangular(1.0, 1.0, 2.0), 1e-15);

        let mut w = Vector::x_axis();
        w.cross_assign(&Vector::y_axis());
        assert_eq!(w, Vector::z_axis());
    }

    #[test]
    fn test_matrix_assignment() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);

        let mut v = Vector::spherical(1.0, 0.0, 0.0);
        v *= m;
        assert_eq!(v.kind(), VectorKind::Rectangular);
        assert_close(&v, &Vector::rectangular(0.0, -1.0, 0.0), 1e-15);

        v *= &m.transpose();
        assert_close(&v, &Vector::x_axis(), 1e-15);
    }

    #[test]
    fn test_assign_changes_variant() {
        let mut v = Vector::rectangular(1.0, 2.0, 3.0);
        v.assign(Vector::spherical(1.0, 0.0, 0.0));
        assert_eq!(v.kind(), VectorKind::Spherical);
    }

    #[test]
    fn test_get_set_methods() {
        let mut v = Vector::rectangular(1.0, 2.0, 3.0);
        assert_eq!(v.get(0).unwrap(), 1.0);
        assert_eq!(v.get(1).unwrap(), 2.0);
        assert_eq!(v.get(2).unwrap(), 3.0);

        v.set(0, 10.0).unwrap();
        v.set(1, 20.0).unwrap();
        v.set(2, 30.0).unwrap();
        assert_eq!(v, Vector::rectangular(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_set_on_spherical_rebinds_rectangular() {
        let mut v = Vector::spherical(1.0, 0.0, 0.0);
        v.set(2, 5.0).unwrap();
        assert_eq!(v.kind(), VectorKind::Rectangular);
        assert_close(&v, &Vector::rectangular(1.0, 0.0, 5.0), 1e-15);
    }

    #[test]
    fn test_get_set_errors() {
        let mut v = Vector::rectangular(1.0, 2.0, 3.0);
        let err = v.get(3).unwrap_err();
        assert!(err.to_string().contains("index 3 out of bounds"));

        let err = v.set(5, 42.0).unwrap_err();
        assert!(err.to_string().contains("index 5 out of bounds"));
        assert_eq!(v, Vector::rectangular(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_indexing_operators() {
        let mut v = Vector::rectangular(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 20.0;
        assert_eq!(v, Vector::rectangular(1.0, 20.0, 3.0));
    }

    #[test]
    #[should_panic(expected = "Vector index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector::rectangular(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    #[should_panic(expected = "requires a rectangular vector")]
    fn test_index_spherical_panic() {
        let mut v = Vector::spherical(1.0, 0.0, 0.0);
        v[0] = 1.0;
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("rectangular".parse::<VectorKind>().unwrap(), VectorKind::Rectangular);
        assert_eq!("Spherical".parse::<VectorKind>().unwrap(), VectorKind::Spherical);

        let err = "cylindrical".parse::<VectorKind>().unwrap_err();
        assert!(matches!(err, AstroError::UnsupportedRepresentation { .. }));
        assert!(err.to_string().contains("cylindrical"));
        assert_eq!(VectorKind::Spherical.to_string(), "spherical");
    }

    #[test]
    fn test_display_formatting() {
        let v = Vector::rectangular(1.234567890, -2.345678901, 3.456789012);
        let out = format!("{}", v);
        assert!(out.starts_with("Rectangular("));
        assert!(out.contains("-2.345678901"));

        let s = format!("{}", Vector::spherical(1.0, 0.5, 0.25));
        assert!(s.contains("phi=0.500000000"));
    }

    #[test]
    fn test_array_conversions() {
        let s = Vector::spherical(1.0, 0.0, 0.0);
        let arr: [f64; 3] = s.into();
        assert_eq!(arr, [1.0, 0.0, 0.0]);
    }
}
