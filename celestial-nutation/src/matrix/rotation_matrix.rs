//! 3x3 rotation matrices.
//!
//! The nutation rotation is the only matrix this crate builds, but callers
//! chain it with their own precession or frame-bias matrices, so the type
//! supports composition and the ERFA-style elementary rotations.
//!
//! # Conventions
//!
//! Storage is row-major `[[f64; 3]; 3]`. Multiplying a column vector gives
//!
//! ```text
//! | r00 r01 r02 |   | x |   | r00*x + r01*y + r02*z |
//! | r10 r11 r12 | * | y | = | r10*x + r11*y + r12*z |
//! | r20 r21 r22 |   | z |   | r20*x + r21*y + r22*z |
//! ```
//!
//! The elementary rotations are passive (they rotate the frame, not the
//! vector): after `rotate_z(+90°)` the vector `[1, 0, 0]` reads `[0, -1, 0]`.
//!
//! ```
//! use celestial_nutation::{RotationMatrix3, Vector};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(FRAC_PI_2);
//!
//! let v = m * Vector::x_axis();
//! assert!((v.to_array()[1] + 1.0).abs() < 1e-15);
//! ```
//!
//! For a rotation the transpose is the inverse, which is how the true-to-mean
//! direction of the nutation rotation is obtained.

use crate::matrix::Vector;
use std::fmt;

/// A 3x3 rotation matrix. Angles are radians, storage is row-major.
///
/// Construction does not validate orthogonality; use
/// [`is_rotation_matrix`](Self::is_rotation_matrix) when that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Wraps a row-major array: `elements[i][j]` is row `i`, column `j`.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Element at `(row, col)`. Panics if either index is 3 or more.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Overwrites the element at `(row, col)`. Panics if either index is 3 or more.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Replaces `self` with `Rx(phi) * self`.
    ///
    /// ```text
    /// Rx(phi) = | 1    0         0       |
    ///           | 0    cos(phi)  sin(phi)|
    ///           | 0   -sin(phi)  cos(phi)|
    /// ```
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);
        let [_, r1, r2] = self.elements;

        for j in 0..3 {
            self.elements[1][j] = c * r1[j] + s * r2[j];
            self.elements[2][j] = -s * r1[j] + c * r2[j];
        }
    }

    /// Replaces `self` with `Ry(theta) * self`.
    ///
    /// ```text
    /// Ry(theta) = | cos(theta)  0  -sin(theta) |
    ///             |     0       1       0      |
    ///             | sin(theta)  0   cos(theta) |
    /// ```
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = libm::sincos(theta);
        let [r0, _, r2] = self.elements;

        for j in 0..3 {
            self.elements[0][j] = c * r0[j] - s * r2[j];
            self.elements[2][j] = s * r0[j] + c * r2[j];
        }
    }

    /// Replaces `self` with `Rz(psi) * self`.
    ///
    /// ```text
    /// Rz(psi) = | cos(psi)  sin(psi)  0 |
    ///           |-sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    ///
    /// Ecliptic nutation is a pure `Rz` by the nutation in longitude.
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);
        let [r0, r1, _] = self.elements;

        for j in 0..3 {
            self.elements[0][j] = c * r0[j] + s * r1[j];
            self.elements[1][j] = -s * r0[j] + c * r1[j];
        }
    }

    /// Matrix product `self * other`; `other` acts first on a vector.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Matrix-vector product `M * v` on raw rectangular components.
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][0] * vector[0] + m[0][1] * vector[1] + m[0][2] * vector[2],
            m[1][0] * vector[0] + m[1][1] * vector[1] + m[1][2] * vector[2],
            m[2][0] * vector[0] + m[2][1] * vector[1] + m[2][2] * vector[2],
        ]
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Transpose; the inverse of a proper rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// True when `det = +1` and `M * Mᵗ = I`, both within `tolerance`.
    ///
    /// ```
    /// use celestial_nutation::RotationMatrix3;
    ///
    /// let mut m = RotationMatrix3::identity();
    /// m.rotate_x(0.409);
    /// assert!(m.is_rotation_matrix(1e-14));
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: RotationMatrix3) -> RotationMatrix3 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

/// M * v; spherical inputs are projected, the result is rectangular.
impl std::ops::Mul<Vector> for RotationMatrix3 {
    type Output = Vector;

    fn mul(self, vec: Vector) -> Vector {
        Vector::from(self.apply_to_vector(vec.to_array()))
    }
}

impl std::ops::Mul<Vector> for &RotationMatrix3 {
    type Output = Vector;

    fn mul(self, vec: Vector) -> Vector {
        Vector::from(self.apply_to_vector(vec.to_array()))
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::VectorKind;

    #[test]
    fn test_identity_get_set() {
        let mut m = RotationMatrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        m.set(0, 1, 0.5);
        assert_eq!(m[(0, 1)], 0.5);
        m[(2, 0)] = -0.25;
        assert_eq!(m.elements()[2][0], -0.25);
        assert_eq!(RotationMatrix3::default(), RotationMatrix3::identity());
    }

    #[test]
    fn test_rotate_z_passive() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        let result = m.apply_to_vector([1.0, 0.0, 0.0]);
        assert!(result[0].abs() < 1e-15);
        assert!((result[1] + 1.0).abs() < 1e-15);
        assert!(result[2].abs() < 1e-15);
    }

    #[test]
    fn test_rotate_x_passive() {
        let mut m = RotationMatrix3::identity();
        m.rotate_x(HALF_PI);
        let result = m.apply_to_vector([0.0, 1.0, 0.0]);
        assert!(result[0].abs() < 1e-15);
        assert!(result[1].abs() < 1e-15);
        assert!((result[2] + 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_rotate_y_passive() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        let result = m.apply_to_vector([0.0, 0.0, 1.0]);
        assert!((result[0] + 1.0).abs() < 1e-15);
        assert!(result[1].abs() < 1e-15);
        assert!(result[2].abs() < 1e-15);
    }

    #[test]
    fn test_rotations_compose_left() {
        let mut sequential = RotationMatrix3::identity();
        sequential.rotate_x(0.1);
        sequential.rotate_z(0.2);

        let mut rx = RotationMatrix3::identity();
        rx.rotate_x(0.1);
        let mut rz = RotationMatrix3::identity();
        rz.rotate_z(0.2);

        assert!(sequential.max_difference(&(rz * rx)) < 1e-16);
    }

    #[test]
    fn test_transpose_inverts() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.5);
        m.rotate_x(0.3);
        let product = m * m.transpose();
        assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
    }

    #[test]
    fn test_is_rotation_matrix() {
        let mut m = RotationMatrix3::identity();
        m.rotate_y(-1.2);
        assert!(m.is_rotation_matrix(1e-14));

        let scaled =
            RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-15));

        let sheared =
            RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!sheared.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_mul_matrix_matrix_forms() {
        let mut a = RotationMatrix3::identity();
        a.rotate_x(0.1);
        let mut b = RotationMatrix3::identity();
        b.rotate_y(0.2);

        let r1 = a * b;
        assert_eq!(r1, a * &b);
        assert_eq!(r1, &a * b);
        assert_eq!(r1, &a * &b);
    }

    #[test]
    fn test_mul_matrix_vector() {
        let m = RotationMatrix3::identity();
        let v = Vector::rectangular(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
        assert_eq!(&m * v, v);

        let s = m * Vector::spherical(2.0, 0.0, 0.0);
        assert_eq!(s.kind(), VectorKind::Rectangular);
        assert_eq!(s, Vector::rectangular(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_max_difference() {
        let a = RotationMatrix3::identity();
        let b = RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((a.max_difference(&b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", RotationMatrix3::identity());
        assert!(s.starts_with("RotationMatrix3:"));
        assert_eq!(s.lines().count(), 4);
    }
}
