pub mod rotation_matrix;
pub mod vector;

pub use rotation_matrix::RotationMatrix3;
pub use vector::{Vector, VectorKind};
