//! Error types for nutation and vector calculations.
//!
//! This module provides a unified error type [`AstroError`] covering the two
//! fallible operations of the crate: parsing a vector representation name and
//! checked component access.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`UnsupportedRepresentation`](AstroError::UnsupportedRepresentation) | Unknown vector kind name | No |
//! | [`IndexOutOfBounds`](AstroError::IndexOutOfBounds) | Component index outside 0-2 | No |
//!
//! Neither describes a runtime condition worth retrying: each points at a
//! defect in the calling code. Numeric boundary cases such as division by
//! a zero scalar are not errors and never produce an [`AstroError`].
//!
//! # Usage
//!
//! ```
//! use celestial_nutation::{AstroError, VectorKind};
//!
//! let err = "cylindrical".parse::<VectorKind>().unwrap_err();
//! assert!(matches!(err, AstroError::UnsupportedRepresentation { .. }));
//! ```

use thiserror::Error;

/// Unified error type for the nutation kernel.
#[derive(Error, Debug)]
pub enum AstroError {
    /// A vector representation other than rectangular or spherical was requested.
    #[error("Unsupported vector representation: {requested}")]
    UnsupportedRepresentation { requested: String },

    /// Component index outside the valid range 0-2.
    #[error("Index error in {operation}: index {index} out of bounds (valid range: 0-2)")]
    IndexOutOfBounds { operation: String, index: usize },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`UnsupportedRepresentation`](Self::UnsupportedRepresentation) error.
    pub fn unsupported_representation(requested: &str) -> Self {
        Self::UnsupportedRepresentation {
            requested: requested.to_string(),
        }
    }

    /// Creates an [`IndexOutOfBounds`](Self::IndexOutOfBounds) error.
    pub fn index_out_of_bounds(operation: &str, index: usize) -> Self {
        Self::IndexOutOfBounds {
            operation: operation.to_string(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_representation_error() {
        let err = AstroError::unsupported_representation("cylindrical");
        assert_eq!(
            err.to_string(),
            "Unsupported vector representation: cylindrical"
        );
    }

    #[test]
    fn test_index_out_of_bounds_error() {
        let err = AstroError::index_out_of_bounds("Vector::get", 3);
        assert!(err.to_string().contains("Vector::get"));
        assert!(err.to_string().contains("index 3 out of bounds"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AstroError>();
        _assert_sync::<AstroError>();
    }
}
