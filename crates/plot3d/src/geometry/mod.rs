//! Geometric primitives and analytic-geometry operations
//!
//! Provides immutable [`Line`] and [`Plane`] value objects plus the
//! plane-equation solve the plotting helpers build on. Nothing here touches
//! a canvas; everything is a pure transformation over small vectors.

pub mod line;
pub mod plane;

pub use line::Line;
pub use plane::Plane;

use crate::foundation::math::{Axis, Vec3};
use thiserror::Error;

/// Errors produced by geometric constructions and solves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An input slice did not hold exactly the expected number of components
    #[error("expected a vector of {expected} components, got {got}")]
    VectorLength {
        /// Number of components required
        expected: usize,
        /// Number of components supplied
        got: usize,
    },

    /// A plane normal with zero length was supplied
    #[error("plane normal must have nonzero length")]
    ZeroNormal,

    /// A line direction with zero length was supplied
    #[error("line direction must have nonzero length")]
    ZeroDirection,

    /// The two supplied coordinate axes must be distinct
    #[error("coordinate axes must be distinct, got {0:?} twice")]
    DuplicateAxes(Axis),

    /// The plane is parallel to the axis being solved for
    #[error("plane is parallel to the {axis:?} axis, cannot solve for it")]
    ParallelToAxis {
        /// The axis whose component cannot be recovered
        axis: Axis,
    },
}

/// Normalize any slice of exactly 3 components into a 3x1 column vector
///
/// Accepts data laid out any way the caller holds it (row, column, or flat
/// buffer); the result is always the same column form, so downstream linear
/// algebra cannot hit shape mismatches.
pub fn vectorize(components: &[f64]) -> Result<Vec3, GeometryError> {
    if components.len() != 3 {
        return Err(GeometryError::VectorLength {
            expected: 3,
            got: components.len(),
        });
    }
    Ok(Vec3::new(components[0], components[1], components[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorize_preserves_component_order() {
        let column = vectorize(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(column, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vectorize_rejects_wrong_length() {
        assert_eq!(
            vectorize(&[1.0, 2.0]),
            Err(GeometryError::VectorLength { expected: 3, got: 2 })
        );
        assert_eq!(
            vectorize(&[1.0, 2.0, 3.0, 4.0]),
            Err(GeometryError::VectorLength { expected: 3, got: 4 })
        );
    }
}
