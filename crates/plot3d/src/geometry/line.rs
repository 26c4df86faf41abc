//! Infinite 3D lines

use super::{vectorize, GeometryError};
use crate::foundation::math::Vec3;

/// An infinite 3D line through a point along a direction
///
/// The direction need not be unit length; helpers that need a metric
/// extent normalize it at the point of use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point the line passes through
    pub point: Vec3,
    /// The direction of the line
    pub direction: Vec3,
}

impl Line {
    /// Creates a new line through `point` along `direction`
    pub fn new(point: impl Into<Vec3>, direction: impl Into<Vec3>) -> Self {
        Self {
            point: point.into(),
            direction: direction.into(),
        }
    }

    /// Creates a line from dynamically-sized component slices
    ///
    /// Both slices must hold exactly 3 components.
    pub fn from_slices(point: &[f64], direction: &[f64]) -> Result<Self, GeometryError> {
        Ok(Self {
            point: vectorize(point)?,
            direction: vectorize(direction)?,
        })
    }
}
