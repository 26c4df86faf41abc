//! Infinite 3D planes and the plane-equation solve

use super::{vectorize, GeometryError};
use crate::foundation::math::{Axis, Mat3, UnitVec3, Vec2, Vec3};

/// Normal components smaller than this count as parallel to the axis
const PARALLEL_EPSILON: f64 = 1e-12;

/// An infinite plane through a point, perpendicular to a unit normal
///
/// The normal is normalized at construction time, so every `Plane` in
/// existence satisfies the unit-normal invariant. Transformation methods
/// return new planes; a `Plane` is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane
    pub point: Vec3,
    /// The unit-length plane normal
    pub normal: UnitVec3,
}

impl Plane {
    /// Creates a plane through `point` perpendicular to `normal`
    ///
    /// The normal is stored normalized to unit length regardless of the
    /// input magnitude. A zero-length normal does not define a plane and
    /// is rejected.
    pub fn new(point: impl Into<Vec3>, normal: impl Into<Vec3>) -> Result<Self, GeometryError> {
        let normal = UnitVec3::try_new(normal.into(), 0.0).ok_or(GeometryError::ZeroNormal)?;
        Ok(Self {
            point: point.into(),
            normal,
        })
    }

    /// Creates a plane from dynamically-sized component slices
    ///
    /// Both slices must hold exactly 3 components.
    pub fn from_slices(point: &[f64], normal: &[f64]) -> Result<Self, GeometryError> {
        Self::new(vectorize(point)?, vectorize(normal)?)
    }

    /// Solve the plane equation for the coordinate missing from `axes`
    ///
    /// Each row of `coords` supplies the two components named by `axes`
    /// (first column is `axes.0`, second is `axes.1`). The plane equation
    /// `a*x + b*y + c*z + d = 0`, with `(a, b, c)` the unit normal and
    /// `d = -point . normal`, is solved for the remaining component; the
    /// result holds one value per input row, in input order.
    ///
    /// The two axes must be distinct, and the plane must not be parallel
    /// to the solved axis (a zero normal component there would divide by
    /// zero).
    pub fn third_coordinates(
        &self,
        coords: &[Vec2],
        axes: (Axis, Axis),
    ) -> Result<Vec<f64>, GeometryError> {
        let solved = Axis::complement(axes).ok_or(GeometryError::DuplicateAxes(axes.0))?;
        let normal = self.normal.into_inner();
        let denominator = normal[solved.index()];
        if denominator.abs() < PARALLEL_EPSILON {
            return Err(GeometryError::ParallelToAxis { axis: solved });
        }

        let d = -self.point.dot(&normal);
        let (na, nb) = (normal[axes.0.index()], normal[axes.1.index()]);
        Ok(coords
            .iter()
            .map(|c| (-d - c.x * na - c.y * nb) / denominator)
            .collect())
    }

    /// Returns a new plane translated by `offsets`
    ///
    /// The normal direction is unchanged; `self` is not mutated.
    pub fn translate(&self, offsets: impl Into<Vec3>) -> Plane {
        Plane {
            point: self.point + offsets.into(),
            normal: self.normal,
        }
    }

    /// Returns a new plane with point and normal left-multiplied by `rotation`
    ///
    /// `rotation` is expected to be orthonormal. Any other matrix still
    /// yields a unit-normal plane (the constructor re-normalizes), just a
    /// geometrically distorted one. Errors only when `rotation` maps the
    /// normal to zero length.
    pub fn rotate(&self, rotation: &Mat3) -> Result<Plane, GeometryError> {
        Plane::new(rotation * self.point, rotation * self.normal.into_inner())
    }
}
