//! Math types and axis utilities
//!
//! Provides the fundamental math types for 3D analytic geometry. All types
//! are `f64`-valued; nalgebra column vectors are 3x1 matrices, so "column
//! vector" invariants hold by construction.

pub use nalgebra::{Matrix3, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// 3D vector type (a 3x1 column)
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// Unit-length 3D vector type
pub type UnitVec3 = Unit<Vector3<f64>>;

/// A coordinate axis in 3D space
///
/// Replaces raw `{0, 1, 2}` axis indices so an out-of-range axis is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (component index 0)
    X,
    /// The y axis (component index 1)
    Y,
    /// The z axis (component index 2)
    Z,
}

impl Axis {
    /// All three axes in canonical x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a 3x1 column
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis name used for canvas labels
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// The next axis in cyclic x -> y -> z -> x order
    pub fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// The one axis not contained in `pair`
    ///
    /// Returns `None` when the pair names the same axis twice.
    pub fn complement(pair: (Axis, Axis)) -> Option<Axis> {
        if pair.0 == pair.1 {
            return None;
        }
        Axis::ALL
            .into_iter()
            .find(|axis| *axis != pair.0 && *axis != pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indices_are_canonical() {
        for (expected, axis) in Axis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), expected);
        }
    }

    #[test]
    fn test_axis_complement() {
        assert_eq!(Axis::complement((Axis::X, Axis::Y)), Some(Axis::Z));
        assert_eq!(Axis::complement((Axis::Y, Axis::X)), Some(Axis::Z));
        assert_eq!(Axis::complement((Axis::Y, Axis::Z)), Some(Axis::X));
        assert_eq!(Axis::complement((Axis::Z, Axis::X)), Some(Axis::Y));
    }

    #[test]
    fn test_axis_complement_rejects_degenerate_pair() {
        assert_eq!(Axis::complement((Axis::Y, Axis::Y)), None);
    }

    #[test]
    fn test_axis_cycle() {
        assert_eq!(Axis::X.next(), Axis::Y);
        assert_eq!(Axis::Y.next(), Axis::Z);
        assert_eq!(Axis::Z.next(), Axis::X);
    }
}
