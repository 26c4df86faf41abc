//! Equal-aspect axis scaling

use crate::foundation::math::{Axis, Vec3};
use crate::plot::canvas::Canvas3;
use crate::plot::PlotError;

/// Give all three axes the same range length around their own midpoints
///
/// The shared range length is the largest per-axis span of `points`; each
/// axis is set to its own data midpoint plus/minus half that span, then the
/// canvas is marked equal-aspect. Together these make one spatial unit span
/// the same screen distance on every axis. Callers with several point sets
/// concatenate them first.
pub fn set_equal_3d_axis<C: Canvas3 + ?Sized>(
    canvas: &mut C,
    points: &[Vec3],
) -> Result<(), PlotError> {
    let (min, max) = bounds(points).ok_or(PlotError::NoPoints)?;
    let radius = (max - min).max() / 2.0;
    for axis in Axis::ALL {
        let mid = (min[axis.index()] + max[axis.index()]) / 2.0;
        canvas.set_axis_limits(axis, mid - radius, mid + radius);
    }
    canvas.set_equal_aspect();
    Ok(())
}

/// Component-wise bounding box of a point set
fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    let mut min = first;
    let mut max = first;
    for point in &points[1..] {
        min = min.inf(point);
        max = max.sup(point);
    }
    Some((min, max))
}
