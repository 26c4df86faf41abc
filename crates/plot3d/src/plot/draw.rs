//! Drawing helpers for lines, planes, and iso-surfaces
//!
//! Each helper computes every coordinate first and mutates the canvas
//! last, so a failing call leaves the canvas untouched.

use log::debug;
use ndarray::Array3;

use crate::foundation::math::{Axis, UnitVec3, Vec2, Vec3};
use crate::geometry::{GeometryError, Line, Plane};
use crate::plot::axis::set_equal_3d_axis;
use crate::plot::canvas::{Canvas3, FillStyle, StrokeStyle};
use crate::plot::surface::IsoSurfaceExtractor;
use crate::plot::PlotError;

/// Iso level used when a caller has no preference
pub const DEFAULT_ISO_LEVEL: f64 = 0.5;

/// Draw `line` as a segment guaranteed to cross the visible box
///
/// The segment extends from the line's point by half the current view-box
/// diagonal in both directions along the unit direction, so it reaches the
/// box boundary at any zoom. `style` passes through verbatim to the
/// canvas. The line's direction must have nonzero length.
pub fn plot_line<C: Canvas3 + ?Sized>(
    canvas: &mut C,
    line: &Line,
    style: &StrokeStyle,
) -> Result<(), PlotError> {
    let direction =
        UnitVec3::try_new(line.direction, 0.0).ok_or(GeometryError::ZeroDirection)?;

    let mut diagonal_sq = 0.0;
    for axis in Axis::ALL {
        let (lo, hi) = canvas.axis_limits(axis);
        diagonal_sq += (hi - lo).powi(2);
    }
    let radius = diagonal_sq.sqrt() / 2.0;

    let offset = direction.into_inner() * radius;
    let ends = [line.point - offset, line.point + offset];
    debug!("plot_line: segment radius {radius} around {:?}", line.point);
    canvas.add_polyline(&ends, style);
    Ok(())
}

/// Draw the part of `plane` visible in the canvas's current box
///
/// The corner coordinates are read from the canvas limits along the two
/// axes least aligned with the plane normal; the third coordinate of each
/// corner is solved from the plane equation along the most-aligned axis,
/// which keeps the divisor as far from zero as the normal allows. The four
/// corners form one counter-clockwise filled polygon.
pub fn plot_plane<C: Canvas3 + ?Sized>(
    canvas: &mut C,
    plane: &Plane,
    style: &FillStyle,
) -> Result<(), PlotError> {
    let normal = plane.normal.into_inner();
    let solved = dominant_axis(&normal);
    let ax_u = solved.next();
    let ax_v = solved.next().next();

    let (u0, u1) = canvas.axis_limits(ax_u);
    let (v0, v1) = canvas.axis_limits(ax_v);
    // 4 corners of the visible rectangle, counter-clockwise
    let corners = [
        Vec2::new(u0, v0),
        Vec2::new(u1, v0),
        Vec2::new(u1, v1),
        Vec2::new(u0, v1),
    ];
    let third = plane.third_coordinates(&corners, (ax_u, ax_v))?;

    let vertices: Vec<Vec3> = corners
        .iter()
        .zip(&third)
        .map(|(corner, &w)| {
            let mut vertex = Vec3::zeros();
            vertex[ax_u.index()] = corner.x;
            vertex[ax_v.index()] = corner.y;
            vertex[solved.index()] = w;
            vertex
        })
        .collect();

    debug!("plot_plane: solved along the {} axis", solved.label());
    canvas.add_polygons(&[vertices], style);
    Ok(())
}

/// Draw the iso-surface of a volumetric scalar field
///
/// Delegates surface extraction at `level` to the collaborator, draws the
/// resulting triangles as a filled collection, labels all three axes, and
/// refits the view to the surface vertices with
/// [`set_equal_3d_axis`]. See [`DEFAULT_ISO_LEVEL`] for a conventional
/// level when the field is normalized.
pub fn plot_volume<C, E>(
    canvas: &mut C,
    extractor: &E,
    field: &Array3<f64>,
    level: f64,
    style: &FillStyle,
) -> Result<(), PlotError>
where
    C: Canvas3 + ?Sized,
    E: IsoSurfaceExtractor + ?Sized,
{
    let mesh = extractor.extract(field, level)?;
    if mesh.vertices.is_empty() {
        return Err(PlotError::NoPoints);
    }

    let mut triangles = Vec::with_capacity(mesh.faces.len());
    for face in &mesh.faces {
        let mut polygon = Vec::with_capacity(3);
        for &index in face {
            let vertex = mesh.vertices.get(index).ok_or(PlotError::FaceIndex {
                index,
                vertices: mesh.vertices.len(),
            })?;
            polygon.push(*vertex);
        }
        triangles.push(polygon);
    }

    debug!(
        "plot_volume: {} triangles over {} vertices at level {level}",
        triangles.len(),
        mesh.vertices.len()
    );
    canvas.add_polygons(&triangles, style);
    for axis in Axis::ALL {
        canvas.set_axis_label(axis, axis.label());
    }
    set_equal_3d_axis(canvas, &mesh.vertices)
}

/// The axis with the largest-magnitude component of `normal`
///
/// Ties keep the earlier axis, matching argmax conventions.
fn dominant_axis(normal: &Vec3) -> Axis {
    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if normal[axis.index()].abs() > normal[best.index()].abs() {
            best = axis;
        }
    }
    best
}
