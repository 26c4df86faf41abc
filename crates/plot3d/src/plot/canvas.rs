//! Canvas abstraction for 3D drawing surfaces
//!
//! Defines the trait the plotting helpers draw through. This crate never
//! constructs or owns a canvas; the caller supplies one (a plotting
//! window, an SVG builder, a test recorder) and the helpers mutate it.
//! Canvas operations are synchronous in-process mutations; callers sharing
//! a canvas across threads must serialize access themselves.

use crate::foundation::math::{Axis, Vec3};
use crate::plot::style::{MarkerStyle, Rgba};

/// Stroke styling, passed through verbatim to polyline draws
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Rgba,
    /// Stroke width in canvas units
    pub width: f64,
    /// Optional marker drawn at each vertex
    pub marker: Option<MarkerStyle>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            width: 1.0,
            marker: None,
        }
    }
}

/// Fill styling, passed through verbatim to polygon draws
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    /// Fill color
    pub color: Rgba,
    /// Optional edge color; `None` draws no edges
    pub edge_color: Option<Rgba>,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Rgba::new(0.5, 0.5, 0.5, 0.5),
            edge_color: None,
        }
    }
}

/// A 3D drawing surface the plotting helpers mutate
///
/// Mirrors the operations of a typical 3D plotting axes object: per-axis
/// limits, equal-aspect mode, polylines, filled polygon collections, and
/// axis labels.
pub trait Canvas3 {
    /// Current `(min, max)` limits of the given axis
    fn axis_limits(&self, axis: Axis) -> (f64, f64);

    /// Set the `(min, max)` limits of the given axis
    fn set_axis_limits(&mut self, axis: Axis, min: f64, max: f64);

    /// Mark the canvas aspect as equal along all three axes
    fn set_equal_aspect(&mut self);

    /// Add a 3D polyline through `points`
    fn add_polyline(&mut self, points: &[Vec3], style: &StrokeStyle);

    /// Add a collection of filled 3D polygons
    fn add_polygons(&mut self, polygons: &[Vec<Vec3>], style: &FillStyle);

    /// Set the label of the given axis
    fn set_axis_label(&mut self, axis: Axis, label: &str);
}
