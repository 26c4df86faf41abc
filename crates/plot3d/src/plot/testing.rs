//! Test doubles for the plotting helpers

use ndarray::Array3;

use crate::foundation::math::{Axis, Vec3};
use crate::plot::canvas::{Canvas3, FillStyle, StrokeStyle};
use crate::plot::surface::{IsoSurfaceExtractor, SurfaceError, SurfaceResult, TriangleMesh};

/// Canvas double that records every mutation for inspection
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Current (min, max) limits per axis, in x, y, z order
    pub limits: [(f64, f64); 3],
    /// Whether equal-aspect mode was requested
    pub equal_aspect: bool,
    /// Labels set per axis
    pub labels: [Option<String>; 3],
    /// Every polyline added, with its style
    pub polylines: Vec<(Vec<Vec3>, StrokeStyle)>,
    /// Every polygon collection added, with its style
    pub polygons: Vec<(Vec<Vec<Vec3>>, FillStyle)>,
}

impl RecordingCanvas {
    /// Canvas with preset axis limits
    pub fn with_limits(limits: [(f64, f64); 3]) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }
}

impl Canvas3 for RecordingCanvas {
    fn axis_limits(&self, axis: Axis) -> (f64, f64) {
        self.limits[axis.index()]
    }

    fn set_axis_limits(&mut self, axis: Axis, min: f64, max: f64) {
        self.limits[axis.index()] = (min, max);
    }

    fn set_equal_aspect(&mut self) {
        self.equal_aspect = true;
    }

    fn add_polyline(&mut self, points: &[Vec3], style: &StrokeStyle) {
        self.polylines.push((points.to_vec(), style.clone()));
    }

    fn add_polygons(&mut self, polygons: &[Vec<Vec3>], style: &FillStyle) {
        self.polygons.push((polygons.to_vec(), style.clone()));
    }

    fn set_axis_label(&mut self, axis: Axis, label: &str) {
        self.labels[axis.index()] = Some(label.to_string());
    }
}

/// Extractor double returning a fixed mesh regardless of input
pub struct FixedMeshExtractor(pub TriangleMesh);

impl IsoSurfaceExtractor for FixedMeshExtractor {
    fn extract(&self, _field: &Array3<f64>, _level: f64) -> SurfaceResult<TriangleMesh> {
        Ok(self.0.clone())
    }
}

/// Extractor double that reports no surface at any level
pub struct FailingExtractor;

impl IsoSurfaceExtractor for FailingExtractor {
    fn extract(&self, _field: &Array3<f64>, level: f64) -> SurfaceResult<TriangleMesh> {
        Err(SurfaceError::NoSurface { level })
    }
}
