//! Iso-surface extraction collaborator seam
//!
//! The marching-cubes style extraction itself lives outside this crate;
//! [`plot_volume`](crate::plot::plot_volume) only needs something that
//! turns a scalar field and a level into a triangle mesh.

use crate::foundation::math::Vec3;
use ndarray::Array3;
use thiserror::Error;

/// Result type for surface extraction
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors reported by iso-surface extractors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// No part of the field crosses the requested level
    #[error("no iso-surface crosses level {level}")]
    NoSurface {
        /// The level that was requested
        level: f64,
    },

    /// Any other extractor-specific failure
    #[error("iso-surface extraction failed: {0}")]
    Failed(String),
}

/// A triangle mesh produced by an extractor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    /// Mesh vertices
    pub vertices: Vec<Vec3>,
    /// Vertex indices of each triangular face
    pub faces: Vec<[usize; 3]>,
}

/// Extracts the iso-surface of a 3D scalar field at a given level
///
/// Typically backed by a marching-cubes implementation; this crate treats
/// the extraction as opaque and only consumes its mesh output.
pub trait IsoSurfaceExtractor {
    /// Extract the surface where `field` equals `level`
    fn extract(&self, field: &Array3<f64>, level: f64) -> SurfaceResult<TriangleMesh>;
}
