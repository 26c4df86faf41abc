//! Plotting helpers that draw geometry onto a caller-supplied canvas
//!
//! The helpers consume [`crate::geometry`] values plus a [`Canvas3`]
//! implementation and mutate the canvas: adding polylines and polygon
//! collections, fitting axis limits, labelling axes. All computation runs
//! before the first canvas mutation, so a failing call draws nothing.

pub mod axis;
pub mod canvas;
pub mod draw;
pub mod style;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use axis::set_equal_3d_axis;
pub use canvas::{Canvas3, FillStyle, StrokeStyle};
pub use draw::{plot_line, plot_plane, plot_volume, DEFAULT_ISO_LEVEL};
pub use style::{
    get_colors, get_colors_from, get_marker_styles, paired, Colormap, ListedColormap,
    MarkerStyle, Rgba,
};
pub use surface::{IsoSurfaceExtractor, SurfaceError, SurfaceResult, TriangleMesh};

use crate::geometry::GeometryError;
use thiserror::Error;

/// Errors produced by the plotting helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// An empty point set cannot define axis limits
    #[error("cannot fit axis limits to an empty point set")]
    NoPoints,

    /// A face referenced a vertex index past the end of the vertex list
    #[error("face index {index} out of range for {vertices} vertices")]
    FaceIndex {
        /// The offending vertex index
        index: usize,
        /// Number of vertices in the mesh
        vertices: usize,
    },

    /// An underlying geometric construction or solve failed
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The iso-surface extractor failed
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}
