//! # plot3d
//!
//! Small helper routines for 3D geometric plotting: line and plane
//! primitives, closed-form plane-equation solving, and drawing helpers that
//! put lines, planes, and iso-surfaces onto a caller-supplied 3D canvas.
//!
//! ## Features
//!
//! - **Geometry**: immutable [`Line`] and [`Plane`] value objects with pure
//!   transformation methods (`translate`, `rotate`) and a plane-equation
//!   solve for a missing coordinate
//! - **Canvas abstraction**: the [`plot::Canvas3`] trait lets any 3D
//!   drawing surface consume the helpers; this crate never owns a canvas
//! - **Drawing helpers**: view-spanning lines, visible-box plane patches,
//!   and iso-surface meshes from volumetric data
//! - **Styling**: equal-aspect axis scaling, color palette sampling, and
//!   marker-style cycling
//!
//! ## Quick Start
//!
//! ```rust
//! use plot3d::prelude::*;
//!
//! # fn main() -> Result<(), GeometryError> {
//! // The plane z = 5
//! let plane = Plane::new([0.0, 0.0, 5.0], [0.0, 0.0, 1.0])?;
//!
//! // Supply x and y, solve the plane equation for z
//! let z = plane.third_coordinates(&[Vec2::new(1.0, 2.0)], (Axis::X, Axis::Y))?;
//! assert_eq!(z, vec![5.0]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod foundation;
pub mod geometry;
pub mod plot;

pub use geometry::{GeometryError, Line, Plane};
pub use plot::PlotError;

/// Common imports for crate users
pub mod prelude {
    pub use crate::foundation::math::{Axis, Mat3, UnitVec3, Vec2, Vec3};
    pub use crate::geometry::{vectorize, GeometryError, Line, Plane};
    pub use crate::plot::{
        get_colors, get_colors_from, get_marker_styles, paired, plot_line, plot_plane,
        plot_volume, set_equal_3d_axis, Canvas3, Colormap, FillStyle, IsoSurfaceExtractor,
        ListedColormap, MarkerStyle, PlotError, Rgba, StrokeStyle, SurfaceError, TriangleMesh,
        DEFAULT_ISO_LEVEL,
    };
}
