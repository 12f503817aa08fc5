//! Four-point anchored canvas generation.
//!
//! A canvas is a subdivided quad grid stretched between four corner
//! anchors in arbitrary 3D positions. Interior vertices are placed by
//! bilinear interpolation of the anchors, and the four corner vertices
//! reproduce the anchor positions bit-exactly so they can be pinned by
//! downstream cloth solvers.
//!
//! # Examples
//!
//! ```
//! use nalgebra::Point3;
//! use wall_canvas::{generate_anchor_canvas, AnchorQuad};
//! use wall_types::MeshTopology;
//!
//! let anchors = AnchorQuad::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 3.0),
//!     Point3::new(0.0, 0.0, 3.0),
//! )
//! .with_subdivision(8);
//!
//! let canvas = generate_anchor_canvas(&anchors)?;
//! assert_eq!(canvas.mesh.vertex_count(), 81);
//! assert_eq!(canvas.mesh.face_count(), 64);
//! # Ok::<(), wall_canvas::CanvasError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

mod anchor;
mod error;
mod result;
mod subdivide;

pub use anchor::AnchorQuad;
pub use error::{CanvasError, CanvasResult};
pub use result::Canvas;
pub use subdivide::generate_anchor_canvas;
