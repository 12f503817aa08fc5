//! Core quad-mesh types for FacadeForge.
//!
//! This crate provides the foundational types for parametric wall
//! generation:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`QuadMesh`] - A quad-faced mesh with indexed vertices
//! - [`Quad`] - A concrete quad with resolved corner positions
//! - [`lerp`] / [`bilerp`] - Interpolation helpers used by every generator
//!
//! # Host-agnostic
//!
//! This crate has **zero host dependencies**. Generators hand finished
//! vertex/face buffers to whatever scene layer consumes them; nothing
//! here touches rendering, materials, or physics.
//!
//! # Units
//!
//! The library is unit-agnostic. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! Walls lie in the XZ plane. Face winding is **counter-clockwise
//! (CCW) when viewed from the outward normal**.
//!
//! # Example
//!
//! ```
//! use wall_types::{QuadMesh, Vertex, MeshTopology};
//!
//! let mut mesh = QuadMesh::new();
//! mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 1.0));
//! mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 1.0));
//! mesh.faces.push([0, 1, 2, 3]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod interp;
mod mesh;
mod quad;
mod traits;
mod vertex;

pub use interp::{bilerp, lerp};
pub use mesh::QuadMesh;
pub use quad::Quad;
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
