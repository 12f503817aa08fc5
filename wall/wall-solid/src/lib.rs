//! Planar quad and rectangular-prism ("strut") builders.
//!
//! Every wall generator reduces to these two primitives: a flat
//! infill quad in the XZ plane, and an axis-aligned rectangular prism
//! used for mullions, rails, and bricks. Both are built with a fixed
//! face-index topology so winding never depends on the input
//! dimensions.
//!
//! # Examples
//!
//! ```
//! use wall_solid::{build_quad, build_strut};
//! use wall_types::{MeshTopology, Point3};
//!
//! // A 2 x 1 glazing panel at the origin
//! let panel = build_quad(Point3::origin(), 2.0, 1.0)?;
//! assert_eq!(panel.face_count(), 1);
//!
//! // A 0.1-thick, 3-tall, 0.1-deep mullion
//! let mullion = build_strut(Point3::origin(), 0.1, 3.0, 0.1)?;
//! assert_eq!(mullion.vertex_count(), 8);
//! assert_eq!(mullion.face_count(), 6);
//! # Ok::<(), wall_solid::SolidError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod quad;
mod strut;

pub use error::{SolidError, SolidResult};
pub use quad::build_quad;
pub use strut::{build_strut, STRUT_FACES};
