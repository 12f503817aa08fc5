//! Parametric brick-wall generation.
//!
//! A brick wall is a grid of individual box solids laid out on the
//! same per-cell offset rule as the curtain-wall tessellators, with an
//! optional half-pitch stagger on odd rows (running bond), optional
//! curvature onto an arc, and optional inclination shear. Column and
//! row counts are derived from the requested wall span and the brick
//! pitch, so bricks never protrude past the requested length.
//!
//! # Quick Start
//!
//! ```
//! use wall_brick::{generate_brick_wall, BrickParams};
//! use wall_types::MeshTopology;
//!
//! let params = BrickParams::new(5.0, 2.0).with_stagger(true);
//! let wall = generate_brick_wall(&params)?;
//!
//! // floor(5 / 0.75) = 6 columns of bricks
//! assert_eq!(wall.columns, 6);
//! assert_eq!(wall.mesh.face_count(), 6 * wall.brick_count as usize);
//! # Ok::<(), wall_brick::BrickError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod generate;
mod params;

pub use error::{BrickError, BrickResult};
pub use generate::{generate_brick_wall, BrickWall};
pub use params::BrickParams;
