//! Parametric wall and canvas mesh generation.
//!
//! This umbrella crate re-exports all wall-* crates, providing a
//! unified API for generating architectural quad meshes: curtain-wall
//! frames with glass panels, staggered brick walls, and four-point
//! anchored canvases for cloth simulation.
//!
//! # Quick Start
//!
//! ```
//! use wall::prelude::*;
//!
//! // A 4-column, 3-row curtain wall
//! let spec = GridSpec::new(4, 3, 1.0, 1.2, 0.1, 0.1);
//! let facade = wall::grid::generate_frame_and_panels(&spec, WallStyle::Flat)?;
//! assert_eq!(facade.panels.face_count(), 12);
//!
//! // A staggered brick wall bent along an arc
//! let params = BrickParams::new(5.0, 2.0)
//!     .with_style(WallStyle::Curved { radius: 8.0 });
//! let brick = wall::brick::generate_brick_wall(&params)?;
//! assert_eq!(brick.mesh.face_count(), 6 * brick.brick_count as usize);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `QuadMesh`, `Vertex`, `Quad`
//! - [`solid`] - Quad and box-strut primitives
//! - [`grid`] - Curtain-wall frames and glass panels
//! - [`brick`] - Staggered brick walls
//! - [`canvas`] - Four-point anchored canvas grids
//! - [`presets`] - Named cloth-preset storage
//!
//! # Feature Flags
//!
//! - `serde` - Serialization support for mesh types

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

/// Core data structures: `QuadMesh`, `Vertex`, `Quad`.
pub use wall_types as types;

/// Quad and box-strut primitives.
pub use wall_solid as solid;

/// Curtain-wall frames and glass panels.
pub use wall_grid as grid;

/// Staggered brick walls.
pub use wall_brick as brick;

/// Four-point anchored canvas grids.
pub use wall_canvas as canvas;

/// Named cloth-preset storage.
pub use wall_presets as presets;

/// Common imports for wall generation.
///
/// # Usage
///
/// ```
/// use wall::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use wall_types::{MeshTopology, Point3, Quad, QuadMesh, Vector3, Vertex};

    // Curtain walls
    pub use wall_grid::{generate_frame_and_panels, FacadeResult, GridSpec, WallStyle};

    // Brick walls
    pub use wall_brick::{generate_brick_wall, BrickParams, BrickWall};

    // Canvases
    pub use wall_canvas::{generate_anchor_canvas, AnchorQuad, Canvas};

    // Presets
    pub use wall_presets::{ClothPreset, PresetStore};
}
