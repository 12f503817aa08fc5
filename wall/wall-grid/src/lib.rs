//! Curtain-wall frame and panel tessellation.
//!
//! A curtain wall is a grid of `columns x rows` glazing cells
//! separated and enclosed by prismatic frame members (mullions). This
//! crate tessellates the two meshes a host composites - the frame and
//! the infill panels - from a [`GridSpec`] and a [`WallStyle`].
//!
//! Frame and panel geometry are derived from one per-cell offset rule,
//! [`transform_cell`], so panel edges always register flush against
//! the inner faces of the surrounding members. Implementing the offset
//! twice is the classic seam-gap bug this crate's layout exists to
//! prevent.
//!
//! # Quick Start
//!
//! ```
//! use wall_grid::{generate_frame_and_panels, GridSpec, WallStyle};
//! use wall_types::MeshTopology;
//!
//! // 5 columns x 4 rows of 1 m panels behind 0.1 m mullions
//! let spec = GridSpec::new(5, 4, 1.0, 1.0, 0.1, 0.1);
//! let facade = generate_frame_and_panels(&spec, WallStyle::Flat)?;
//!
//! assert_eq!(facade.panels.face_count(), 20);
//! assert_eq!(facade.frame.face_count(), 6 * (6 + 5));
//! # Ok::<(), wall_grid::GridError>(())
//! ```
//!
//! # Styles
//!
//! [`WallStyle::Curved`] bends the wall plane onto a constant-radius
//! arc; [`WallStyle::Angled`] shears vertex Z as a function of X;
//! [`WallStyle::CurvedAngled`] composes both (curve, then shear).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod frame;
mod generate;
mod panel;
mod spec;
mod style;

pub use error::{GridError, GridResult};
pub use frame::tessellate_frame;
pub use generate::{generate_frame_and_panels, FacadeResult};
pub use panel::tessellate_panels;
pub use spec::GridSpec;
pub use style::{transform_cell, WallStyle};
