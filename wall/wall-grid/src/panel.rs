//! Infill panel tessellation.

// Cell counts fit comfortably in usize
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point3;
use wall_solid::build_quad;
use wall_types::QuadMesh;

use crate::error::GridResult;
use crate::spec::GridSpec;
use crate::style::{transform_cell, WallStyle};

/// Tessellate the infill panels of a curtain wall.
///
/// Emits one flat quad per interior cell - `columns * rows` faces, not
/// `(columns + 1) * (rows + 1)`; the closing row and column carry
/// members only. Each panel's corners come from the same
/// [`transform_cell`] offsets as the frame, shifted inward by one
/// member thickness, so panel edges register exactly against the inner
/// faces of the surrounding members.
///
/// # Errors
///
/// Returns a [`crate::GridError`] when the spec or style fails
/// validation. No vertex is emitted on failure.
pub fn tessellate_panels(spec: &GridSpec, style: WallStyle) -> GridResult<QuadMesh> {
    spec.validate()?;
    style.validate()?;

    let thickness = spec.member_thickness;
    let cell_count = (spec.columns * spec.rows) as usize;
    let mut mesh = QuadMesh::with_capacity(4 * cell_count, cell_count);

    for row in 0..spec.rows {
        for col in 0..spec.columns {
            let off = transform_cell(col, row, spec, style);
            let origin = Point3::new(off.x + thickness, off.y, off.z + thickness);
            mesh.merge(&build_quad(origin, spec.cell_width, spec.cell_height)?);
        }
    }

    Ok(mesh)
}
