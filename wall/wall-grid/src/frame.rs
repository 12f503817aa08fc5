//! Frame (mullion) tessellation.

// Member counts fit comfortably in usize
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point3;
use wall_solid::build_strut;
use wall_types::QuadMesh;

use crate::error::GridResult;
use crate::spec::GridSpec;
use crate::style::{transform_cell, WallStyle};

/// Tessellate the frame members of a curtain wall.
///
/// Emits one full-height vertical strut per column boundary
/// (`columns + 1` of them) and one full-width horizontal strut per row
/// boundary (`rows + 1`), so the grid is enclosed on every side. The
/// horizontal members pass through the vertical members' z-extent:
/// collinear struts overlap by exactly `member_thickness` at every
/// intersection. The overlap is deliberate interpenetration of two
/// solids, not shared vertices; the result is non-manifold by design.
///
/// `columns = 0` or `rows = 0` still emits the single closing member
/// on the axis in question and is not an error.
///
/// Member front faces lie in the panel plane (the transform's Y);
/// their depth extends behind it.
///
/// # Errors
///
/// Returns a [`crate::GridError`] when the spec or style fails
/// validation. No vertex is emitted on failure.
pub fn tessellate_frame(spec: &GridSpec, style: WallStyle) -> GridResult<QuadMesh> {
    spec.validate()?;
    style.validate()?;

    let thickness = spec.member_thickness;
    let depth = spec.member_depth;
    let width = spec.overall_width();
    let height = spec.overall_height();

    let member_count = (spec.columns + 2 + spec.rows) as usize;
    let mut mesh = QuadMesh::with_capacity(8 * member_count, 6 * member_count);

    // Vertical members, one per column boundary
    for col in 0..=spec.columns {
        let off = transform_cell(col, 0, spec, style);
        let origin = Point3::new(off.x, off.y - depth, off.z);
        mesh.merge(&build_strut(origin, thickness, height, depth)?);
    }

    // Horizontal members, one per row boundary
    for row in 0..=spec.rows {
        let off = transform_cell(0, row, spec, style);
        let origin = Point3::new(off.x, off.y - depth, off.z);
        mesh.merge(&build_strut(origin, width, thickness, depth)?);
    }

    Ok(mesh)
}
