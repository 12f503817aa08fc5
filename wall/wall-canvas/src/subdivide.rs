//! Grid subdivision between four anchors.

// Grid dimensions fit in usize on every supported target
#![allow(clippy::cast_possible_truncation)]

use tracing::debug;
use wall_types::{bilerp, MeshTopology, QuadMesh, Vertex};

use crate::anchor::AnchorQuad;
use crate::error::CanvasResult;
use crate::result::Canvas;

/// Generate a canvas mesh spanning the anchors.
///
/// With subdivision `n >= 1` the mesh is an `(n + 1) x (n + 1)`
/// row-major vertex grid with `n * n` quad faces; interior vertices
/// come from bilinear interpolation. Subdivision `0` emits the bare
/// anchor quad (four vertices, one face).
///
/// In both cases [`Canvas::corner_indices`] points at vertices whose
/// positions equal the input anchors bit-for-bit.
///
/// # Errors
///
/// Returns a [`crate::CanvasError`] when the anchors are degenerate.
/// No vertex is emitted on failure.
pub fn generate_anchor_canvas(anchors: &AnchorQuad) -> CanvasResult<Canvas> {
    anchors.validate()?;

    let [bl, br, tr, tl] = anchors.corners;

    if anchors.subdivision == 0 {
        let mut mesh = QuadMesh::with_capacity(4, 1);
        let i0 = mesh.push_vertex(Vertex::new(bl));
        let i1 = mesh.push_vertex(Vertex::new(br));
        let i2 = mesh.push_vertex(Vertex::new(tr));
        let i3 = mesh.push_vertex(Vertex::new(tl));
        mesh.faces.push([i0, i1, i2, i3]);

        debug!("Generated canvas: bare anchor quad");
        return Ok(Canvas {
            mesh,
            corner_indices: [i0, i1, i2, i3],
            divisions: anchors.divisions(),
        });
    }

    let d = anchors.divisions();
    let side = d as usize + 1;
    let mut mesh = QuadMesh::with_capacity(side * side, (d as usize) * (d as usize));

    // Row-major, bottom row first: vertex (i, j) lands at j * side + i.
    for j in 0..=d {
        let v = f64::from(j) / f64::from(d);
        for i in 0..=d {
            let u = f64::from(i) / f64::from(d);
            mesh.push_vertex(Vertex::new(bilerp(&bl, &br, &tr, &tl, u, v)));
        }
    }

    for j in 0..d {
        for i in 0..d {
            let idx = j * (d + 1) + i;
            mesh.faces.push([idx, idx + 1, idx + d + 2, idx + d + 1]);
        }
    }

    let corner_indices = [0, d, (d + 1) * (d + 1) - 1, d * (d + 1)];

    debug!(
        "Generated canvas: {} divisions, {} vertices, {} faces",
        d,
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(Canvas {
        mesh,
        corner_indices,
        divisions: d,
    })
}
