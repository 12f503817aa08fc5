//! Canvas generation output.

use wall_types::{MeshTopology, QuadMesh};

/// A generated canvas mesh plus the indices a solver needs for pinning.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// The subdivided quad grid.
    pub mesh: QuadMesh,

    /// Indices of the four anchor corners in the mesh, in the same
    /// order as [`crate::AnchorQuad::corners`]. The positions at these
    /// indices are bit-identical to the input anchors.
    pub corner_indices: [u32; 4],

    /// Grid divisions per edge actually used.
    pub divisions: u32,
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Canvas: {} divisions, {} vertices, {} faces",
            self.divisions,
            self.mesh.vertex_count(),
            self.mesh.face_count()
        )
    }
}
