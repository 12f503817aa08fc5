//! Traits for mesh types.

use crate::{Quad, Vertex};

/// Trait for types that provide quad-mesh topology information.
///
/// This trait defines the minimal interface for a mesh structure,
/// allowing algorithms to work with different mesh representations.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (quads).
    fn face_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Get a vertex by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a face by index.
    ///
    /// Returns `None` if the index is out of bounds.
    /// The returned array contains vertex indices.
    fn face(&self, index: usize) -> Option<[u32; 4]>;

    /// Get a quad by face index with resolved corner positions.
    ///
    /// Returns `None` if the face index is out of bounds.
    fn quad(&self, face_index: usize) -> Option<Quad>;

    /// Iterate over all vertices.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Iterate over all faces as vertex index quadruples.
    fn faces(&self) -> impl Iterator<Item = [u32; 4]>;

    /// Iterate over all quads with resolved corner positions.
    fn quads(&self) -> impl Iterator<Item = Quad>;
}
