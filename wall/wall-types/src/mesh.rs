//! Indexed quad mesh.

use crate::{MeshTopology, Quad, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed quad mesh.
///
/// This is the primary mesh type for FacadeForge. It stores vertices
/// and faces separately, with faces referencing vertices by index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions
/// - `faces`: `Vec<[u32; 4]>` - Quad faces as vertex indices
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from the
/// outward normal, so downstream shading and physics consumers receive
/// correct normals by the right-hand rule.
///
/// # Example
///
/// ```
/// use wall_types::{QuadMesh, Vertex, MeshTopology};
///
/// let mut mesh = QuadMesh::new();
/// mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 1.0));
/// mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 1.0));
/// mesh.faces.push([0, 1, 2, 3]);
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Quad faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2, v3]` with counter-clockwise winding.
    pub faces: Vec<[u32; 4]>,
}

impl QuadMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use wall_types::{QuadMesh, Vertex, MeshTopology};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 1.0),
    ///     Vertex::from_coords(0.0, 0.0, 1.0),
    /// ];
    /// let faces = vec![[0, 1, 2, 3]];
    ///
    /// let mesh = QuadMesh::from_parts(vertices, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 4]>) -> Self {
        Self { vertices, faces }
    }

    /// Append a vertex and return its index.
    ///
    /// Indices are assigned in creation order and never reused within
    /// one generation pass.
    ///
    /// # Panics
    ///
    /// Does not panic in practice; meshes with more than `u32::MAX`
    /// vertices are unsupported by design.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Translate the whole mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Reserve capacity for additional vertices and faces.
    pub fn reserve(&mut self, additional_vertices: usize, additional_faces: usize) {
        self.vertices.reserve(additional_vertices);
        self.faces.reserve(additional_faces);
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices and faces are appended, with face
    /// indices offset past the existing vertices. Coincident geometry
    /// stays coincident; no deduplication is performed.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().copied());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
                face[3] + vertex_offset,
            ]);
        }
    }

    /// Check that every face index is within bounds of the vertex buffer.
    #[must_use]
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len() as u64;
        self.faces
            .iter()
            .all(|face| face.iter().all(|&i| u64::from(i) < n))
    }
}

impl MeshTopology for QuadMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 4]> {
        self.faces.get(index).copied()
    }

    fn quad(&self, face_index: usize) -> Option<Quad> {
        self.faces.get(face_index).map(|&[i0, i1, i2, i3]| {
            Quad::new(
                self.vertices[i0 as usize].position,
                self.vertices[i1 as usize].position,
                self.vertices[i2 as usize].position,
                self.vertices[i3 as usize].position,
            )
        })
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 4]> {
        self.faces.iter().copied()
    }

    fn quads(&self) -> impl Iterator<Item = Quad> {
        self.faces.iter().map(|&[i0, i1, i2, i3]| {
            Quad::new(
                self.vertices[i0 as usize].position,
                self.vertices[i1 as usize].position,
                self.vertices[i2 as usize].position,
                self.vertices[i3 as usize].position,
            )
        })
    }
}
