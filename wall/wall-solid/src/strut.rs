//! Rectangular-prism ("strut") construction.

use nalgebra::Point3;
use wall_types::{QuadMesh, Vertex};

use crate::error::{SolidError, SolidResult};

/// Face-index table for the 8 local strut vertices.
///
/// Local vertex layout (origin at the minimum corner, `w` along +X,
/// `d` along +Y, `h` along +Z):
///
/// ```text
/// 0: (0, 0, 0)   1: (w, 0, 0)   2: (w, d, 0)   3: (0, d, 0)
/// 4: (0, 0, h)   5: (w, 0, h)   6: (w, d, h)   7: (0, d, h)
/// ```
///
/// Faces are bottom, top, front, right, back, left, each wound
/// counter-clockwise viewed from its outward normal. The table is
/// constant: origin and extents never change winding.
pub const STRUT_FACES: [[u32; 4]; 6] = [
    [0, 3, 2, 1], // bottom (-Z)
    [4, 5, 6, 7], // top (+Z)
    [0, 1, 5, 4], // front (-Y)
    [1, 2, 6, 5], // right (+X)
    [2, 3, 7, 6], // back (+Y)
    [3, 0, 4, 7], // left (-X)
];

/// Build an axis-aligned rectangular prism.
///
/// The prism extends `width` along +X, `height` along +Z, and `depth`
/// along +Y from the origin (its minimum corner). Callers that want a
/// member sitting *behind* a wall plane pass an origin already offset
/// by `-depth`.
///
/// # Errors
///
/// Returns [`SolidError::InvalidDimension`] when any extent is zero
/// or negative. Nothing is emitted on failure.
///
/// # Examples
///
/// ```
/// use wall_solid::{build_strut, STRUT_FACES};
/// use wall_types::{MeshTopology, Point3};
///
/// let brick = build_strut(Point3::origin(), 0.7, 0.35, 0.3)?;
/// assert_eq!(brick.vertex_count(), 8);
/// assert_eq!(brick.face_count(), 6);
/// assert_eq!(brick.faces, STRUT_FACES.to_vec());
/// # Ok::<(), wall_solid::SolidError>(())
/// ```
pub fn build_strut(
    origin: Point3<f64>,
    width: f64,
    height: f64,
    depth: f64,
) -> SolidResult<QuadMesh> {
    if width <= 0.0 {
        return Err(SolidError::invalid_dimension("width", width));
    }
    if height <= 0.0 {
        return Err(SolidError::invalid_dimension("height", height));
    }
    if depth <= 0.0 {
        return Err(SolidError::invalid_dimension("depth", depth));
    }

    let (x, y, z) = (origin.x, origin.y, origin.z);
    let (w, h, d) = (width, height, depth);

    let vertices = vec![
        Vertex::from_coords(x, y, z),
        Vertex::from_coords(x + w, y, z),
        Vertex::from_coords(x + w, y + d, z),
        Vertex::from_coords(x, y + d, z),
        Vertex::from_coords(x, y, z + h),
        Vertex::from_coords(x + w, y, z + h),
        Vertex::from_coords(x + w, y + d, z + h),
        Vertex::from_coords(x, y + d, z + h),
    ];

    Ok(QuadMesh::from_parts(vertices, STRUT_FACES.to_vec()))
}
