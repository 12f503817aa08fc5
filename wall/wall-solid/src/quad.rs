//! Planar quad construction.

use nalgebra::Point3;
use wall_types::{QuadMesh, Vertex};

use crate::error::{SolidError, SolidResult};

/// Build a single planar quad in the XZ plane.
///
/// The quad lies at the origin's Y with `width` along +X and `height`
/// along +Z. Winding is counter-clockwise viewed from -Y, so the
/// outward normal faces the viewer standing in front of the wall.
///
/// # Errors
///
/// Returns [`SolidError::InvalidDimension`] when `width` or `height`
/// is zero or negative. Nothing is emitted on failure.
///
/// # Examples
///
/// ```
/// use wall_solid::build_quad;
/// use wall_types::{MeshTopology, Point3};
///
/// let quad = build_quad(Point3::new(0.0, 0.0, 0.0), 1.0, 2.0)?;
/// assert_eq!(quad.vertex_count(), 4);
/// assert_eq!(quad.faces[0], [0, 1, 2, 3]);
/// # Ok::<(), wall_solid::SolidError>(())
/// ```
pub fn build_quad(origin: Point3<f64>, width: f64, height: f64) -> SolidResult<QuadMesh> {
    if width <= 0.0 {
        return Err(SolidError::invalid_dimension("width", width));
    }
    if height <= 0.0 {
        return Err(SolidError::invalid_dimension("height", height));
    }

    let (x, y, z) = (origin.x, origin.y, origin.z);

    let vertices = vec![
        Vertex::from_coords(x, y, z),
        Vertex::from_coords(x + width, y, z),
        Vertex::from_coords(x + width, y, z + height),
        Vertex::from_coords(x, y, z + height),
    ];

    Ok(QuadMesh::from_parts(vertices, vec![[0, 1, 2, 3]]))
}
