//! Brick layout and mesh generation.

// Brick counts fit comfortably in usize
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point3;
use tracing::debug;
use wall_solid::build_strut;
use wall_types::{MeshTopology, QuadMesh};

use crate::error::BrickResult;
use crate::params::BrickParams;

/// Result of brick-wall generation.
#[derive(Debug, Clone, PartialEq)]
pub struct BrickWall {
    /// All bricks merged into one mesh (8 vertices and 6 faces per brick).
    pub mesh: QuadMesh,

    /// Number of brick columns laid.
    pub columns: u32,

    /// Number of brick courses laid.
    pub rows: u32,

    /// Total bricks emitted (`columns * rows`).
    pub brick_count: u32,
}

impl std::fmt::Display for BrickWall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Brick wall: {} columns x {} courses, {} bricks",
            self.columns, self.rows, self.brick_count
        )
    }
}

/// Generate a brick wall.
///
/// Bricks are laid row by row on the shared style offset rule: the
/// column's (x, y) comes from [`wall_grid::WallStyle::xy_offset`],
/// the stagger half-pitch (odd rows only) is added to x after the arc
/// mapping, and the inclination shear is applied to the staggered x.
/// A wall shorter than one brick pitch on either axis yields an empty
/// mesh, not an error.
///
/// # Errors
///
/// Returns a [`crate::BrickError`] when a parameter fails validation.
/// No vertex is emitted on failure.
///
/// # Examples
///
/// ```
/// use wall_brick::{generate_brick_wall, BrickParams};
/// use wall_types::MeshTopology;
///
/// let wall = generate_brick_wall(&BrickParams::new(5.0, 2.0))?;
/// assert_eq!(wall.brick_count, wall.columns * wall.rows);
/// assert_eq!(wall.mesh.vertex_count(), 8 * wall.brick_count as usize);
/// # Ok::<(), wall_brick::BrickError>(())
/// ```
pub fn generate_brick_wall(params: &BrickParams) -> BrickResult<BrickWall> {
    params.validate()?;

    let columns = params.columns();
    let rows = params.rows();
    let brick_count = columns * rows;
    let pitch_x = params.pitch_x();
    let pitch_z = params.pitch_z();

    let mut mesh = QuadMesh::with_capacity(8 * brick_count as usize, 6 * brick_count as usize);

    for row in 0..rows {
        let staggered = params.stagger && row % 2 == 1;
        for col in 0..columns {
            let (mut x, y) = params.style.xy_offset(col, columns, pitch_x);
            if staggered {
                x += pitch_x / 2.0;
            }
            let z = f64::from(row) * pitch_z + params.style.z_shear(x);

            let brick = build_strut(
                Point3::new(x, y, z),
                params.brick_width,
                params.brick_height,
                params.brick_depth,
            )?;
            mesh.merge(&brick);
        }
    }

    debug!(
        "Generated brick wall: {} columns x {} courses, {} faces",
        columns,
        rows,
        mesh.face_count()
    );

    Ok(BrickWall {
        mesh,
        columns,
        rows,
        brick_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrickError;
    use approx::assert_relative_eq;
    use wall_grid::WallStyle;

    #[test]
    fn scenario_column_count_from_span() {
        // floor(5 / (0.7 + 0.05)) = 6, verified via the formula
        let params = BrickParams::new(5.0, 2.0);
        let wall = generate_brick_wall(&params).unwrap();
        let expected = (params.wall_length / (params.brick_width + params.gap)).floor();
        assert_eq!(f64::from(wall.columns), expected);
        assert_eq!(wall.columns, 6);
    }

    #[test]
    fn six_faces_per_brick() {
        let wall = generate_brick_wall(&BrickParams::new(3.0, 1.5)).unwrap();
        assert_eq!(wall.mesh.face_count(), 6 * wall.brick_count as usize);
        assert_eq!(wall.mesh.vertex_count(), 8 * wall.brick_count as usize);
        assert!(wall.mesh.indices_in_bounds());
    }

    #[test]
    fn stagger_shifts_odd_rows_by_half_pitch() {
        let params = BrickParams::new(3.0, 1.0).with_stagger(true);
        let wall = generate_brick_wall(&params).unwrap();
        assert!(wall.rows >= 2, "need at least two courses for this test");

        let bricks_per_row = wall.columns as usize;
        let row0_first = wall.mesh.vertices[0].position;
        let row1_first = wall.mesh.vertices[bricks_per_row * 8].position;
        assert_relative_eq!(
            row1_first.x - row0_first.x,
            params.pitch_x() / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn unstaggered_rows_align() {
        let params = BrickParams::new(3.0, 1.0).with_stagger(false);
        let wall = generate_brick_wall(&params).unwrap();
        let bricks_per_row = wall.columns as usize;
        let row0_first = wall.mesh.vertices[0].position;
        let row1_first = wall.mesh.vertices[bricks_per_row * 8].position;
        assert_relative_eq!(row1_first.x, row0_first.x, epsilon = 1e-12);
    }

    #[test]
    fn curved_bricks_land_on_arc() {
        let radius = 4.0;
        let params = BrickParams::new(5.0, 0.5)
            .with_stagger(false)
            .with_style(WallStyle::Curved { radius });
        let wall = generate_brick_wall(&params).unwrap();

        for col in 0..wall.columns as usize {
            let origin = wall.mesh.vertices[col * 8].position;
            let dist = (origin.x.powi(2) + (origin.y + radius).powi(2)).sqrt();
            assert_relative_eq!(dist, radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn angled_bricks_climb_with_x() {
        let params = BrickParams::new(3.0, 0.5)
            .with_stagger(false)
            .with_style(WallStyle::Angled { angle_deg: 20.0 });
        let wall = generate_brick_wall(&params).unwrap();

        let shear = 20.0_f64.to_radians().tan();
        for col in 0..wall.columns as usize {
            let origin = wall.mesh.vertices[col * 8].position;
            assert_relative_eq!(origin.z, shear * origin.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn short_wall_yields_empty_mesh() {
        let wall = generate_brick_wall(&BrickParams::new(0.5, 2.0)).unwrap();
        assert_eq!(wall.brick_count, 0);
        assert!(wall.mesh.is_empty());
    }

    #[test]
    fn invalid_dimensions_yield_no_mesh() {
        let mut params = BrickParams::default();
        params.brick_width = -0.7;
        let err = generate_brick_wall(&params).unwrap_err();
        assert!(matches!(
            err,
            BrickError::InvalidDimension { name: "brick_width", .. }
        ));
    }

    #[test]
    fn regeneration_is_idempotent() {
        let params = BrickParams::new(4.0, 2.0)
            .with_style(WallStyle::CurvedAngled {
                radius: 5.0,
                angle_deg: 12.0,
            });
        let a = generate_brick_wall(&params).unwrap();
        let b = generate_brick_wall(&params).unwrap();
        assert_eq!(a, b);
    }
}
