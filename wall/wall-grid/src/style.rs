//! Wall styles and the shared per-cell coordinate transform.

use nalgebra::Point3;

use crate::error::{GridError, GridResult};
use crate::spec::GridSpec;

/// Coordinate style applied to every grid cell before tessellation.
///
/// The same style drives frame members, infill panels, and bricks, so
/// the different meshes of one wall always agree on where a cell sits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallStyle {
    /// Flat wall in the XZ plane.
    #[default]
    Flat,

    /// Wall bent onto a constant-radius arc.
    ///
    /// Column offsets are mapped onto the arc preserving the laid-out
    /// span as arc length; Z is unchanged.
    Curved {
        /// Bend radius (must be positive).
        radius: f64,
    },

    /// Wall sheared by an inclination angle.
    ///
    /// Vertex Z gains `tan(angle) * x` once X is resolved.
    Angled {
        /// Inclination in degrees.
        angle_deg: f64,
    },

    /// Curved and angled combined: curve first, then shear.
    CurvedAngled {
        /// Bend radius (must be positive).
        radius: f64,
        /// Inclination in degrees.
        angle_deg: f64,
    },
}

impl WallStyle {
    /// The bend radius, if this style curves the wall.
    #[must_use]
    pub const fn radius(&self) -> Option<f64> {
        match self {
            Self::Curved { radius } | Self::CurvedAngled { radius, .. } => Some(*radius),
            Self::Flat | Self::Angled { .. } => None,
        }
    }

    /// The inclination angle in degrees, if this style shears the wall.
    #[must_use]
    pub const fn angle_deg(&self) -> Option<f64> {
        match self {
            Self::Angled { angle_deg } | Self::CurvedAngled { angle_deg, .. } => Some(*angle_deg),
            Self::Flat | Self::Curved { .. } => None,
        }
    }

    /// Check style parameters, failing fast before any vertex is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] when a curved style has
    /// a zero or negative radius.
    pub fn validate(&self) -> GridResult<()> {
        if let Some(radius) = self.radius() {
            if radius <= 0.0 {
                return Err(GridError::invalid_dimension("radius", radius));
            }
        }
        Ok(())
    }

    /// In-plane offset of column `col` out of `columns`.
    ///
    /// Flat styles return `(col * pitch, 0)`. Curved styles map the
    /// flat offset onto an arc of this style's radius:
    /// `angle = (col / columns) * span / radius` with
    /// `span = columns * pitch`, then
    /// `(x, y) = (radius * sin(angle), radius * cos(angle) - radius)`.
    /// With `columns = 0` only the closing member at the flat origin
    /// exists and no bending applies.
    #[must_use]
    pub fn xy_offset(&self, col: u32, columns: u32, pitch: f64) -> (f64, f64) {
        let flat_x = f64::from(col) * pitch;
        match self.radius() {
            Some(radius) if columns > 0 => {
                let span = f64::from(columns) * pitch;
                let angle = (f64::from(col) / f64::from(columns)) * (span / radius);
                (radius * angle.sin(), radius * angle.cos() - radius)
            }
            _ => (flat_x, 0.0),
        }
    }

    /// Z shear contribution for a resolved X offset.
    #[must_use]
    pub fn z_shear(&self, x: f64) -> f64 {
        self.angle_deg()
            .map_or(0.0, |angle_deg| angle_deg.to_radians().tan() * x)
    }
}

/// Offset of the cell origin at `(col, row)` under the given style.
///
/// This is the single source of truth shared by the frame tessellator,
/// the panel tessellator, and the brick generator: curve first (X and
/// Y from the column), then shear (Z from the resolved X).
///
/// # Examples
///
/// ```
/// use wall_grid::{transform_cell, GridSpec, WallStyle};
///
/// let spec = GridSpec::new(4, 4, 0.9, 0.9, 0.1, 0.1);
/// let off = transform_cell(2, 3, &spec, WallStyle::Flat);
/// assert_eq!(off.x, 2.0);
/// assert_eq!(off.z, 3.0);
/// ```
#[must_use]
pub fn transform_cell(col: u32, row: u32, spec: &GridSpec, style: WallStyle) -> Point3<f64> {
    let (x, y) = style.xy_offset(col, spec.columns, spec.pitch_x());
    let z = f64::from(row) * spec.pitch_z() + style.z_shear(x);
    Point3::new(x, y, z)
}
