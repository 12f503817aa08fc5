//! Brick-wall parameters.

// Derived counts are clamped to u32 range by wall dimensions
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use wall_grid::WallStyle;

use crate::error::{BrickError, BrickResult};

/// Configuration parameters for brick-wall generation.
///
/// Use the builder methods to configure the wall.
///
/// # Examples
///
/// ```
/// use wall_brick::BrickParams;
/// use wall_grid::WallStyle;
///
/// let params = BrickParams::new(5.0, 2.0)
///     .with_brick(0.7, 0.35, 0.3)
///     .with_gap(0.05)
///     .with_stagger(true)
///     .with_style(WallStyle::Curved { radius: 3.0 });
///
/// assert_eq!(params.columns(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickParams {
    /// Requested wall length along the laying direction.
    pub wall_length: f64,

    /// Requested wall height.
    pub wall_height: f64,

    /// Brick width (along the wall).
    pub brick_width: f64,

    /// Brick height (one course).
    pub brick_height: f64,

    /// Brick depth (perpendicular to the wall plane).
    pub brick_depth: f64,

    /// Mortar gap between bricks. May be zero.
    pub gap: f64,

    /// Shift odd rows by half a pitch (running bond).
    pub stagger: bool,

    /// Coordinate style (flat, curved, angled).
    pub style: WallStyle,
}

impl Default for BrickParams {
    fn default() -> Self {
        Self {
            wall_length: 5.0,
            wall_height: 5.0,
            brick_width: 0.7,
            brick_height: 0.35,
            brick_depth: 0.3,
            gap: 0.05,
            stagger: true,
            style: WallStyle::Flat,
        }
    }
}

impl BrickParams {
    /// Create parameters for a wall of the given span with default bricks.
    #[must_use]
    pub fn new(wall_length: f64, wall_height: f64) -> Self {
        Self {
            wall_length,
            wall_height,
            ..Self::default()
        }
    }

    /// Set the brick dimensions.
    #[must_use]
    pub const fn with_brick(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.brick_width = width;
        self.brick_height = height;
        self.brick_depth = depth;
        self
    }

    /// Set the mortar gap.
    #[must_use]
    pub const fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Enable or disable running-bond stagger.
    #[must_use]
    pub const fn with_stagger(mut self, stagger: bool) -> Self {
        self.stagger = stagger;
        self
    }

    /// Set the coordinate style.
    #[must_use]
    pub const fn with_style(mut self, style: WallStyle) -> Self {
        self.style = style;
        self
    }

    /// Horizontal pitch: one brick plus one gap.
    #[must_use]
    pub fn pitch_x(&self) -> f64 {
        self.brick_width + self.gap
    }

    /// Vertical pitch: one course plus one gap.
    #[must_use]
    pub fn pitch_z(&self) -> f64 {
        self.brick_height + self.gap
    }

    /// Number of brick columns: `floor(wall_length / pitch)`.
    ///
    /// A wall shorter than one pitch holds zero bricks.
    #[must_use]
    pub fn columns(&self) -> u32 {
        (self.wall_length / self.pitch_x()).floor().max(0.0) as u32
    }

    /// Number of brick courses: `floor(wall_height / pitch)`.
    #[must_use]
    pub fn rows(&self) -> u32 {
        (self.wall_height / self.pitch_z()).floor().max(0.0) as u32
    }

    /// Check all dimensions, failing fast before any vertex is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`BrickError::InvalidDimension`] naming the first
    /// offending field: wall spans and brick extents must be positive,
    /// the gap non-negative, and a curved style's radius positive.
    pub fn validate(&self) -> BrickResult<()> {
        if self.wall_length <= 0.0 {
            return Err(BrickError::invalid_dimension(
                "wall_length",
                self.wall_length,
            ));
        }
        if self.wall_height <= 0.0 {
            return Err(BrickError::invalid_dimension(
                "wall_height",
                self.wall_height,
            ));
        }
        if self.brick_width <= 0.0 {
            return Err(BrickError::invalid_dimension(
                "brick_width",
                self.brick_width,
            ));
        }
        if self.brick_height <= 0.0 {
            return Err(BrickError::invalid_dimension(
                "brick_height",
                self.brick_height,
            ));
        }
        if self.brick_depth <= 0.0 {
            return Err(BrickError::invalid_dimension(
                "brick_depth",
                self.brick_depth,
            ));
        }
        if self.gap < 0.0 {
            return Err(BrickError::invalid_dimension("brick_gap", self.gap));
        }
        if let Some(radius) = self.style.radius() {
            if radius <= 0.0 {
                return Err(BrickError::invalid_dimension("wall_radius", radius));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_params_validate() {
        assert!(BrickParams::default().validate().is_ok());
    }

    #[test]
    fn columns_follow_floor_formula() {
        // floor(5 / (0.7 + 0.05)) = floor(6.66) = 6
        let params = BrickParams::new(5.0, 2.0);
        assert_eq!(params.columns(), 6);
        assert_relative_eq!(params.pitch_x(), 0.75, epsilon = 1e-12);

        // Exactly 4 pitches
        let params = BrickParams::new(3.0, 2.0);
        assert_eq!(params.columns(), 4);
    }

    #[test]
    fn rows_follow_floor_formula() {
        // floor(2 / 0.4) = 5
        let params = BrickParams::new(5.0, 2.0);
        assert_eq!(params.rows(), 5);
    }

    #[test]
    fn short_wall_has_zero_columns() {
        let params = BrickParams::new(0.5, 2.0);
        assert_eq!(params.columns(), 0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let params = BrickParams::new(4.0, 3.0)
            .with_brick(0.5, 0.25, 0.2)
            .with_gap(0.0)
            .with_stagger(false)
            .with_style(WallStyle::Angled { angle_deg: 10.0 });
        assert_relative_eq!(params.pitch_x(), 0.5, epsilon = 1e-12);
        assert!(!params.stagger);
        assert_eq!(params.columns(), 8);
    }

    #[test]
    fn validate_rejects_each_bad_dimension() {
        let cases: [(fn(&mut BrickParams), &str); 6] = [
            (|p| p.wall_length = 0.0, "wall_length"),
            (|p| p.wall_height = -1.0, "wall_height"),
            (|p| p.brick_width = 0.0, "brick_width"),
            (|p| p.brick_height = -0.1, "brick_height"),
            (|p| p.brick_depth = 0.0, "brick_depth"),
            (|p| p.gap = -0.01, "brick_gap"),
        ];
        for (mutate, name) in cases {
            let mut params = BrickParams::default();
            mutate(&mut params);
            let err = params.validate().unwrap_err();
            assert!(
                matches!(err, BrickError::InvalidDimension { name: got, .. } if got == name),
                "expected {name} to be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_nonpositive_radius() {
        let params = BrickParams::default().with_style(WallStyle::Curved { radius: -3.0 });
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            BrickError::InvalidDimension { name: "wall_radius", .. }
        ));
    }
}
