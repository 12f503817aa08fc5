//! Anchor quad definition and validation.

use nalgebra::Point3;
use wall_types::Quad;

use crate::error::{CanvasError, CanvasResult};

/// Triangle area below which the anchor quad is rejected as degenerate.
pub const MIN_ANCHOR_AREA: f64 = 1e-9;

/// Four corner anchors and a subdivision level.
///
/// Corners are ordered counter-clockwise when viewed from the front:
/// bottom-left, bottom-right, top-right, top-left. They may sit
/// anywhere in space; the quad does not need to be planar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorQuad {
    /// Corner anchors in winding order.
    pub corners: [Point3<f64>; 4],

    /// Cuts per edge. `n` produces an `(n + 1) x (n + 1)` vertex grid;
    /// `0` degenerates to the bare four-corner quad.
    pub subdivision: u32,
}

impl AnchorQuad {
    /// Create an anchor quad with no subdivision.
    #[must_use]
    pub const fn new(
        bottom_left: Point3<f64>,
        bottom_right: Point3<f64>,
        top_right: Point3<f64>,
        top_left: Point3<f64>,
    ) -> Self {
        Self {
            corners: [bottom_left, bottom_right, top_right, top_left],
            subdivision: 0,
        }
    }

    /// Set the subdivision level.
    #[must_use]
    pub const fn with_subdivision(mut self, subdivision: u32) -> Self {
        self.subdivision = subdivision;
        self
    }

    /// Effective grid divisions per edge. A subdivision of zero still
    /// yields one cell so the canvas is never empty.
    #[must_use]
    pub const fn divisions(&self) -> u32 {
        if self.subdivision == 0 {
            1
        } else {
            self.subdivision
        }
    }

    /// Check that the anchors span a usable surface.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::DegenerateQuad`] when either diagonal
    /// half of the quad collapses below [`MIN_ANCHOR_AREA`].
    pub fn validate(&self) -> CanvasResult<()> {
        let quad = Quad::new(
            self.corners[0],
            self.corners[1],
            self.corners[2],
            self.corners[3],
        );
        if quad.is_degenerate(MIN_ANCHOR_AREA) {
            let area = quad.first_triangle_area().min(quad.second_triangle_area());
            return Err(CanvasError::DegenerateQuad {
                area,
                min_area: MIN_ANCHOR_AREA,
            });
        }
        Ok(())
    }
}
