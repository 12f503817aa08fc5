//! Error types for canvas generation.

use thiserror::Error;

/// Errors produced while generating a canvas.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CanvasError {
    /// The four anchors do not span a usable quad: three or more are
    /// collinear or coincident, so interpolation would collapse.
    #[error("degenerate anchor quad: spanned area {area} is below {min_area}")]
    DegenerateQuad {
        /// Surface area actually spanned by the anchors.
        area: f64,
        /// Minimum area accepted.
        min_area: f64,
    },
}

/// Convenience alias for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
