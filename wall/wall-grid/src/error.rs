//! Error types for grid tessellation.

use thiserror::Error;
use wall_solid::SolidError;

/// Result type for grid tessellation.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during frame or panel tessellation.
///
/// All variants are detected eagerly, before any vertex is emitted; a
/// generator either returns a complete mesh or one of these, never a
/// partially built buffer.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GridError {
    /// A requested dimension is zero or negative.
    #[error("{name} must be positive, got {value}")]
    InvalidDimension {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The derived cell size is zero or negative after subtracting
    /// member thickness from the requested overall span.
    #[error(
        "derived cell size must be positive, got {cell_width} x {cell_height} \
         after subtracting member thickness"
    )]
    InvalidCellSize {
        /// Derived cell width.
        cell_width: f64,
        /// Derived cell height.
        cell_height: f64,
    },

    /// A cell count that must be at least 1 is zero.
    #[error("{name} must be at least 1, got {value}")]
    InvalidCount {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// Solid construction failed.
    #[error(transparent)]
    Solid(#[from] SolidError),
}

impl GridError {
    /// Create an `InvalidDimension` error for the named parameter.
    #[must_use]
    pub const fn invalid_dimension(name: &'static str, value: f64) -> Self {
        Self::InvalidDimension { name, value }
    }
}
