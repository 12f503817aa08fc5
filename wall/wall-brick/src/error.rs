//! Error types for brick-wall generation.

use thiserror::Error;
use wall_solid::SolidError;

/// Result type for brick-wall generation.
pub type BrickResult<T> = Result<T, BrickError>;

/// Errors that can occur during brick-wall generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BrickError {
    /// A requested dimension is zero or negative (or, for the mortar
    /// gap, negative).
    #[error("{name} must be positive, got {value}")]
    InvalidDimension {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Solid construction failed.
    #[error(transparent)]
    Solid(#[from] SolidError),
}

impl BrickError {
    /// Create an `InvalidDimension` error for the named parameter.
    #[must_use]
    pub const fn invalid_dimension(name: &'static str, value: f64) -> Self {
        Self::InvalidDimension { name, value }
    }
}
