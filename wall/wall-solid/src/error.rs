//! Error types for solid construction.

use thiserror::Error;

/// Result type for solid construction.
pub type SolidResult<T> = Result<T, SolidError>;

/// Errors that can occur while building solids.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolidError {
    /// A requested extent is zero or negative.
    #[error("{name} must be positive, got {value}")]
    InvalidDimension {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl SolidError {
    /// Create an `InvalidDimension` error for the named parameter.
    #[must_use]
    pub const fn invalid_dimension(name: &'static str, value: f64) -> Self {
        Self::InvalidDimension { name, value }
    }
}
