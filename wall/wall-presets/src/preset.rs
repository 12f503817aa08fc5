//! Cloth simulation preset values.

use serde::{Deserialize, Serialize};

/// Solver settings for one cloth material.
///
/// Values feed an external cloth solver; this crate only stores them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClothPreset {
    /// Mass per vertex, in kilograms.
    pub mass: f64,

    /// Resistance to folding.
    pub bending_stiffness: f64,

    /// Velocity damping from air drag.
    pub air_damping: f64,

    /// Whether the cloth collides with itself.
    pub self_collision: bool,

    /// Internal pressure for closed surfaces; zero for open canvases.
    pub pressure: f64,
}

impl Default for ClothPreset {
    fn default() -> Self {
        Self {
            mass: 0.3,
            bending_stiffness: 0.5,
            air_damping: 1.0,
            self_collision: false,
            pressure: 0.0,
        }
    }
}
