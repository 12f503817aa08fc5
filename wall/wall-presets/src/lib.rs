//! Named cloth preset storage.
//!
//! Canvas meshes from `wall-canvas` are typically handed to an external
//! cloth solver. This crate stores the solver settings as named presets
//! and persists them as a single JSON file.
//!
//! # Examples
//!
//! ```
//! use wall_presets::{ClothPreset, PresetStore};
//!
//! let mut store = PresetStore::new();
//! store.save("silk", ClothPreset { mass: 0.15, ..ClothPreset::default() });
//!
//! assert_eq!(store.get("silk").map(|p| p.mass), Some(0.15));
//! assert!(store.get("burlap").is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

mod error;
mod preset;
mod store;

pub use error::{PresetError, PresetResult};
pub use preset::ClothPreset;
pub use store::PresetStore;
