//! Named preset storage with JSON persistence.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::PresetResult;
use crate::preset::ClothPreset;

/// A named collection of cloth presets.
///
/// Presets are keyed by name. The map is ordered, so listing and
/// serialization are deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetStore {
    presets: BTreeMap<String, ClothPreset>,
}

impl PresetStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            presets: BTreeMap::new(),
        }
    }

    /// Number of stored presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the store holds no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Store a preset under `name`.
    ///
    /// Saving under an existing name overwrites; the replaced preset is
    /// returned so callers can offer an undo.
    pub fn save(&mut self, name: impl Into<String>, preset: ClothPreset) -> Option<ClothPreset> {
        self.presets.insert(name.into(), preset)
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClothPreset> {
        self.presets.get(name)
    }

    /// Remove a preset by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<ClothPreset> {
        self.presets.remove(name)
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Load a store from a JSON file.
    ///
    /// A missing file is not an error: it yields an empty store, so a
    /// first run needs no setup step.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::PresetError`] when the file exists but cannot
    /// be read or parsed.
    pub fn load_path<P: AsRef<Path>>(path: P) -> PresetResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Preset file {} not found, starting empty", path.display());
            return Ok(Self::new());
        }

        let contents = fs::read_to_string(path)?;
        let presets: BTreeMap<String, ClothPreset> = serde_json::from_str(&contents)?;
        debug!("Loaded {} presets from {}", presets.len(), path.display());
        Ok(Self { presets })
    }

    /// Save the store to a JSON file, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::PresetError`] when the file cannot be written.
    pub fn save_path<P: AsRef<Path>>(&self, path: P) -> PresetResult<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(&self.presets)?;
        fs::write(path, contents)?;
        debug!("Saved {} presets to {}", self.presets.len(), path.display());
        Ok(())
    }
}
