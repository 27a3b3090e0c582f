//! Store settings
//!
//! Persisted separately from the rotation state, under its own key.

use serde::{Deserialize, Serialize};

use crate::consts::{LEGACY_STORAGE_KEY, MAX_ROTATIONS, SETTINGS_KEY, STORAGE_KEY};
use crate::platform::KeyValueStore;

/// Rotation store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key holding the rotation state envelope
    pub storage_key: String,
    /// Key of the old single-rotation member list, imported when
    /// `storage_key` is empty
    pub legacy_key: String,
    /// Most rotations a user may create
    pub max_rotations: usize,
    /// Clamp out-of-range indices and drop blank members on load
    pub clamp_on_load: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            legacy_key: LEGACY_STORAGE_KEY.to_string(),
            max_rotations: MAX_ROTATIONS,
            clamp_on_load: true,
        }
    }
}

impl Settings {
    /// Effective rotation limit (never below one)
    pub fn rotation_limit(&self) -> usize {
        self.max_rotations.max(1)
    }

    /// Load settings from storage, defaults if absent or unreadable
    pub fn load(storage: &impl KeyValueStore) -> Self {
        match storage.get_item(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::error!("Failed to read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to storage
    pub fn save(&self, storage: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match storage.set_item(SETTINGS_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::error!("Failed to save settings: {}", e),
            },
            Err(e) => log::error!("Failed to serialize settings: {}", e),
        }
    }
}
