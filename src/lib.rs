//! Rotation Keeper - a client-side rotation manager
//!
//! Core modules:
//! - `rotation`: Pure rotation state (members, head offsets, transitions, views)
//! - `persistence`: Versioned save format, migration, load-time repair
//! - `platform`: Key-value storage backends (LocalStorage on web, files natively)
//! - `store`: Write-through store tying state to storage
//! - `settings`: Persisted store configuration

pub mod persistence;
pub mod platform;
pub mod rotation;
pub mod settings;
pub mod store;

pub use platform::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use rotation::{Rotation, RotationState};
pub use settings::Settings;
pub use store::{RotationStore, StoreError};

/// Store configuration constants
pub mod consts {
    /// Most rotations a user may keep at once
    pub const MAX_ROTATIONS: usize = 5;

    /// Storage key of the rotation state envelope
    pub const STORAGE_KEY: &str = "rotationState";
    /// Storage key of the single-rotation member list
    pub const LEGACY_STORAGE_KEY: &str = "rotationMembers";
    /// Storage key of the persisted settings
    pub const SETTINGS_KEY: &str = "rotation_keeper_settings";

    /// Environment variable overriding the native data directory
    pub const DATA_DIR_ENV: &str = "ROTATION_KEEPER_DIR";
    /// Native data directory when the variable is unset
    pub const DEFAULT_DATA_DIR: &str = ".rotation-keeper";
}
