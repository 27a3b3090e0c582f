//! Write-through rotation store
//!
//! Owns the current `RotationState` snapshot and a storage backend. Every
//! mutation that changes the snapshot is saved immediately; mutations that
//! change nothing (blank member, full collection, bad index) skip the write.

use thiserror::Error;

use crate::persistence::{self, migration};
use crate::platform::{KeyValueStore, StorageError};
use crate::rotation::RotationState;
use crate::settings::Settings;

/// Failure to persist state
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to serialize rotation state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Rotation state plus its backing storage
pub struct RotationStore<S: KeyValueStore> {
    storage: S,
    settings: Settings,
    state: RotationState,
}

impl<S: KeyValueStore> RotationStore<S> {
    /// Open with settings read from the same storage
    pub fn open(storage: S) -> Self {
        let settings = Settings::load(&storage);
        Self::load(storage, settings)
    }

    /// Load state from storage
    ///
    /// Never fails: missing or unreadable data yields an empty state.
    pub fn load(storage: S, settings: Settings) -> Self {
        let mut state = read_state(&storage, &settings);
        if settings.clamp_on_load {
            persistence::repair(&mut state);
        }
        let state = state.limited_to(settings.rotation_limit());
        log::info!(
            "Loaded {} rotations (active {})",
            state.len(),
            state.active_rotation_index()
        );
        Self {
            storage,
            settings,
            state,
        }
    }

    /// Serialize the full state and write it out
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = persistence::encode(&self.state)?;
        self.storage.set_item(&self.settings.storage_key, &json)?;
        log::debug!("Rotation state saved ({} rotations)", self.state.len());
        Ok(())
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Append an empty rotation and make it active
    pub fn add_rotation(&mut self) -> &RotationState {
        self.apply(RotationState::add_rotation)
    }

    /// Append a member to a rotation
    pub fn add_member(&mut self, member: &str, rotation_index: usize) -> &RotationState {
        self.apply(|s| s.add_member(member, rotation_index))
    }

    /// Remove a member (by insertion-order index) from a rotation
    pub fn remove_member(&mut self, member_index: usize, rotation_index: usize) -> &RotationState {
        self.apply(|s| s.remove_member(member_index, rotation_index))
    }

    pub fn rotate_forward(&mut self, rotation_index: usize) -> &RotationState {
        self.apply(|s| s.rotate_forward(rotation_index))
    }

    pub fn rotate_backward(&mut self, rotation_index: usize) -> &RotationState {
        self.apply(|s| s.rotate_backward(rotation_index))
    }

    pub fn set_active_rotation(&mut self, index: usize) -> &RotationState {
        self.apply(|s| s.set_active_rotation(index))
    }

    /// Delete the stored data, then drop all rotations
    ///
    /// If storage refuses the delete, the in-memory state is left as is.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(&self.settings.storage_key)?;
        self.storage.remove_item(&self.settings.legacy_key)?;
        self.state = RotationState::with_max_rotations(self.settings.rotation_limit());
        log::info!("Rotation state cleared");
        Ok(())
    }

    /// Swap in the next snapshot and write through if it differs
    fn apply(&mut self, transition: impl FnOnce(&RotationState) -> RotationState) -> &RotationState {
        let next = transition(&self.state);
        if next != self.state {
            self.state = next;
            if let Err(e) = self.save() {
                log::error!("Failed to save rotation state: {}", e);
            }
        }
        &self.state
    }
}

/// Stored envelope, else the single-rotation key, else empty
fn read_state(storage: &impl KeyValueStore, settings: &Settings) -> RotationState {
    match storage.get_item(&settings.storage_key) {
        Ok(Some(json)) => {
            return persistence::decode_state(&json).unwrap_or_default();
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to read rotation state: {}", e);
            return RotationState::new();
        }
    }

    match storage.get_item(&settings.legacy_key) {
        Ok(Some(json)) => migration::import_single_rotation(&json).unwrap_or_default(),
        Ok(None) => {
            log::info!("No rotation state found, starting fresh");
            RotationState::new()
        }
        Err(e) => {
            log::error!("Failed to read single-rotation data: {}", e);
            RotationState::new()
        }
    }
}
