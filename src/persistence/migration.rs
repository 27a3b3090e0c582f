//! Upgrades for older stored shapes
//!
//! - Version 1 envelopes: each rotation is a bare member array, physically
//!   reordered so the front member is first. It becomes head 0.
//! - The single-rotation layout: one JSON array of members under its own
//!   key, with no active index. It becomes one rotation, active.

use super::envelope::{Envelope, FORMAT_VERSION, StoredRotation};
use crate::rotation::{Rotation, RotationState};

/// Turn a decoded envelope of any version into state (unvalidated)
pub fn migrate(envelope: Envelope) -> RotationState {
    if envelope.version < FORMAT_VERSION {
        log::info!(
            "Migrating rotation state from version {} to {}",
            envelope.version,
            FORMAT_VERSION
        );
    } else if envelope.version > FORMAT_VERSION {
        log::warn!(
            "Rotation state has newer version {} (expected {}), reading anyway",
            envelope.version,
            FORMAT_VERSION
        );
    }

    let rotations = envelope
        .rotations
        .into_iter()
        .map(|stored| match stored {
            StoredRotation::Current(rotation) => rotation,
            StoredRotation::Members(members) => Rotation::from_members(members),
        })
        .collect();
    RotationState::from_parts(rotations, envelope.active_rotation_index)
}

/// Import the single-rotation member array, if it parses
pub fn import_single_rotation(json: &str) -> Option<RotationState> {
    let members: Vec<String> = match serde_json::from_str(json) {
        Ok(members) => members,
        Err(e) => {
            log::warn!("Ignoring unreadable single-rotation data: {}", e);
            return None;
        }
    };
    log::info!("Imported single rotation with {} members", members.len());
    Some(RotationState::from_parts(vec![Rotation::from_members(members)], 0))
}
