//! Save/load of rotation state
//!
//! Features:
//! - Versioned JSON envelope
//! - Migration from older shapes (bare member arrays, single-rotation key)
//! - Load-time repair of out-of-range indices
//!
//! Reading never fails: anything unreadable falls back to an empty state.

pub mod envelope;
pub mod migration;
pub mod validation;

pub use envelope::{FORMAT_VERSION, encode};
pub use validation::{RepairReport, repair};

use crate::rotation::RotationState;

/// Decode a stored blob into state, `None` if it does not parse
///
/// The result is migrated but not yet repaired.
pub fn decode_state(json: &str) -> Option<RotationState> {
    match envelope::decode(json) {
        Ok(env) => Some(migration::migrate(env)),
        Err(e) => {
            log::warn!("Discarding unreadable rotation state: {}", e);
            None
        }
    }
}
