//! Load-time repair of persisted state
//!
//! Stored data is never trusted to satisfy the invariants: heads must point
//! at a member, the active index at a rotation, and members must be
//! non-blank. Anything else is clamped back into range.

use crate::rotation::RotationState;

/// What `repair` had to change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Blank members dropped
    pub dropped_members: usize,
    /// Rotations whose head was out of range
    pub heads_reset: usize,
    /// Active index was out of range
    pub active_index_reset: bool,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Clamp `state` into its invariants in place
pub fn repair(state: &mut RotationState) -> RepairReport {
    let mut report = RepairReport::default();
    let (rotations, active) = state.parts_mut();

    for rotation in rotations.iter_mut() {
        report.dropped_members += rotation.retain_non_blank();
        if rotation.clamp_head() {
            report.heads_reset += 1;
        }
    }

    let limit = rotations.len().max(1);
    if *active >= limit {
        *active = 0;
        report.active_index_reset = true;
    }

    if !report.is_clean() {
        log::warn!(
            "Repaired stored rotations: {} blank members dropped, {} heads reset, active index reset: {}",
            report.dropped_members,
            report.heads_reset,
            report.active_index_reset
        );
    }
    report
}
