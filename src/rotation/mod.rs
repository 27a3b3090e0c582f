//! Rotation state module
//!
//! Pure state and transitions. This module must stay free of storage and
//! platform dependencies:
//! - Transitions return new snapshots
//! - Invalid input degrades to a no-op
//! - Views are derived, never stored

pub mod cycle;
pub mod state;
pub mod view;

pub use cycle::Rotation;
pub use state::RotationState;
pub use view::{MemberRow, active_member, member_rows, ordered_members, rotation_label};
