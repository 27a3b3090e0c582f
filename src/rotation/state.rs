//! Rotation collection state and its transitions
//!
//! `RotationState` is a value: every transition borrows the current snapshot
//! and hands back a new one, leaving the original untouched. Invalid input
//! (blank members, out-of-range indices, a full collection) yields an
//! unchanged snapshot instead of an error.

use super::cycle::Rotation;
use crate::consts::MAX_ROTATIONS;

/// All rotations plus the active-rotation selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    rotations: Vec<Rotation>,
    active_rotation_index: usize,
    /// Upper bound on the number of rotations (not persisted)
    max_rotations: usize,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    /// Empty collection, index 0, default limit
    pub fn new() -> Self {
        Self::with_max_rotations(MAX_ROTATIONS)
    }

    /// Empty collection with a custom rotation limit
    pub fn with_max_rotations(max_rotations: usize) -> Self {
        Self {
            rotations: Vec::new(),
            active_rotation_index: 0,
            max_rotations,
        }
    }

    /// Build a state from raw parts, stored verbatim
    ///
    /// No invariants are enforced here; see `persistence::validation` for
    /// the clamping applied to loaded data.
    pub fn from_parts(rotations: Vec<Rotation>, active_rotation_index: usize) -> Self {
        Self {
            rotations,
            active_rotation_index,
            max_rotations: MAX_ROTATIONS,
        }
    }

    /// Same state under a different rotation limit
    #[must_use]
    pub fn limited_to(mut self, max_rotations: usize) -> Self {
        self.max_rotations = max_rotations;
        self
    }

    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    pub fn rotation(&self, index: usize) -> Option<&Rotation> {
        self.rotations.get(index)
    }

    pub fn active_rotation_index(&self) -> usize {
        self.active_rotation_index
    }

    /// The active rotation, if the collection is non-empty and the index valid
    pub fn active_rotation(&self) -> Option<&Rotation> {
        self.rotations.get(self.active_rotation_index)
    }

    pub fn max_rotations(&self) -> usize {
        self.max_rotations
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Whether another rotation may be added
    pub fn can_add_rotation(&self) -> bool {
        self.rotations.len() < self.max_rotations
    }

    /// Append an empty rotation and make it active
    #[must_use]
    pub fn add_rotation(&self) -> Self {
        if !self.can_add_rotation() {
            log::warn!(
                "Rotation limit reached ({}), not adding another",
                self.max_rotations
            );
            return self.clone();
        }
        let mut next = self.clone();
        next.rotations.push(Rotation::new());
        next.active_rotation_index = next.rotations.len() - 1;
        next
    }

    /// Append `member` to the rotation at `rotation_index`
    ///
    /// Blank members and unknown rotations are ignored. The member is stored
    /// as given, surrounding whitespace included.
    #[must_use]
    pub fn add_member(&self, member: &str, rotation_index: usize) -> Self {
        if member.trim().is_empty() {
            log::debug!("Ignoring blank member");
            return self.clone();
        }
        self.update_rotation(rotation_index, |rotation| {
            rotation.push(member.to_string());
            true
        })
    }

    /// Remove the member at `member_index` from the rotation at `rotation_index`
    #[must_use]
    pub fn remove_member(&self, member_index: usize, rotation_index: usize) -> Self {
        self.update_rotation(rotation_index, |rotation| rotation.remove(member_index))
    }

    /// Step the rotation at `rotation_index` forward
    #[must_use]
    pub fn rotate_forward(&self, rotation_index: usize) -> Self {
        self.update_rotation(rotation_index, Rotation::step_forward)
    }

    /// Step the rotation at `rotation_index` backward
    #[must_use]
    pub fn rotate_backward(&self, rotation_index: usize) -> Self {
        self.update_rotation(rotation_index, Rotation::step_backward)
    }

    /// Select the active rotation; out-of-range indices are ignored
    #[must_use]
    pub fn set_active_rotation(&self, index: usize) -> Self {
        if index >= self.rotations.len() {
            log::warn!(
                "Ignoring active rotation {} (have {})",
                index,
                self.rotations.len()
            );
            return self.clone();
        }
        let mut next = self.clone();
        next.active_rotation_index = index;
        next
    }

    /// Mutable access for load-time repair
    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<Rotation>, &mut usize) {
        (&mut self.rotations, &mut self.active_rotation_index)
    }

    /// Apply `f` to a copy of one rotation; unchanged snapshot if `f` reports
    /// no change or the index is unknown
    fn update_rotation(&self, index: usize, f: impl FnOnce(&mut Rotation) -> bool) -> Self {
        let Some(rotation) = self.rotations.get(index) else {
            log::warn!("No rotation at index {}", index);
            return self.clone();
        };
        let mut updated = rotation.clone();
        if !f(&mut updated) {
            return self.clone();
        }
        let mut next = self.clone();
        next.rotations[index] = updated;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::view::ordered_members;
    use proptest::prelude::*;

    fn with_members(members: &[&str]) -> RotationState {
        members
            .iter()
            .fold(RotationState::new().add_rotation(), |s, m| s.add_member(m, 0))
    }

    fn order(state: &RotationState, index: usize) -> Vec<String> {
        ordered_members(state.rotation(index).unwrap())
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = RotationState::new();
        assert!(state.is_empty());
        assert_eq!(state.active_rotation_index(), 0);
        assert!(state.active_rotation().is_none());
    }

    #[test]
    fn test_add_rotation_activates_newest() {
        let state = RotationState::new().add_rotation().add_rotation();
        assert_eq!(state.len(), 2);
        assert_eq!(state.active_rotation_index(), 1);
        assert!(state.rotation(1).unwrap().is_empty());
    }

    #[test]
    fn test_sixth_rotation_rejected() {
        let mut state = RotationState::new();
        for _ in 0..MAX_ROTATIONS {
            state = state.add_rotation();
        }
        assert!(!state.can_add_rotation());
        let after = state.add_rotation();
        assert_eq!(after.len(), MAX_ROTATIONS);
        assert_eq!(after, state);
    }

    #[test]
    fn test_custom_limit() {
        let state = RotationState::with_max_rotations(1).add_rotation();
        assert_eq!(state.add_rotation().len(), 1);
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let before = with_members(&["A", "B"]);
        let after = before.add_member("C", 0).rotate_forward(0);
        assert_eq!(before.rotation(0).unwrap().len(), 2);
        assert_eq!(before.rotation(0).unwrap().head(), 0);
        assert_eq!(after.rotation(0).unwrap().len(), 3);
    }

    #[test]
    fn test_blank_member_ignored() {
        let state = with_members(&["A"]);
        assert_eq!(state.add_member("   ", 0), state);
        assert_eq!(state.add_member("", 0), state);
    }

    #[test]
    fn test_member_stored_verbatim() {
        let state = with_members(&[" Alice "]);
        assert_eq!(state.rotation(0).unwrap().members(), [" Alice "]);
    }

    #[test]
    fn test_add_member_unknown_rotation_is_noop() {
        let state = with_members(&["A"]);
        assert_eq!(state.add_member("B", 4), state);
    }

    #[test]
    fn test_duplicates_allowed() {
        let state = with_members(&["A", "A"]);
        assert_eq!(state.rotation(0).unwrap().members(), ["A", "A"]);
    }

    #[test]
    fn test_three_forward_steps_do_not_cycle() {
        let state = with_members(&["A", "B", "C"]);

        let s1 = state.rotate_forward(0);
        assert_eq!(order(&s1, 0), ["B", "C", "A"]);
        let s2 = s1.rotate_forward(0);
        assert_eq!(order(&s2, 0), ["C", "A", "B"]);
        let s3 = s2.rotate_forward(0);
        assert_eq!(order(&s3, 0), ["C", "A", "B"]);
        assert_ne!(order(&s3, 0), ["A", "B", "C"]);
    }

    #[test]
    fn test_backward_undoes_forward() {
        let state = with_members(&["A", "B", "C"]);
        let back = state.rotate_forward(0).rotate_forward(0).rotate_backward(0);
        assert_eq!(order(&back, 0), ["B", "C", "A"]);
    }

    #[test]
    fn test_rotate_empty_rotation_is_noop() {
        let state = RotationState::new().add_rotation();
        assert_eq!(state.rotate_forward(0), state);
        assert_eq!(state.rotate_backward(0), state);
    }

    #[test]
    fn test_rotations_are_independent() {
        let state = with_members(&["A", "B"])
            .add_rotation()
            .add_member("X", 1)
            .add_member("Y", 1)
            .rotate_forward(1);
        assert_eq!(order(&state, 0), ["A", "B"]);
        assert_eq!(order(&state, 1), ["Y", "X"]);
    }

    #[test]
    fn test_set_active_rotation_bounds() {
        let state = RotationState::new().add_rotation().add_rotation();
        assert_eq!(state.set_active_rotation(0).active_rotation_index(), 0);
        assert_eq!(state.set_active_rotation(2), state);
    }

    #[test]
    fn test_remove_same_index_twice() {
        let state = with_members(&["A", "B"]);
        let once = state.remove_member(0, 0);
        assert_eq!(once.rotation(0).unwrap().members(), ["B"]);
        let twice = once.remove_member(0, 0);
        assert!(twice.rotation(0).unwrap().is_empty());
        let thrice = twice.remove_member(0, 0);
        assert_eq!(thrice, twice);
    }

    proptest! {
        #[test]
        fn prop_add_member_counts_non_blank(members in prop::collection::vec("[ a-c]{0,3}", 0..20)) {
            let state = members
                .iter()
                .fold(RotationState::new().add_rotation(), |s, m| s.add_member(m, 0));
            let expected: Vec<&String> = members.iter().filter(|m| !m.trim().is_empty()).collect();
            let stored = state.rotation(0).unwrap().members();
            prop_assert_eq!(stored.len(), expected.len());
            prop_assert!(stored.iter().zip(expected).all(|(a, b)| a == b));
        }

        #[test]
        fn prop_remove_twice_never_panics(len in 0usize..6, k in 0usize..8) {
            let members: Vec<String> = (0..len).map(|i| format!("m{i}")).collect();
            let state = members
                .iter()
                .fold(RotationState::new().add_rotation(), |s, m| s.add_member(m, 0));
            let once = state.remove_member(k, 0);
            let twice = once.remove_member(k, 0);
            let n1 = once.rotation(0).unwrap().len();
            let n2 = twice.rotation(0).unwrap().len();
            if k < n1 {
                prop_assert_eq!(n2, n1 - 1);
            } else {
                prop_assert_eq!(&twice, &once);
            }
        }

        #[test]
        fn prop_head_stays_in_range(steps in prop::collection::vec(0u8..4, 0..40)) {
            let mut state = with_members(&["A", "B", "C", "D"]);
            for step in steps {
                state = match step {
                    0 => state.rotate_forward(0),
                    1 => state.rotate_backward(0),
                    2 => state.remove_member(1, 0),
                    _ => state.add_member("E", 0),
                };
                let rotation = state.rotation(0).unwrap();
                prop_assert!(rotation.is_empty() || rotation.head() < rotation.len());
            }
        }
    }
}
