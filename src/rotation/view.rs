//! Read-only views for a presentation layer
//!
//! Nothing here mutates state. A UI renders these and calls back into
//! `RotationStore` for changes.

use super::cycle::Rotation;
use super::state::RotationState;

/// One member row in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow<'a> {
    /// Insertion-order index (what `remove_member` takes)
    pub index: usize,
    pub member: &'a str,
    /// Whether this row is currently up front
    pub active: bool,
}

/// Members in rotated order, front member first
pub fn ordered_members(rotation: &Rotation) -> Vec<String> {
    let members = rotation.members();
    let Some(head) = rotation.front() else {
        return Vec::new();
    };
    members[head..]
        .iter()
        .chain(&members[..head])
        .cloned()
        .collect()
}

/// The member currently up front
pub fn active_member(rotation: &Rotation) -> Option<&str> {
    rotation
        .front()
        .and_then(|front| rotation.members().get(front))
        .map(String::as_str)
}

/// Insertion-order rows with the front member flagged
///
/// Exactly one row is active in a non-empty rotation, even when member
/// names repeat.
pub fn member_rows(rotation: &Rotation) -> Vec<MemberRow<'_>> {
    let front = rotation.front();
    rotation
        .members()
        .iter()
        .enumerate()
        .map(|(index, member)| MemberRow {
            index,
            member: member.as_str(),
            active: Some(index) == front,
        })
        .collect()
}

/// Whether forward/backward controls should be enabled
pub fn has_members(rotation: &Rotation) -> bool {
    !rotation.is_empty()
}

/// Whether the "add rotation" control should be enabled
pub fn can_add_rotation(state: &RotationState) -> bool {
    state.can_add_rotation()
}

/// Display label for a rotation (1-based)
pub fn rotation_label(index: usize) -> String {
    format!("Rotation {}", index + 1)
}

/// One-line summary of a rotation, used in logs and the native binary
pub fn summary(index: usize, rotation: &Rotation) -> String {
    match active_member(rotation) {
        Some(member) => format!(
            "{}: {} (up: {})",
            rotation_label(index),
            ordered_members(rotation).join(", "),
            member
        ),
        None => format!("{}: no members", rotation_label(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(members: &[&str], head: usize) -> Rotation {
        Rotation::with_head(members.iter().map(|m| m.to_string()).collect(), head)
    }

    #[test]
    fn test_ordered_members_left_rotates() {
        assert_eq!(ordered_members(&rotation(&["A", "B", "C"], 0)), ["A", "B", "C"]);
        assert_eq!(ordered_members(&rotation(&["A", "B", "C"], 2)), ["C", "A", "B"]);
        assert!(ordered_members(&Rotation::new()).is_empty());
    }

    #[test]
    fn test_active_member() {
        assert_eq!(active_member(&rotation(&["A", "B"], 1)), Some("B"));
        assert_eq!(active_member(&Rotation::new()), None);
    }

    #[test]
    fn test_duplicate_names_highlight_one_row() {
        let r = rotation(&["Sam", "Kit", "Sam"], 2);
        let rows = member_rows(&r);
        let active: Vec<usize> = rows.iter().filter(|r| r.active).map(|r| r.index).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_views_agree_on_out_of_range_head() {
        // Verbatim loads can keep a head past the end; 4 % 3 == 1
        let r: Rotation = serde_json::from_str(r#"{"members":["A","B","C"],"head":4}"#).unwrap();
        assert_eq!(ordered_members(&r), ["B", "C", "A"]);
        assert_eq!(active_member(&r), Some("B"));
        let active: Vec<usize> = member_rows(&r)
            .iter()
            .filter(|row| row.active)
            .map(|row| row.index)
            .collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn test_controls_enablement() {
        assert!(!has_members(&Rotation::new()));
        assert!(has_members(&rotation(&["A"], 0)));

        let mut state = RotationState::new();
        assert!(can_add_rotation(&state));
        for _ in 0..crate::consts::MAX_ROTATIONS {
            state = state.add_rotation();
        }
        assert!(!can_add_rotation(&state));
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(0, &rotation(&["A", "B"], 1)),
            "Rotation 1: B, A (up: B)"
        );
        assert_eq!(summary(2, &Rotation::new()), "Rotation 3: no members");
    }
}
