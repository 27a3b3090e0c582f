//! A single rotation: an ordered member list with an explicit head offset
//!
//! Members keep their insertion order forever. Rotating only moves `head`,
//! the insertion-order position of the member currently up front, so
//! duplicate names never confuse which entry is active.

use serde::{Deserialize, Serialize};

/// An ordered list of members with a head offset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rotation {
    /// Members in insertion order
    members: Vec<String>,
    /// Insertion-order position of the front member
    #[serde(default)]
    head: usize,
}

impl Rotation {
    /// Create an empty rotation
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            head: 0,
        }
    }

    /// Create a rotation from members, head at the first one
    pub fn from_members(members: Vec<String>) -> Self {
        Self { members, head: 0 }
    }

    /// Create a rotation with an explicit head (clamped into range)
    pub fn with_head(members: Vec<String>, head: usize) -> Self {
        let mut rotation = Self { members, head };
        rotation.clamp_head();
        rotation
    }

    /// Members in insertion order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Insertion-order position of the front member, as stored
    pub fn head(&self) -> usize {
        self.head
    }

    /// Position of the front member reduced into range, `None` when empty
    ///
    /// A stored head past the end (kept by a verbatim load) wraps modulo
    /// the member count. Every view and step goes through this.
    pub fn front(&self) -> Option<usize> {
        match self.members.len() {
            0 => None,
            n => Some(self.head % n),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append a member at the end of insertion order
    pub(crate) fn push(&mut self, member: String) {
        self.members.push(member);
    }

    /// Remove the member at `index`, keeping the head on the same member
    ///
    /// Returns false (and changes nothing) when `index` is out of range.
    /// If the front member itself is removed, the next one takes the front.
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        let Some(front) = self.front() else {
            return false;
        };
        if index >= self.members.len() {
            return false;
        }
        self.head = front;
        self.members.remove(index);

        if index < self.head {
            self.head -= 1;
        }
        // Removing the last member while it was up front wraps to the start
        if self.head >= self.members.len() {
            self.head = 0;
        }
        true
    }

    /// Advance the head by one step
    ///
    /// The step that would land back on position 0 is suppressed, so a
    /// one-member rotation never moves. Returns whether the head changed.
    pub(crate) fn step_forward(&mut self) -> bool {
        let n = self.members.len();
        let Some(head) = self.front() else {
            return false;
        };
        let next = (head + 1) % n;
        if next == 0 {
            return false;
        }
        self.head = next;
        true
    }

    /// Move the head back by one step
    ///
    /// Mirror of [`Rotation::step_forward`]: the step that would land on the
    /// last position is suppressed.
    pub(crate) fn step_backward(&mut self) -> bool {
        let n = self.members.len();
        let Some(head) = self.front() else {
            return false;
        };
        let prev = (head + n - 1) % n;
        if prev == n - 1 {
            return false;
        }
        self.head = prev;
        true
    }

    /// Force `head` back into range; returns whether it had to move
    pub(crate) fn clamp_head(&mut self) -> bool {
        if self.head != 0 && self.head >= self.members.len() {
            self.head = 0;
            return true;
        }
        false
    }

    /// Drop members that are empty after trimming; returns how many were dropped
    ///
    /// The head stays on the first surviving member at or after it.
    pub(crate) fn retain_non_blank(&mut self) -> usize {
        let before = self.members.len();
        let mut kept = Vec::with_capacity(before);
        let mut new_head = None;
        for (i, member) in self.members.drain(..).enumerate() {
            if member.trim().is_empty() {
                continue;
            }
            if new_head.is_none() && i >= self.head {
                new_head = Some(kept.len());
            }
            kept.push(member);
        }
        let dropped = before - kept.len();
        self.members = kept;
        if dropped > 0 {
            self.head = new_head.unwrap_or(0);
        }
        dropped
    }
}
