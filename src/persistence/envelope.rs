//! Versioned JSON envelope for the persisted rotation state
//!
//! Stored shape (camelCase):
//!
//! ```json
//! { "version": 2,
//!   "rotations": [ { "members": ["A", "B"], "head": 1 } ],
//!   "activeRotationIndex": 0 }
//! ```
//!
//! Version 1 blobs stored each rotation as a bare array of members, already
//! in rotated order; those still decode (see `migration`).

use serde::{Deserialize, Serialize};

use crate::rotation::{Rotation, RotationState};

/// Current envelope version
pub const FORMAT_VERSION: u32 = 2;

/// Blobs without a version field predate versioning
const UNVERSIONED: u32 = 1;

fn unversioned() -> u32 {
    UNVERSIONED
}

/// A rotation as found in storage, either shape
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredRotation {
    /// `{ "members": [...], "head": n }`
    Current(Rotation),
    /// `["A", "B"]`
    Members(Vec<String>),
}

/// Decoded envelope, prior to migration and validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default = "unversioned")]
    pub version: u32,
    #[serde(default)]
    pub rotations: Vec<StoredRotation>,
    #[serde(default)]
    pub active_rotation_index: usize,
}

/// Borrowed view used for writing, avoids cloning the state
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    version: u32,
    rotations: &'a [Rotation],
    active_rotation_index: usize,
}

/// Serialize the full state
pub fn encode(state: &RotationState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: FORMAT_VERSION,
        rotations: state.rotations(),
        active_rotation_index: state.active_rotation_index(),
    })
}

/// Parse a stored blob into an envelope
pub fn decode(json: &str) -> Result<Envelope, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_shape() {
        let state = RotationState::new()
            .add_rotation()
            .add_member("A", 0)
            .add_member("B", 0)
            .rotate_forward(0);
        let value: serde_json::Value = serde_json::from_str(&encode(&state).unwrap()).unwrap();
        assert_eq!(value["version"], 2);
        assert_eq!(value["activeRotationIndex"], 0);
        assert_eq!(value["rotations"][0]["members"][1], "B");
        assert_eq!(value["rotations"][0]["head"], 1);
    }

    #[test]
    fn test_decode_mixed_shapes() {
        let env = decode(
            r#"{"rotations":[["A","B"],{"members":["C"],"head":0}],"activeRotationIndex":1}"#,
        )
        .unwrap();
        assert_eq!(env.version, 1);
        assert_eq!(env.active_rotation_index, 1);
        assert_eq!(
            env.rotations[0],
            StoredRotation::Members(vec!["A".into(), "B".into()])
        );
        assert!(matches!(env.rotations[1], StoredRotation::Current(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"rotations":"nope"}"#).is_err());
        assert!(decode(r#"{"activeRotationIndex":-1}"#).is_err());
    }

    #[test]
    fn test_decode_empty_object_defaults() {
        let env = decode("{}").unwrap();
        assert!(env.rotations.is_empty());
        assert_eq!(env.active_rotation_index, 0);
    }
}
