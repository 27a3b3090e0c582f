//! JS-facing rotation API (WASM only)
//!
//! A browser UI constructs one `RotationApp`, renders from its getters and
//! calls its mutators from event handlers. State lives in LocalStorage.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use super::storage::LocalStorage;
use crate::rotation::{Rotation, active_member, ordered_members, rotation_label, view};
use crate::store::RotationStore;

fn to_js_array<'a>(items: impl IntoIterator<Item = &'a String>) -> Array {
    items
        .into_iter()
        .map(|s| JsValue::from_str(s))
        .collect::<Array>()
}

#[wasm_bindgen]
pub struct RotationApp {
    store: RotationStore<LocalStorage>,
}

#[wasm_bindgen]
impl RotationApp {
    /// Load state from LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<RotationApp, JsValue> {
        let storage = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            store: RotationStore::open(storage),
        })
    }

    fn rotation(&self, index: usize) -> Option<&Rotation> {
        self.store.state().rotation(index)
    }

    #[wasm_bindgen(js_name = rotationCount)]
    pub fn rotation_count(&self) -> usize {
        self.store.state().len()
    }

    #[wasm_bindgen(js_name = activeRotationIndex)]
    pub fn active_rotation_index(&self) -> usize {
        self.store.state().active_rotation_index()
    }

    #[wasm_bindgen(js_name = canAddRotation)]
    pub fn can_add_rotation(&self) -> bool {
        view::can_add_rotation(self.store.state())
    }

    #[wasm_bindgen(js_name = hasMembers)]
    pub fn has_members(&self, rotation_index: usize) -> bool {
        self.rotation(rotation_index).is_some_and(view::has_members)
    }

    /// Members in insertion order (indices match `removeMember`)
    pub fn members(&self, rotation_index: usize) -> Array {
        match self.rotation(rotation_index) {
            Some(rotation) => to_js_array(rotation.members()),
            None => Array::new(),
        }
    }

    /// Members front-first
    #[wasm_bindgen(js_name = orderedMembers)]
    pub fn ordered_members(&self, rotation_index: usize) -> Array {
        match self.rotation(rotation_index) {
            Some(rotation) => to_js_array(&ordered_members(rotation)),
            None => Array::new(),
        }
    }

    #[wasm_bindgen(js_name = activeMember)]
    pub fn active_member(&self, rotation_index: usize) -> Option<String> {
        self.rotation(rotation_index)
            .and_then(active_member)
            .map(str::to_string)
    }

    /// Insertion-order index of the highlighted member
    #[wasm_bindgen(js_name = activePosition)]
    pub fn active_position(&self, rotation_index: usize) -> Option<usize> {
        self.rotation(rotation_index).and_then(Rotation::front)
    }

    #[wasm_bindgen(js_name = rotationLabel)]
    pub fn rotation_label(&self, rotation_index: usize) -> String {
        rotation_label(rotation_index)
    }

    #[wasm_bindgen(js_name = addRotation)]
    pub fn add_rotation(&mut self) {
        self.store.add_rotation();
    }

    #[wasm_bindgen(js_name = addMember)]
    pub fn add_member(&mut self, member: &str, rotation_index: usize) {
        self.store.add_member(member, rotation_index);
    }

    #[wasm_bindgen(js_name = removeMember)]
    pub fn remove_member(&mut self, member_index: usize, rotation_index: usize) {
        self.store.remove_member(member_index, rotation_index);
    }

    #[wasm_bindgen(js_name = rotateForward)]
    pub fn rotate_forward(&mut self, rotation_index: usize) {
        self.store.rotate_forward(rotation_index);
    }

    #[wasm_bindgen(js_name = rotateBackward)]
    pub fn rotate_backward(&mut self, rotation_index: usize) {
        self.store.rotate_backward(rotation_index);
    }

    #[wasm_bindgen(js_name = setActiveRotation)]
    pub fn set_active_rotation(&mut self, index: usize) {
        self.store.set_active_rotation(index);
    }

    /// Clear all rotations and stored data
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.store
            .reset()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
