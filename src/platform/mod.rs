//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, a data directory natively)
//! - The JS-facing API on web

pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
