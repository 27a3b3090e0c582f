//! Rotation Keeper entry point
//!
//! On web this only installs logging; the UI drives `RotationApp`.
//! Natively it opens the data directory and prints each rotation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Rotation Keeper ready");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rotation_keeper::consts::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
    use rotation_keeper::rotation::view;
    use rotation_keeper::{FileStorage, RotationStore};

    env_logger::init();
    log::info!("Rotation Keeper (native) starting...");

    let dir = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let storage = match FileStorage::open(&dir) {
        Ok(storage) => storage,
        Err(e) => {
            log::error!("Cannot open data directory {}: {}", dir, e);
            std::process::exit(1);
        }
    };

    let store = RotationStore::open(storage);
    let state = store.state();
    if state.is_empty() {
        println!("No rotations in {}", dir);
        return;
    }
    for (index, rotation) in state.rotations().iter().enumerate() {
        let marker = if index == state.active_rotation_index() {
            "*"
        } else {
            " "
        };
        println!("{} {}", marker, view::summary(index, rotation));
    }
}
