//! `localStorage` access for the last connected wallet.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {:?}", e);
            None
        }
    }
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("Failed to write {}: {:?}", key, e);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(key) {
            log::warn!("Failed to remove {}: {:?}", key, e);
        }
    }
}
