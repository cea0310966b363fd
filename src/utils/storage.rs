use web_sys::{window, Storage};

/// Session-scoped storage: survives reloads, cleared when the tab closes.
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_to_session(key: &str, value: &str) -> Result<(), String> {
    let storage = session_storage().ok_or("sessionStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("Failed to persist '{}'", key))
}

pub fn load_from_session(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}
