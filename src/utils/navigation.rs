use wasm_bindgen::JsValue;
use web_sys::{window, UrlSearchParams};

/// Current 1-based page taken from the `?page=` query parameter. Missing or
/// unparseable values fall back to page 1.
pub fn page_query_param() -> u32 {
    window()
        .and_then(|win| win.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("page"))
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Push `?page={page}` onto the history without reloading. The appointments
/// page re-fetches when its page state follows this change.
pub fn push_page_param(page: u32) {
    let Some(win) = window() else {
        return;
    };
    let (Ok(history), Ok(path)) = (win.history(), win.location().pathname()) else {
        return;
    };

    let url = format!("{}?page={}", path, page);
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
        log::error!("❌ Failed to push page {} onto history: {:?}", page, e);
    }
}

/// Path of the current location, `"/"` when the window is unavailable.
pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
