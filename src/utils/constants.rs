/// Backend base URL, resolved at compile time:
/// - Development: http://localhost:3000 (default)
/// - Production: set BACKEND_URL in .env (picked up by build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Rows per appointments page. The backend honors whatever we send, the UI
/// always sends this.
pub const PAGE_LIMIT: u32 = 10;

// sessionStorage keys
pub const STORAGE_KEY_FILTER: &str = "appointmentFilter";
pub const STORAGE_KEY_SORT: &str = "appointmentSort";
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
