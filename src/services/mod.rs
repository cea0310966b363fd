pub mod api_client;

pub use api_client::{extract_api_error, ApiClient, GENERIC_FETCH_ERROR};
