// API client - HTTP communication only, stateless

use gloo_net::http::Request;

use crate::models::{ApiErrorBody, FilterRequest, FilterResponse, RegisterRequest};
use crate::utils::constants::BACKEND_URL;

/// Fallback shown when the backend gives us nothing usable.
pub const GENERIC_FETCH_ERROR: &str = "Something went wrong. Please refresh the page!";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Fetch one page of appointments matching the filter/sort. The bearer
    /// token comes from the auth session; callers must not invoke this
    /// without one.
    pub async fn filter_appointments(
        &self,
        token: &str,
        request: &FilterRequest,
    ) -> Result<FilterResponse, String> {
        let url = format!("{}/appointments/filter", self.base_url);

        log::info!(
            "📋 Fetching appointments: page {} ({}, {})",
            request.page,
            request
                .medium
                .map(|m| format!("{:?}", m))
                .unwrap_or_else(|| "no filter".to_string()),
            request.sort.as_str()
        );

        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Network error fetching appointments: {}", e);
                GENERIC_FETCH_ERROR.to_string()
            })?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(extract_api_error(&body));
        }

        response
            .json::<FilterResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Create an account from the phone registration form.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), String> {
        let url = format!("{}/auth/register", self.base_url);

        log::info!("📝 Registering account for: {}", request.name);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Network error during registration: {}", e);
                GENERIC_FETCH_ERROR.to_string()
            })?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(extract_api_error(&body));
        }

        Ok(())
    }
}

/// Pick the message to surface from an error body: first structured error,
/// then the top-level message, then the generic fallback.
pub fn extract_api_error(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed
            .errors
            .and_then(|errors| errors.into_iter().next())
            .and_then(|error| error.message)
        {
            return message;
        }
        if let Some(message) = parsed.message {
            return message;
        }
    }
    GENERIC_FETCH_ERROR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_list_wins() {
        let body = r#"{"errors":[{"message":"Phone already registered"},{"message":"second"}],"message":"outer"}"#;
        assert_eq!(extract_api_error(body), "Phone already registered");
    }

    #[test]
    fn falls_back_to_top_level_message() {
        let body = r#"{"message":"Invalid token"}"#;
        assert_eq!(extract_api_error(body), "Invalid token");

        let empty_list = r#"{"errors":[],"message":"Invalid token"}"#;
        assert_eq!(extract_api_error(empty_list), "Invalid token");
    }

    #[test]
    fn garbage_body_yields_generic_message() {
        assert_eq!(extract_api_error(""), GENERIC_FETCH_ERROR);
        assert_eq!(extract_api_error("<html>502</html>"), GENERIC_FETCH_ERROR);
        assert_eq!(extract_api_error("{}"), GENERIC_FETCH_ERROR);
    }
}
