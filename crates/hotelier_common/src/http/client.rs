// --- File: crates/hotelier_common/src/http/client.rs ---
use hotelier_config::ApiConfig;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Builds the client used to talk to the booking backend.
///
/// Requests time out after `api.timeout_secs`; redirects are followed.
pub fn client_for(api: &ApiConfig) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(api.timeout_secs))
        .build()
}

/// Joins the configured base URL and an absolute API path without doubling slashes.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::join_url;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(
            join_url("http://backend:5000/", "/api/rooms"),
            "http://backend:5000/api/rooms"
        );
        assert_eq!(
            join_url("http://backend:5000", "api/rooms"),
            "http://backend:5000/api/rooms"
        );
    }
}
