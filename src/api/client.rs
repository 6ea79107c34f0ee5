/// HTTP client for the artworks API
///
/// One parameterized GET per page, no retries. A failed call is the
/// caller's responsibility to retry (the UI exposes a Retry button).

use thiserror::Error;

use crate::state::data::ArtworkPage;

/// Base URL of the artworks endpoint. `page` is the only query parameter.
const API_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Errors a page fetch can fail with
///
/// Payloads are owned strings rather than the underlying error types so
/// the variants stay `Clone` and can travel inside iced messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not complete (DNS, connect, read failures)
    #[error("network request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),
    /// The response body is not the expected JSON envelope
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

/// Fetch one page of artworks (1-based page number)
pub async fn fetch_artworks(page: u32) -> Result<ArtworkPage, FetchError> {
    let url = format!("{}?page={}", API_BASE_URL, page);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    // Read the full body first so a truncated read surfaces as a
    // transport failure rather than a decode failure
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    decode_page(&body)
}

/// Decode the JSON envelope into a typed page result
fn decode_page(body: &str) -> Result<ArtworkPage, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_missing_data_field() {
        let body = r#"{ "pagination": { "total": 0, "limit": 12, "offset": 0, "total_pages": 0, "current_page": 1 } }"#;

        let result = decode_page(body);

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_non_json_body() {
        let result = decode_page("<html>Service Unavailable</html>");

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_decode_accepts_empty_page() {
        let body = r#"{
            "pagination": { "total": 0, "limit": 12, "offset": 0, "total_pages": 0, "current_page": 1 },
            "data": []
        }"#;

        let page = decode_page(body).unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 0);
    }
}
