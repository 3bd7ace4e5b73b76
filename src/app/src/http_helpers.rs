//! HTTP helper functions for Crux Core
//!
//! Every device response is reduced to a [`RawResponse`] before it reaches an
//! update handler, so the handlers classify plain data and stay unit-testable.

use crux_http::{HttpError, Response};

use crate::types::{RawResponse, RequestError};

/// Base URL for device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute URLs
/// and rejects relative paths (`RelativeUrlWithoutBase` error). The shell strips this
/// prefix before sending requests via `fetch()`, making them relative to the page.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use web_host_core::http_helpers::build_url;
/// let url = build_url("/api/config");
/// assert_eq!(url, "https://relative/api/config");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Reduce an HTTP result to status code and body
///
/// `crux_http` reports 4xx and 5xx answers as [`HttpError::Http`]; those are
/// turned back into responses because the scan protocol branches on them.
/// Only failures without a status code become [`RequestError::Transport`].
pub fn into_raw(result: crux_http::Result<Response<Vec<u8>>>) -> Result<RawResponse, RequestError> {
    match result {
        Ok(mut response) => Ok(RawResponse {
            status: u16::from(response.status()),
            body: response.take_body().unwrap_or_default(),
        }),
        Err(HttpError::Http { code, body, .. }) => Ok(RawResponse {
            status: u16::from(code),
            body: body.unwrap_or_default(),
        }),
        Err(e) => Err(RequestError::Transport(e.to_string())),
    }
}

/// Decode the JSON body of a successful response
pub fn decode_json<T: serde::de::DeserializeOwned>(
    result: Result<RawResponse, RequestError>,
) -> Result<T, RequestError> {
    result.and_then(|raw| raw.json())
}

/// Succeed for any 2xx response, ignoring the body
pub fn expect_success(result: Result<RawResponse, RequestError>) -> Result<(), RequestError> {
    result.and_then(|raw| raw.ensure_success().map(|_| ()))
}

// Note: crux_http::Response has a private constructor, so `into_raw` is covered
// by resolving real Http effects in the app tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatusSnapshot;

    #[test]
    fn urls_carry_the_dummy_prefix() {
        assert_eq!(build_url("/api/meas"), "https://relative/api/meas");
    }

    #[test]
    fn status_errors_keep_code_and_body() {
        let result = into_raw(Err(HttpError::Http {
            code: crux_http::http::StatusCode::TooEarly,
            message: "Too Early".to_string(),
            body: Some(b"scan not ready".to_vec()),
        }));
        assert_eq!(result, Ok(RawResponse::new(425, "scan not ready")));

        let result = into_raw(Err(HttpError::Timeout));
        assert!(matches!(result, Err(RequestError::Transport(_))));
    }

    #[test]
    fn decode_passes_transport_errors_through() {
        let result: Result<StatusSnapshot, _> =
            decode_json(Err(RequestError::Transport("offline".to_string())));
        assert_eq!(result, Err(RequestError::Transport("offline".to_string())));
    }

    #[test]
    fn decode_reads_successful_bodies() {
        let result: Result<StatusSnapshot, _> = decode_json(Ok(RawResponse::new(
            200,
            r#"{"network":{"connected":true}}"#,
        )));
        assert!(result.map(|s| s.network.connected).unwrap_or(false));
    }

    #[test]
    fn success_check_ignores_body() {
        assert_eq!(expect_success(Ok(RawResponse::new(204, ""))), Ok(()));
        assert_eq!(
            expect_success(Ok(RawResponse::new(400, "{}"))),
            Err(RequestError::Protocol { status: 400 })
        );
    }
}
