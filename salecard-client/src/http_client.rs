//! Generic HTTP client tools
//!
//! Shared request/response handling for the catalog endpoints: sending,
//! logging, status classification and JSON parsing. Endpoint code builds its
//! own `RequestBuilder` and hands it over here.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::ApiErrorBody;

/// Maximum number of characters of a response body written to the log.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name, for logs
    /// * `url` - target URL, for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status, including errors
    /// * `Err(ClientError::NetworkError | ClientError::Timeout)` - no response received
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Performs the request and turns non-2xx statuses into [`ClientError::Api`]
    pub async fn execute_checked(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String, ClientError> {
        let (status, body) = Self::execute_request(request_builder, method_name, url).await?;
        Self::check_status(status, body)
    }

    /// Classify a received response
    ///
    /// 2xx passes the body through; anything else becomes [`ClientError::Api`],
    /// carrying the server `message` when the body flags `error`.
    pub fn check_status(status: u16, body: String) -> Result<String, ClientError> {
        if (200..300).contains(&status) {
            return Ok(body);
        }

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.flagged_message());

        Err(ClientError::Api {
            status,
            message,
            body,
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

/// Shorten a response body for logging.
///
/// Cuts at a character boundary after `LOG_BODY_LIMIT` characters and notes
/// the full byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(LOG_BODY_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- check_status ----

    #[test]
    fn success_status_passes_body() {
        let result = HttpUtils::check_status(201, "created".to_string());
        assert!(matches!(result.as_deref(), Ok("created")));
    }

    #[test]
    fn error_status_with_flagged_message() {
        let body = r#"{"error":true,"message":"Card not found"}"#.to_string();
        let result = HttpUtils::check_status(404, body);
        assert!(
            matches!(
                &result,
                Err(ClientError::Api { status: 404, message: Some(m), .. }) if m == "Card not found"
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn error_status_without_flag_has_no_message() {
        let body = r#"{"message":"something"}"#.to_string();
        let result = HttpUtils::check_status(500, body);
        assert!(
            matches!(&result, Err(ClientError::Api { status: 500, message: None, .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn error_status_with_html_body() {
        let result = HttpUtils::check_status(502, "<html>Bad Gateway</html>".to_string());
        assert!(
            matches!(&result, Err(ClientError::Api { message: None, body, .. }) if body.contains("Bad Gateway")),
            "unexpected result: {result:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ClientError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- truncate_for_log ----

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("ok"), "ok");
    }

    #[test]
    fn long_body_truncated_on_char_boundary() {
        let s = "书".repeat(LOG_BODY_LIMIT + 10);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"书".repeat(LOG_BODY_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", s.len())));
    }
}
