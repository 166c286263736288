//! Generic HTTP request helpers
//!
//! Every API client funnels its requests through here so that sending,
//! logging and body handling behave identically across endpoints. Callers
//! build the `RequestBuilder` themselves and decide how to interpret the body.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::PdnsError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and returns the status code and the response text.
    ///
    /// Transport failures become `Timeout` or `NetworkError`. Any HTTP
    /// status, including 4xx/5xx, is returned as `Ok` for the caller to map.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), PdnsError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                PdnsError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                PdnsError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                PdnsError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                PdnsError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        if !response_text.is_empty() {
            log::debug!("Response Body: {}", truncate_for_log(&response_text));
        }

        Ok((status_code, response_text))
    }

    /// Parses a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, PdnsError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            PdnsError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Serializes a request body, logging it at debug level.
    pub fn to_json_body<B>(body: &B) -> Result<String, PdnsError>
    where
        B: serde::Serialize + ?Sized,
    {
        let json = serde_json::to_string(body).map_err(|e| PdnsError::SerializationError {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {}", truncate_for_log(&json));
        Ok(json)
    }
}
