//! Generic HTTP request handling
//!
//! The panel signals outcomes through status codes and the `Location` header rather than
//! through bodies, so requests are executed with redirects disabled and the raw
//! status/`Location`/body triple is handed back to the caller.
//!
//! # design principles
//! - **One request, one answer** - no retries; a failed request is terminal for the operation
//! - **Three-way classification** - redirect / 200 / anything else, wherever the pattern recurs
//! - **Nothing sensitive in logs** - URLs are redacted and bodies truncated by the caller-facing helpers

use reqwest::RequestBuilder;
use reqwest::StatusCode;
use reqwest::header::LOCATION;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// What the panel answered, with the body already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelResponse {
    pub status: u16,
    /// Raw `Location` header, if any.
    pub location: Option<String>,
    pub body: String,
}

/// The three outcomes the panel protocol distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseClass {
    /// HTTP 302 carrying the given `Location` (may be empty if the header was missing).
    Redirect(String),
    /// HTTP 200; the page was (re-)rendered.
    Rendered,
    /// Anything else.
    Other(u16),
}

impl PanelResponse {
    pub fn classify(&self) -> ResponseClass {
        match StatusCode::from_u16(self.status) {
            Ok(StatusCode::FOUND) => {
                ResponseClass::Redirect(self.location.clone().unwrap_or_default())
            }
            Ok(StatusCode::OK) => ResponseClass::Rendered,
            _ => ResponseClass::Other(self.status),
        }
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the panel's answer
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, form body, etc.)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url_for_log` - already-redacted URL (for logging)
    ///
    /// # Returns
    /// * `Ok(PanelResponse)` - any HTTP status, including redirects and errors
    /// * `Err(ProviderError::NetworkError | ProviderError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_for_log: &str,
    ) -> Result<PanelResponse, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_for_log}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, &e))?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        // Read the header before the body consumes the response
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::trace!("[{provider_name}] Response Body: {}", truncate_for_log(&body));

        Ok(PanelResponse {
            status,
            location,
            body,
        })
    }
}

fn transport_error(provider_name: &str, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    }
}
