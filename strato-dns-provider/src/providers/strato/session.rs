//! Login handshake

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;
use url::form_urlencoded;

use crate::error::{AuthFailure, Result};
use crate::http_client::{HttpUtils, ResponseClass};
use crate::utils::log_sanitizer::mask_secret;

use super::PARAM_SESSION_ID;
use super::error::{PROVIDER_NAME, auth_failed};

pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const FIELD_IDENTIFIER: &str = "identifier";
const FIELD_PASSWORD: &str = "passwd";
const FIELD_LOGIN_SUBMIT: &str = "action_customer_login.x";
const LOGIN_SUBMIT_VALUE: &str = "Login";

/// Log in and return the session token.
///
/// 1. An anonymous GET lets the panel set its preliminary session cookie.
/// 2. The credentials are POSTed to the same endpoint.
/// 3. A 302 carries the token in its `Location`; a 200 is the login page again.
pub(crate) async fn authenticate(
    client: &Client,
    endpoint: &Url,
    identifier: &str,
    password: &str,
) -> Result<String> {
    // Only the cookies of this response matter
    HttpUtils::execute_request(
        client.get(endpoint.clone()),
        PROVIDER_NAME,
        "GET",
        endpoint.as_str(),
    )
    .await?;

    let body = login_form(identifier, password);
    let response = HttpUtils::execute_request(
        client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body),
        PROVIDER_NAME,
        "POST",
        endpoint.as_str(),
    )
    .await?;

    match response.classify() {
        ResponseClass::Redirect(location) => {
            let session_id = session_id_from_location(endpoint, &location)
                .ok_or_else(|| auth_failed(AuthFailure::MalformedRedirect))?;
            log::info!(
                "[{PROVIDER_NAME}] Logged in as '{identifier}', session {}",
                mask_secret(&session_id)
            );
            Ok(session_id)
        }
        ResponseClass::Rendered => {
            log::warn!("[{PROVIDER_NAME}] Login page re-rendered for '{identifier}'");
            Err(auth_failed(AuthFailure::InvalidCredentials))
        }
        ResponseClass::Other(status) => Err(auth_failed(AuthFailure::UnexpectedStatus(status))),
    }
}

fn login_form(identifier: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(FIELD_IDENTIFIER, identifier)
        .append_pair(FIELD_PASSWORD, password)
        .append_pair(FIELD_LOGIN_SUBMIT, LOGIN_SUBMIT_VALUE)
        .finish()
}

/// Extract a non-empty `sessionID` from a redirect target.
///
/// Relative targets are resolved against the endpoint first.
pub(crate) fn session_id_from_location(endpoint: &Url, location: &str) -> Option<String> {
    if location.is_empty() {
        return None;
    }
    let target = endpoint.join(location).ok()?;
    target
        .query_pairs()
        .find(|(key, _)| key == PARAM_SESSION_ID)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
