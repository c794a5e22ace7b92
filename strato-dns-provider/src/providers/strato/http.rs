//! Strato HTTP 请求方法
//!
//! Every request after login carries `sessionID` and `cID` in the query string in
//! addition to the cookie jar.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::Result;
use crate::http_client::{HttpUtils, PanelResponse};
use crate::utils::log_sanitizer::redact_query_param;

use super::error::PROVIDER_NAME;
use super::session::FORM_CONTENT_TYPE;
use super::{PARAM_CUSTOMER_ID, PARAM_SESSION_ID, StratoProvider};

/// One query-string item; `None` values are emitted as bare keys (`&action_x`).
pub(crate) type QueryItem<'a> = (&'a str, Option<&'a str>);

/// Build `endpoint?sessionID=..&cID=..` followed by `extra`, in order.
pub(crate) fn session_url(
    endpoint: &Url,
    session_id: &str,
    customer_id: &str,
    extra: &[QueryItem<'_>],
) -> Url {
    let mut url = endpoint.clone();
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair(PARAM_SESSION_ID, session_id)
            .append_pair(PARAM_CUSTOMER_ID, customer_id);
        for (key, value) in extra {
            match value {
                Some(value) => query.append_pair(key, value),
                None => query.append_key_only(key),
            };
        }
    }
    url
}

/// GET a session-scoped page.
pub(crate) async fn get_page(
    client: &Client,
    url: Url,
    session_id: &str,
) -> Result<PanelResponse> {
    let url_for_log = redact_query_param(url.as_str(), PARAM_SESSION_ID, session_id);
    HttpUtils::execute_request(client.get(url), PROVIDER_NAME, "GET", &url_for_log).await
}

impl StratoProvider {
    /// Session-scoped URL using the resolved customer id.
    pub(crate) fn url(&self, extra: &[QueryItem<'_>]) -> Url {
        session_url(
            &self.endpoint,
            &self.session.session_id,
            &self.session.customer_id,
            extra,
        )
    }

    /// 执行 GET 请求
    pub(crate) async fn get(&self, extra: &[QueryItem<'_>]) -> Result<PanelResponse> {
        get_page(&self.client, self.url(extra), &self.session.session_id).await
    }

    /// 执行表单 POST 请求
    pub(crate) async fn post_form(
        &self,
        extra: &[QueryItem<'_>],
        body: String,
    ) -> Result<PanelResponse> {
        let url = self.url(extra);
        let url_for_log =
            redact_query_param(url.as_str(), PARAM_SESSION_ID, &self.session.session_id);
        HttpUtils::execute_request(
            self.client
                .post(url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body),
            PROVIDER_NAME,
            "POST",
            &url_for_log,
        )
        .await
    }
}
