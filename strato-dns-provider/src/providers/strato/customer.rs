//! Customer id (`cID`) lookup on the dashboard

use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::error::{ResolveFailure, Result};
use crate::providers::common::{compile_selector, escape_attr_value};

use super::error::{PROVIDER_NAME, resolve_failed};
use super::http::{get_page, session_url};
use super::{CUSTOMER_ID_PLACEHOLDER, NODE_CUSTOMER_ENTRY, PARAM_CUSTOMER_ID, PARAM_NODE};

const ORDER_ATTRIBUTE: &str = "data-pkg-name-order";

/// Fetch the customer entry page and find the `cID` of `order`.
pub(crate) async fn resolve_customer_id(
    client: &Client,
    endpoint: &Url,
    session_id: &str,
    order: &str,
) -> Result<String> {
    let url = session_url(
        endpoint,
        session_id,
        CUSTOMER_ID_PLACEHOLDER,
        &[(PARAM_NODE, Some(NODE_CUSTOMER_ENTRY))],
    );
    let response = get_page(client, url, session_id).await?;
    if !(200..300).contains(&response.status) {
        return Err(resolve_failed(
            order,
            ResolveFailure::FetchFailed(response.status),
        ));
    }

    let customer_id = extract_customer_id(&response.body, order)?;
    log::info!("[{PROVIDER_NAME}] Order '{order}' resolved to cID {customer_id}");
    Ok(customer_id)
}

/// Locate the order container, its first link, and the link's `cID`.
pub(crate) fn extract_customer_id(html: &str, order: &str) -> Result<String> {
    let document = Html::parse_document(html);

    let container_selector = compile_selector(
        &format!(r#"div[{ORDER_ATTRIBUTE}="{}"]"#, escape_attr_value(order)),
        PROVIDER_NAME,
    )?;
    let link_selector = compile_selector("a", PROVIDER_NAME)?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| resolve_failed(order, ResolveFailure::OrderNotFound))?;
    let link = container
        .select(&link_selector)
        .next()
        .ok_or_else(|| resolve_failed(order, ResolveFailure::LinkNotFound))?;
    let href = link
        .value()
        .attr("href")
        .filter(|href| !href.is_empty())
        .ok_or_else(|| resolve_failed(order, ResolveFailure::EmptyLink))?;

    customer_id_from_href(href)
        .ok_or_else(|| resolve_failed(order, ResolveFailure::CustomerIdMissing))
}

/// Split the link's query on `&` and return the non-empty `cID` value.
pub(crate) fn customer_id_from_href(href: &str) -> Option<String> {
    let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);
    let query = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(_, query)| query);

    query
        .split('&')
        .find_map(|segment| {
            segment
                .split_once('=')
                .filter(|(key, _)| *key == PARAM_CUSTOMER_ID)
                .map(|(_, value)| value)
        })
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}
