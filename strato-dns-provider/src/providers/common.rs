//! Provider 公共工具函数

use reqwest::Client;
use reqwest::redirect::Policy;
use scraper::Selector;

use crate::error::{ProviderError, Result};
use crate::types::ClientOptions;

// ============ HTTP Client ============

/// 创建会话型 HTTP Client
///
/// The panel reports login and update success through the 302 itself, so redirects are
/// never followed. Cookies are kept for the client's whole lifetime; together with the
/// `sessionID` query parameter they form the session proof.
pub fn create_http_client(options: &ClientOptions, provider: &str) -> Result<Client> {
    let mut builder = Client::builder()
        .cookie_store(true)
        .redirect(Policy::none());

    if let Some(timeout) = options.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(user_agent) = &options.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    builder.build().map_err(|e| ProviderError::InvalidParameter {
        provider: provider.to_string(),
        param: "client_options".to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

// ============ HTML 选择器 ============

/// Compile a CSS selector, mapping syntax errors to `ParseError`.
pub fn compile_selector(css: &str, provider: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ProviderError::ParseError {
        provider: provider.to_string(),
        detail: format!("invalid selector '{css}': {e}"),
    })
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
pub fn escape_attr_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
