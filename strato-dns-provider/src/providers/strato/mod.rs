//! Strato customer panel provider
//!
//! The panel has no API. This provider logs in like a browser, looks up the package's
//! customer id on the dashboard and then reads/writes the TXT record form of one domain.

mod customer;
mod error;
mod form;
mod http;
mod parse;
mod provider;
mod session;

use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::traits::ProviderErrorMapper;
use crate::types::{ClientOptions, StratoCredentials};
use crate::utils::log_sanitizer::mask_secret;

use error::ErrorScope;

/// Default customer service endpoint.
pub const STRATO_API_BASE: &str = "https://www.strato.de/apps/CustomerService";

// Query/form parameter names
pub(crate) const PARAM_SESSION_ID: &str = "sessionID";
pub(crate) const PARAM_CUSTOMER_ID: &str = "cID";
pub(crate) const PARAM_NODE: &str = "node";
pub(crate) const PARAM_VHOST: &str = "vhost";

// Views and actions
pub(crate) const NODE_CUSTOMER_ENTRY: &str = "kds_CustomerEntryPage";
pub(crate) const NODE_MANAGE_DOMAINS: &str = "ManageDomains";
pub(crate) const ACTION_SHOW_TXT_RECORDS: &str = "action_show_txt_records";
pub(crate) const ACTION_CHANGE_TXT_RECORDS: &str = "action_change_txt_records";

/// `cID` used on the dashboard request, before the real one is known.
pub(crate) const CUSTOMER_ID_PLACEHOLDER: &str = "0";

/// An authenticated panel session.
///
/// Both values are fixed once the provider is connected; there is no re-login.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    session_id: String,
    customer_id: String,
}

impl Session {
    /// Token carried as `sessionID` on every request after login.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Resolved package id (`cID`).
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &mask_secret(&self.session_id))
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

/// Strato DNS Provider
#[derive(Debug)]
pub struct StratoProvider {
    pub(crate) client: Client,
    pub(crate) endpoint: Url,
    pub(crate) domain: String,
    pub(crate) session: Session,
}

impl StratoProvider {
    /// Log in and resolve the customer id for `credentials.order`.
    ///
    /// Both steps run eagerly; a provider value only exists once the session is usable.
    pub async fn connect(credentials: StratoCredentials, options: &ClientOptions) -> Result<Self> {
        let mapper = ErrorScope;
        let endpoint = Url::parse(&credentials.endpoint)
            .map_err(|e| mapper.invalid_parameter("endpoint", e))?;
        let client = create_http_client(options, mapper.provider_name())?;

        let session_id = session::authenticate(
            &client,
            &endpoint,
            &credentials.identifier,
            &credentials.password,
        )
        .await?;

        let customer_id =
            customer::resolve_customer_id(&client, &endpoint, &session_id, &credentials.order)
                .await?;

        Ok(Self {
            client,
            endpoint,
            domain: credentials.domain,
            session: Session {
                session_id,
                customer_id,
            },
        })
    }

    /// The session established by [`connect`](Self::connect).
    pub fn session(&self) -> &Session {
        &self.session
    }
}
