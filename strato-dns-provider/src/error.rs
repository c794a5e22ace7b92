use serde::{Deserialize, Serialize};

/// Why the login handshake failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "status")]
pub enum AuthFailure {
    /// The panel re-rendered the login page (HTTP 200).
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The panel redirected, but the `Location` carried no usable `sessionID`.
    #[error("malformed redirect: sessionID not found in Location")]
    MalformedRedirect,
    /// Neither a redirect nor a re-rendered login page.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
}

/// Why the customer id (`cID`) could not be located on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "status")]
pub enum ResolveFailure {
    /// The dashboard page could not be fetched.
    #[error("dashboard fetch failed with status {0}")]
    FetchFailed(u16),
    /// No package container is tagged with the order label.
    #[error("order not found")]
    OrderNotFound,
    /// The package container holds no hyperlink.
    #[error("no link inside the order container")]
    LinkNotFound,
    /// The hyperlink has no target.
    #[error("link target is empty")]
    EmptyLink,
    /// The hyperlink target has no `cID` parameter.
    #[error("cID not found in link")]
    CustomerIdMissing,
}

/// Why the DNS management page could not be turned into a [`DnsConfig`](crate::DnsConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "status")]
pub enum ReadFailure {
    /// The records page answered with a non-200 status.
    #[error("failed to fetch TXT records (status {0})")]
    FetchFailed(u16),
    /// The TXT record form is not on the page.
    #[error("form not found")]
    FormNotFound,
    /// No checked `dmarc_type` option with a value.
    #[error("dmarc_type selection not found")]
    DmarcTypeMissing,
    /// No checked `spf_type` option with a value.
    #[error("spf_type selection not found")]
    SpfTypeMissing,
}

/// Why a configuration submission was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "status")]
pub enum WriteFailure {
    /// The panel re-rendered the form (HTTP 200), usually with validation errors.
    #[error("update rejected")]
    Rejected,
    /// Neither a redirect nor a re-rendered form.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),
}

/// Unified error type for all panel operations.
///
/// Every failure the panel protocol can produce maps to exactly one variant, so callers
/// can tell a bad password from a changed page layout without inspecting messages.
/// Transport failures ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout))
/// are surfaced unchanged from the HTTP stack. Nothing is retried internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out (only possible when a timeout was configured).
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The login handshake failed.
    AuthFailed {
        /// Provider that produced the error.
        provider: String,
        /// Classified cause.
        reason: AuthFailure,
    },

    /// The customer id for the order could not be resolved.
    ResolveFailed {
        /// Provider that produced the error.
        provider: String,
        /// Order label that was looked up.
        order: String,
        /// Classified cause.
        reason: ResolveFailure,
    },

    /// The DNS configuration could not be read.
    ReadFailed {
        /// Provider that produced the error.
        provider: String,
        /// Domain whose configuration was requested.
        domain: String,
        /// Classified cause.
        reason: ReadFailure,
    },

    /// The DNS configuration could not be written.
    WriteFailed {
        /// Provider that produced the error.
        provider: String,
        /// Domain whose configuration was submitted.
        domain: String,
        /// Classified cause.
        reason: WriteFailure,
    },

    /// A write was accepted but the re-read configuration does not reflect it.
    VerificationFailed {
        /// Provider that produced the error.
        provider: String,
        /// Domain whose configuration was changed.
        domain: String,
        /// Description of the mismatch.
        detail: String,
    },

    /// A caller-supplied parameter is invalid (e.g., an endpoint that is not a URL).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to process the panel's markup.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed {
                reason: AuthFailure::InvalidCredentials,
                ..
            } | Self::ResolveFailed {
                reason: ResolveFailure::OrderNotFound,
                ..
            } | Self::WriteFailed {
                reason: WriteFailure::Rejected,
                ..
            } | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::AuthFailed { provider, reason } => {
                write!(f, "[{provider}] Authentication failed: {reason}")
            }
            Self::ResolveFailed {
                provider,
                order,
                reason,
            } => {
                write!(f, "[{provider}] Failed to resolve order '{order}': {reason}")
            }
            Self::ReadFailed {
                provider,
                domain,
                reason,
            } => {
                write!(f, "[{provider}] Failed to read '{domain}': {reason}")
            }
            Self::WriteFailed {
                provider,
                domain,
                reason,
            } => {
                write!(f, "[{provider}] Failed to update '{domain}': {reason}")
            }
            Self::VerificationFailed {
                provider,
                domain,
                detail,
            } => {
                write!(f, "[{provider}] Verification failed for '{domain}': {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
