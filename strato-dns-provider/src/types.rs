use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ 记录与配置 ============

/// One TXT-family record as exposed by the panel's record form.
///
/// Two records are equal only if type, prefix and value are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record type from the panel's closed vocabulary (e.g. `TXT`, `TXT-SPF`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Subdomain label; empty when the row carries no prefix.
    pub prefix: String,
    /// Record content, passed through verbatim.
    pub value: String,
}

impl DnsRecord {
    pub fn new(
        record_type: impl Into<String>,
        prefix: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            prefix: prefix.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type: '{}', Prefix: '{}', Value: '{}'",
            self.record_type, self.prefix, self.value
        )
    }
}

/// The full TXT/SPF/DMARC configuration of one domain.
///
/// `dmarc_type` and `spf_type` are opaque option values chosen by the panel and must be
/// sent back as read. `records` keeps the order in which the panel rendered them, since
/// the panel matches repeated form fields by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsConfig {
    pub dmarc_type: String,
    pub spf_type: String,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

impl DnsConfig {
    /// Whether an identical record is part of this configuration.
    pub fn contains(&self, record: &DnsRecord) -> bool {
        self.records.iter().any(|r| r == record)
    }

    /// Copy of this configuration with `record` appended.
    #[must_use]
    pub fn with_record(&self, record: DnsRecord) -> Self {
        let mut next = self.clone();
        next.records.push(record);
        next
    }

    /// Copy of this configuration with every record identical to `record` removed.
    #[must_use]
    pub fn without_record(&self, record: &DnsRecord) -> Self {
        Self {
            dmarc_type: self.dmarc_type.clone(),
            spf_type: self.spf_type.clone(),
            records: self
                .records
                .iter()
                .filter(|r| *r != record)
                .cloned()
                .collect(),
        }
    }
}

/// Outcome of an add/remove orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordChange {
    /// The record was written and is present after re-reading.
    Added,
    /// The record was already there; nothing was written.
    AlreadyPresent,
    /// The record was written away and is absent after re-reading.
    Removed,
    /// The record was not there; nothing was written.
    NotFound,
}

impl RecordChange {
    /// Whether a configuration write happened.
    pub fn is_change(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }
}

// ============ 凭证与客户端选项 ============

/// Everything needed to open a panel session for one domain.
#[derive(Clone, Serialize, Deserialize)]
pub struct StratoCredentials {
    /// Customer service endpoint, e.g. `https://www.strato.de/apps/CustomerService`.
    pub endpoint: String,
    /// Login identifier (customer number or e-mail).
    pub identifier: String,
    pub password: String,
    /// Package order label as shown on the dashboard (`data-pkg-name-order`).
    pub order: String,
    /// (Sub-)domain whose records are managed.
    pub domain: String,
}

impl std::fmt::Debug for StratoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StratoCredentials")
            .field("endpoint", &self.endpoint)
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .field("order", &self.order)
            .field("domain", &self.domain)
            .finish()
    }
}

/// Transport options. Every `None` keeps the HTTP stack's default.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub connect_timeout: Option<Duration>,
    /// Whole-request deadline; without it a stalled panel blocks the caller.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}
