//! Strato DnsConfigProvider trait 实现

use async_trait::async_trait;

use crate::error::{ReadFailure, Result, WriteFailure};
use crate::http_client::ResponseClass;
use crate::traits::DnsConfigProvider;
use crate::types::DnsConfig;

use super::error::{PROVIDER_NAME, read_failed, write_failed};
use super::form::encode_config_form;
use super::parse::parse_dns_config;
use super::{
    ACTION_CHANGE_TXT_RECORDS, ACTION_SHOW_TXT_RECORDS, NODE_MANAGE_DOMAINS, PARAM_NODE,
    PARAM_VHOST, StratoProvider,
};

#[async_trait]
impl DnsConfigProvider for StratoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    async fn get_configuration(&self) -> Result<DnsConfig> {
        let response = self
            .get(&[
                (PARAM_NODE, Some(NODE_MANAGE_DOMAINS)),
                (ACTION_SHOW_TXT_RECORDS, None),
                (PARAM_VHOST, Some(self.domain.as_str())),
            ])
            .await?;

        if response.status != 200 {
            return Err(read_failed(
                &self.domain,
                ReadFailure::FetchFailed(response.status),
            ));
        }

        let config = parse_dns_config(&response.body, &self.domain)?;
        log::debug!(
            "[{PROVIDER_NAME}] {}: dmarc_type={}, spf_type={}, {} record(s)",
            self.domain,
            config.dmarc_type,
            config.spf_type,
            config.records.len()
        );
        Ok(config)
    }

    async fn set_configuration(&self, config: &DnsConfig) -> Result<()> {
        let body = encode_config_form(&self.session.session_id, &self.domain, config);
        let response = self
            .post_form(&[(ACTION_CHANGE_TXT_RECORDS, None)], body)
            .await?;

        match response.classify() {
            ResponseClass::Redirect(_) => {
                log::info!(
                    "[{PROVIDER_NAME}] {}: configuration submitted ({} record(s))",
                    self.domain,
                    config.records.len()
                );
                Ok(())
            }
            ResponseClass::Rendered => {
                log::warn!("[{PROVIDER_NAME}] {}: update rejected by panel", self.domain);
                Err(write_failed(&self.domain, WriteFailure::Rejected))
            }
            ResponseClass::Other(status) => Err(write_failed(
                &self.domain,
                WriteFailure::UnexpectedStatus(status),
            )),
        }
    }
}
