use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsConfig, DnsRecord, RecordChange};

/// Provider 错误构造 Trait（内部使用）
/// 各 Provider 实现此 trait 以统一错误中的 provider 标识与上下文
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 快捷方法：参数错误
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// DNS 配置 Provider Trait
///
/// A provider holds one authenticated session scoped to one domain. Implementations
/// must not be driven concurrently; the panel's session state is positional and
/// single-writer.
#[async_trait]
pub trait DnsConfigProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Domain this provider manages.
    fn domain(&self) -> &str;

    /// 获取当前 TXT/SPF/DMARC 配置
    async fn get_configuration(&self) -> Result<DnsConfig>;

    /// 提交完整配置（覆盖）
    async fn set_configuration(&self, config: &DnsConfig) -> Result<()>;

    /// 添加一条记录并回读校验
    ///
    /// A record that is already present is not written again.
    async fn add_record(&self, record: &DnsRecord) -> Result<RecordChange> {
        let current = self.get_configuration().await?;
        if current.contains(record) {
            log::info!("[{}] Record already exists: {record}", self.id());
            return Ok(RecordChange::AlreadyPresent);
        }

        self.set_configuration(&current.with_record(record.clone()))
            .await?;

        let updated = self.get_configuration().await?;
        if !updated.contains(record) {
            return Err(ProviderError::VerificationFailed {
                provider: self.id().to_string(),
                domain: self.domain().to_string(),
                detail: format!("record missing after update ({record})"),
            });
        }
        log::info!("[{}] Record added: {record}", self.id());
        Ok(RecordChange::Added)
    }

    /// 删除一条记录（含所有重复项）并回读校验
    async fn remove_record(&self, record: &DnsRecord) -> Result<RecordChange> {
        let current = self.get_configuration().await?;
        if !current.contains(record) {
            log::info!("[{}] Record not found: {record}", self.id());
            return Ok(RecordChange::NotFound);
        }

        self.set_configuration(&current.without_record(record))
            .await?;

        let updated = self.get_configuration().await?;
        if updated.contains(record) {
            return Err(ProviderError::VerificationFailed {
                provider: self.id().to_string(),
                domain: self.domain().to_string(),
                detail: format!("record still present after update ({record})"),
            });
        }
        log::info!("[{}] Record removed: {record}", self.id());
        Ok(RecordChange::Removed)
    }
}
