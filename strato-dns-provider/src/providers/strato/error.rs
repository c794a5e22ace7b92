//! Strato error construction

use crate::error::{AuthFailure, ProviderError, ReadFailure, ResolveFailure, WriteFailure};
use crate::traits::ProviderErrorMapper;

pub(crate) const PROVIDER_NAME: &str = "strato";

/// Error context for code paths that run before a provider value exists.
pub(crate) struct ErrorScope;

impl ProviderErrorMapper for ErrorScope {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

pub(crate) fn auth_failed(reason: AuthFailure) -> ProviderError {
    ProviderError::AuthFailed {
        provider: PROVIDER_NAME.to_string(),
        reason,
    }
}

pub(crate) fn resolve_failed(order: &str, reason: ResolveFailure) -> ProviderError {
    ProviderError::ResolveFailed {
        provider: PROVIDER_NAME.to_string(),
        order: order.to_string(),
        reason,
    }
}

pub(crate) fn read_failed(domain: &str, reason: ReadFailure) -> ProviderError {
    ProviderError::ReadFailed {
        provider: PROVIDER_NAME.to_string(),
        domain: domain.to_string(),
        reason,
    }
}

pub(crate) fn write_failed(domain: &str, reason: WriteFailure) -> ProviderError {
    ProviderError::WriteFailed {
        provider: PROVIDER_NAME.to_string(),
        domain: domain.to_string(),
        reason,
    }
}
