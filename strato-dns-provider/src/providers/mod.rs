//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod strato;

pub use strato::{STRATO_API_BASE, Session, StratoProvider};
