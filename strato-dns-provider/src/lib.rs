//! # strato-dns-provider
//!
//! Manage the TXT, SPF and DMARC settings of a domain hosted at Strato through the
//! customer web panel. The panel has no API, so this crate emulates a browser session:
//!
//! 1. **Login** — an anonymous GET collects the session cookie, the credentials are
//!    POSTed, and the `302` answer carries the `sessionID` token in its `Location`.
//! 2. **Customer id** — the dashboard is scanned for the package tagged with the order
//!    label; its first link holds the `cID` that scopes all later requests.
//! 3. **Read** — the domain's TXT record form is parsed into a [`DnsConfig`].
//! 4. **Write** — a [`DnsConfig`] is encoded back into the form and submitted; a `302`
//!    means it was accepted.
//!
//! Redirects are never followed and cookies are kept for the lifetime of the provider.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use strato_dns_provider::{
//!     ClientOptions, DnsConfigProvider, DnsRecord, StratoCredentials, StratoProvider,
//!     STRATO_API_BASE,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = StratoCredentials {
//!         endpoint: STRATO_API_BASE.to_string(),
//!         identifier: "12345678".to_string(),
//!         password: "secret".to_string(),
//!         order: "ORDER1".to_string(),
//!         domain: "example.com".to_string(),
//!     };
//!
//!     // Logs in and resolves the customer id; fails if either step fails
//!     let provider = StratoProvider::connect(credentials, &ClientOptions::default()).await?;
//!
//!     let config = provider.get_configuration().await?;
//!     for record in &config.records {
//!         println!("{record}");
//!     }
//!
//!     provider
//!         .add_record(&DnsRecord::new("TXT", "_acme-challenge", "token"))
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Each protocol step
//! has its own variant with a classified reason:
//!
//! - [`ProviderError::AuthFailed`] — see [`AuthFailure`]
//! - [`ProviderError::ResolveFailed`] — see [`ResolveFailure`]
//! - [`ProviderError::ReadFailed`] — see [`ReadFailure`]
//! - [`ProviderError::WriteFailed`] — see [`WriteFailure`]
//!
//! Nothing is retried. A single failed request fails the operation.
//!
//! ## Concurrency
//!
//! A provider owns exactly one panel session. Calls on one provider must not overlap;
//! use one provider per logical session, or serialize access externally.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{
    AuthFailure, ProviderError, ReadFailure, ResolveFailure, Result, WriteFailure,
};

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsConfigProvider;

// Re-export types
pub use types::{ClientOptions, DnsConfig, DnsRecord, RecordChange, StratoCredentials};

// Re-export the concrete provider
pub use providers::{STRATO_API_BASE, Session, StratoProvider};
