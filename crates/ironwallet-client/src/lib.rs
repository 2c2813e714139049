//! Iron Wallet Client - SDK for the wallet backend
//!
//! HTTP client for the Iron Wallet REST API:
//! - [`SessionContext`] over a pluggable [`CredentialStore`]
//! - [`ApiGateway`], which attaches credentials and signals 401s
//! - typed endpoint clients behind [`WalletClient`]
//! - a moka-backed query cache, [`CachedWalletClient`]

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod interceptor;
pub mod investments;
pub mod metrics;
pub mod profile;
pub mod session;
pub mod store;
pub mod transactions;

pub use cache::{CacheConfig, CachedWalletClient, QueryKey};
pub use client::WalletClient;
pub use config::{ClientConfig, ConfigError};
pub use endpoint::Endpoint;
pub use error::ClientError;
pub use gateway::{ApiGateway, UnauthorizedEvent, UnauthorizedListener};
pub use interceptor::CallAuth;
pub use session::SessionContext;
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StoreError};

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
