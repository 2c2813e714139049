//! Query caching layer
//!
//! Provides a caching wrapper around [`WalletClient`] so that views rendered
//! back to back (dashboard, then deposit, then dashboard again) do not refetch
//! the same data. Entries are keyed by a hash of the session credential, so a
//! different login never sees another session's data.
//!
//! Mutations made through [`CachedWalletClient`] invalidate the queries they
//! affect. Logout and unauthorized handling call
//! [`CachedWalletClient::invalidate_all`].
//!
//! # Usage
//!
//! ```ignore
//! let cached = CachedWalletClient::new(client, CacheConfig::default());
//!
//! // First call hits the backend
//! let profile = cached.profile().await?;
//!
//! // Subsequent calls within TTL return the cached value
//! let again = cached.profile().await?;
//! ```

use std::time::Duration;

use ironwallet_types::{
    ActivateInvestment, Confirmation, DashboardStats, DepositRequest, InvestmentPlan,
    ProfileUpdate, Transaction, UserProfile, WithdrawRequest,
};
use moka::future::Cache;
use tracing::{debug, instrument, trace};

use crate::metrics::record_cache_lookup;
use crate::{ClientError, WalletClient};

/// Configuration for the query cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for per-user queries (profile, stats, transactions).
    /// Default: 30 seconds
    pub query_ttl: Duration,

    /// TTL for the plan catalog.
    /// Default: 5 minutes
    pub plans_ttl: Duration,

    /// Maximum number of entries per query.
    /// Default: 64
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            query_ttl: Duration::from_secs(30),
            plans_ttl: Duration::from_secs(300),
            max_entries: 64,
        }
    }
}

impl CacheConfig {
    /// Create a new cache config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-user query TTL.
    #[must_use]
    pub fn with_query_ttl(mut self, ttl: Duration) -> Self {
        self.query_ttl = ttl;
        self
    }

    /// Set the plan catalog TTL.
    #[must_use]
    pub fn with_plans_ttl(mut self, ttl: Duration) -> Self {
        self.plans_ttl = ttl;
        self
    }
}

/// A cached read query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Profile,
    DashboardStats,
    Plans,
    Transactions,
}

impl QueryKey {
    /// Name for metric labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::DashboardStats => "dashboard_stats",
            Self::Plans => "plans",
            Self::Transactions => "transactions",
        }
    }

    /// Queries whose data a balance-moving mutation changes.
    pub const BALANCE_DEPENDENT: [Self; 3] =
        [Self::Profile, Self::DashboardStats, Self::Transactions];
}

/// Cached wallet client wrapper.
///
/// Thread-safe; clones share the same caches.
#[derive(Clone)]
pub struct CachedWalletClient {
    inner: WalletClient,
    profile_cache: Cache<String, UserProfile>,
    stats_cache: Cache<String, DashboardStats>,
    plans_cache: Cache<String, Vec<InvestmentPlan>>,
    transactions_cache: Cache<String, Vec<Transaction>>,
    config: CacheConfig,
}

impl std::fmt::Debug for CachedWalletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedWalletClient")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

macro_rules! cached_query {
    ($self:ident, $cache:ident, $key:expr, $fetch:expr) => {{
        let cache_key = $self.cache_key();
        if let Some(cached) = $self.$cache.get(&cache_key).await {
            trace!(query = $key.as_str(), "cache hit");
            record_cache_lookup($key.as_str(), true);
            return Ok(cached);
        }
        record_cache_lookup($key.as_str(), false);

        let result = $fetch.await?;
        $self.$cache.insert(cache_key, result.clone()).await;
        Ok(result)
    }};
}

impl CachedWalletClient {
    /// Create a new cached client.
    pub fn new(client: WalletClient, config: CacheConfig) -> Self {
        Self {
            inner: client,
            profile_cache: build_cache(config.max_entries, config.query_ttl),
            stats_cache: build_cache(config.max_entries, config.query_ttl),
            plans_cache: build_cache(config.max_entries, config.plans_ttl),
            transactions_cache: build_cache(config.max_entries, config.query_ttl),
            config,
        }
    }

    /// Get the underlying client for operations not covered by cache.
    pub fn inner(&self) -> &WalletClient {
        &self.inner
    }

    /// Get the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            profile_entries: self.profile_cache.entry_count(),
            stats_entries: self.stats_cache.entry_count(),
            plans_entries: self.plans_cache.entry_count(),
            transactions_entries: self.transactions_cache.entry_count(),
        }
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.profile_cache.invalidate_all();
        self.stats_cache.invalidate_all();
        self.plans_cache.invalidate_all();
        self.transactions_cache.invalidate_all();
        debug!("query cache cleared");
    }

    /// Drop every entry of one query.
    pub fn invalidate(&self, key: QueryKey) {
        match key {
            QueryKey::Profile => self.profile_cache.invalidate_all(),
            QueryKey::DashboardStats => self.stats_cache.invalidate_all(),
            QueryKey::Plans => self.plans_cache.invalidate_all(),
            QueryKey::Transactions => self.transactions_cache.invalidate_all(),
        }
        trace!(query = key.as_str(), "query invalidated");
    }

    fn invalidate_many(&self, keys: &[QueryKey]) {
        for key in keys {
            self.invalidate(*key);
        }
    }

    fn cache_key(&self) -> String {
        hash_token(self.inner.session().token().as_deref().unwrap_or(""))
    }

    // =========================================================================
    // Cached Queries
    // =========================================================================

    /// Current user's profile.
    #[instrument(skip(self), level = "debug")]
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        cached_query!(self, profile_cache, QueryKey::Profile, self.inner.profile().get_profile())
    }

    /// Dashboard aggregates.
    #[instrument(skip(self), level = "debug")]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        cached_query!(self, stats_cache, QueryKey::DashboardStats, self.inner.dashboard().stats())
    }

    /// Investment plan catalog.
    #[instrument(skip(self), level = "debug")]
    pub async fn plans(&self) -> Result<Vec<InvestmentPlan>, ClientError> {
        cached_query!(self, plans_cache, QueryKey::Plans, self.inner.investments().list_plans())
    }

    /// Transaction history.
    #[instrument(skip(self), level = "debug")]
    pub async fn transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        cached_query!(
            self,
            transactions_cache,
            QueryKey::Transactions,
            self.inner.transactions().list()
        )
    }

    // =========================================================================
    // Mutations (never cached, invalidate what they change)
    // =========================================================================

    /// Save the profile and invalidate the cached copy.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ClientError> {
        let profile = self.inner.profile().update_profile(update).await?;
        self.invalidate(QueryKey::Profile);
        Ok(profile)
    }

    /// Submit a deposit.
    pub async fn deposit(&self, request: &DepositRequest) -> Result<Confirmation, ClientError> {
        let confirmation = self.inner.transactions().deposit(request).await?;
        self.invalidate_many(&QueryKey::BALANCE_DEPENDENT);
        Ok(confirmation)
    }

    /// Submit a withdrawal.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<Confirmation, ClientError> {
        let confirmation = self.inner.transactions().withdraw(request).await?;
        self.invalidate_many(&QueryKey::BALANCE_DEPENDENT);
        Ok(confirmation)
    }

    /// Activate an investment plan.
    pub async fn activate_investment(
        &self,
        request: &ActivateInvestment,
    ) -> Result<Confirmation, ClientError> {
        let confirmation = self.inner.investments().activate(request).await?;
        self.invalidate_many(&QueryKey::BALANCE_DEPENDENT);
        Ok(confirmation)
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cached profile entries
    pub profile_entries: u64,
    /// Number of cached dashboard stats entries
    pub stats_entries: u64,
    /// Number of cached plan catalog entries
    pub plans_entries: u64,
    /// Number of cached transaction list entries
    pub transactions_entries: u64,
}

impl CacheStats {
    /// Total number of cached entries.
    pub fn total_entries(&self) -> u64 {
        self.profile_entries + self.stats_entries + self.plans_entries + self.transactions_entries
    }
}

fn build_cache<V>(max_entries: u64, ttl: Duration) -> Cache<String, V>
where
    V: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(max_entries)
        .time_to_live(ttl)
        .build()
}

/// Hash a credential for use as a cache key.
///
/// Raw credentials never end up in cache keys.
fn hash_token(token: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    token.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
