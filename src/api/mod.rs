pub mod account;
pub mod clan;
pub mod client;
pub mod metrics;
pub mod tanks;
pub mod traits;

pub use account::{AccountApi, AccountIdent};
pub use clan::ClanApi;
pub use client::ApiClient;
pub use tanks::TankStatsApi;
pub use traits::ApiRequest;

use std::sync::Arc;

use account::AccountCandidate;
use clan::ClanCandidate;

use crate::config::{ClientConfig, ConfigError};
use crate::types::{EntityKind, Envelope, WotApiError, WotApiResponse};

/// High level client exposing the grouped statistics accessors.
#[derive(Debug)]
pub struct WotApiClient {
    base: Arc<ApiClient>,
}

impl WotApiClient {
    /// Create a new client using the provided configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base: Arc::new(ApiClient::new(config)),
        }
    }

    /// Create a new client configured from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn account(&self) -> AccountApi<ApiClient> {
        AccountApi::new(Arc::clone(&self.base))
    }

    pub fn clans(&self) -> ClanApi<ApiClient> {
        ClanApi::new(Arc::clone(&self.base))
    }

    pub fn tank_stats(&self) -> TankStatsApi<ApiClient> {
        TankStatsApi::new(Arc::clone(&self.base))
    }

    /// Liveness check against the parameterless `ping` resource. The
    /// envelope is returned unmodified.
    pub async fn ping(&self) -> WotApiResponse<Envelope> {
        self.base.request("ping", &[]).await
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = Arc::clone(&self.base.metrics);
        tokio::spawn(async move { metrics.log_loop().await });
    }
}

/// Search for an account by nickname. The raw search envelope is returned
/// so callers can inspect the match count directly.
async fn resolve_account_id<T: ApiRequest + ?Sized>(
    api: &T,
    name: &str,
) -> WotApiResponse<Envelope> {
    api.request("account/list", &[("search", name.to_string())])
        .await
}

/// Search for a clan by name, same shape as [`resolve_account_id`].
async fn resolve_clan_id<T: ApiRequest + ?Sized>(api: &T, name: &str) -> WotApiResponse<Envelope> {
    api.request("clans/list", &[("search", name.to_string())])
        .await
}

/// Resolve an account name to its numeric id. Zero matches fails with
/// [`WotApiError::NotFound`] before any dependent request is issued.
pub(crate) async fn require_account_id<T: ApiRequest + ?Sized>(
    api: &T,
    name: &str,
) -> WotApiResponse<u64> {
    let lookup = resolve_account_id(api, name).await?;
    if lookup.match_count() == 0 {
        return Err(WotApiError::NotFound(EntityKind::Account));
    }

    let candidates: Vec<AccountCandidate> = lookup.candidates()?;
    candidates
        .first()
        .map(|c| c.account_id)
        .ok_or(WotApiError::NotFound(EntityKind::Account))
}

/// Resolve a clan name to its numeric id, halting on zero matches.
pub(crate) async fn require_clan_id<T: ApiRequest + ?Sized>(
    api: &T,
    name: &str,
) -> WotApiResponse<u64> {
    let lookup = resolve_clan_id(api, name).await?;
    if lookup.match_count() == 0 {
        return Err(WotApiError::NotFound(EntityKind::Clan));
    }

    let candidates: Vec<ClanCandidate> = lookup.candidates()?;
    candidates
        .first()
        .map(|c| c.clan_id)
        .ok_or(WotApiError::NotFound(EntityKind::Clan))
}
