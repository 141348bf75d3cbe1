use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::types::WotApiResponse;

use super::require_account_id;
use super::traits::ApiRequest;

/// Identifier accepted by [`AccountApi::stats`]: a nickname to search
/// for, or an already known numeric account id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountIdent {
    Name(String),
    Id(u64),
}

impl From<&str> for AccountIdent {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AccountIdent {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for AccountIdent {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

/// Single entry of an `account/list` search response.
#[derive(Deserialize, Debug, Clone)]
pub struct AccountCandidate {
    pub account_id: u64,
    pub nickname: String,
}

/// Account statistics accessors.
#[derive(Debug)]
pub struct AccountApi<T>(Arc<T>);

impl<T: ApiRequest> AccountApi<T> {
    pub fn new(api: Arc<T>) -> Self {
        Self(api)
    }

    /// Fetch the profile record for an account.
    ///
    /// A nickname is resolved first and zero matches fails without a
    /// detail request being issued. A numeric id goes straight to the
    /// detail fetch with no existence check, so an unknown id surfaces
    /// as whatever the detail endpoint answers.
    pub async fn stats(&self, account: impl Into<AccountIdent>) -> WotApiResponse<Value> {
        let account = account.into();
        tracing::trace!("account stats for {:?}", account);

        let account_id = match account {
            AccountIdent::Name(name) => require_account_id(&*self.0, &name).await?,
            AccountIdent::Id(id) => id,
        };

        let env = self
            .0
            .request("account/info", &[("account_id", account_id.to_string())])
            .await?;
        Ok(env.into_single())
    }

    /// Fetch per-vehicle statistics for a named account. The whole
    /// statistics payload is returned, not a single unwrapped record.
    pub async fn tank_stats_list(&self, name: &str) -> WotApiResponse<Value> {
        tracing::trace!("account tank stats for {}", name);

        let account_id = require_account_id(&*self.0, name).await?;
        let env = self
            .0
            .request("tanks/stats", &[("account_id", account_id.to_string())])
            .await?;
        Ok(env.data)
    }

    /// Fetch the achievements record for a named account.
    pub async fn achievements(&self, name: &str) -> WotApiResponse<Value> {
        tracing::trace!("account achievements for {}", name);

        let account_id = require_account_id(&*self.0, name).await?;
        let env = self
            .0
            .request("account/achievements", &[("account_id", account_id.to_string())])
            .await?;
        Ok(env.into_single())
    }
}
