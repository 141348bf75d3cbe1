use std::sync::Arc;

use serde_json::Value;

use crate::types::WotApiResponse;

use super::require_account_id;
use super::traits::ApiRequest;

/// Per-vehicle statistics accessors.
#[derive(Debug)]
pub struct TankStatsApi<T>(Arc<T>);

impl<T: ApiRequest> TankStatsApi<T> {
    pub fn new(api: Arc<T>) -> Self {
        Self(api)
    }

    /// Resolve an account name and fetch its per-vehicle statistics,
    /// returned as the full collection. Zero matches fails before the
    /// statistics fetch.
    pub async fn by_name(&self, name: &str) -> WotApiResponse<Value> {
        tracing::trace!("tank stats for {}", name);

        let account_id = require_account_id(&*self.0, name).await?;
        let env = self
            .0
            .request("tanks/stats", &[("account_id", account_id.to_string())])
            .await?;
        Ok(env.data)
    }

    /// Fetch per-vehicle statistics by numeric account id, unwrapped
    /// down to the single value under the account's key (the vehicle
    /// list), unlike [`TankStatsApi::by_name`] which returns the whole
    /// payload.
    pub async fn by_id(&self, account_id: u64) -> WotApiResponse<Value> {
        tracing::trace!("tank stats for id {}", account_id);

        let env = self
            .0
            .request("tanks/stats", &[("account_id", account_id.to_string())])
            .await?;
        Ok(env.into_single())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::api::mock::MockTransport;
    use crate::types::{EntityKind, WotApiError};

    use super::TankStatsApi;

    #[tokio::test]
    async fn by_name_returns_the_whole_payload() {
        let transport = Arc::new(MockTransport::with_responses(vec![
            Ok(MockTransport::envelope(json!({
                "status": "ok",
                "meta": { "count": 1 },
                "data": [{ "account_id": 42, "nickname": "Foo" }]
            }))),
            Ok(MockTransport::envelope(json!({
                "status": "ok",
                "meta": { "count": 1 },
                "data": { "42": [{ "tank_id": 1 }] }
            }))),
        ]));
        let api = TankStatsApi::new(Arc::clone(&transport));

        let stats = api.by_name("Foo").await.unwrap();

        assert_eq!(stats, json!({ "42": [{ "tank_id": 1 }] }));
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "account/list");
        assert_eq!(calls[1].0, "tanks/stats");
    }

    #[tokio::test]
    async fn by_name_halts_on_zero_matches() {
        let transport = Arc::new(MockTransport::with_responses(vec![Ok(
            MockTransport::envelope(json!({ "status": "ok", "meta": { "count": 0 }, "data": [] })),
        )]));
        let api = TankStatsApi::new(Arc::clone(&transport));

        let res = api.by_name("Nobody").await;

        assert!(matches!(
            res,
            Err(WotApiError::NotFound(EntityKind::Account))
        ));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn by_id_unwraps_down_to_the_vehicle_list() {
        let transport = Arc::new(MockTransport::with_responses(vec![Ok(
            MockTransport::envelope(json!({
                "status": "ok",
                "meta": { "count": 1 },
                "data": { "42": [{ "tank_id": 1 }, { "tank_id": 2 }] }
            })),
        )]));
        let api = TankStatsApi::new(Arc::clone(&transport));

        let stats = api.by_id(42).await.unwrap();

        assert_eq!(stats, json!([{ "tank_id": 1 }, { "tank_id": 2 }]));
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].1,
            vec![("account_id".to_string(), "42".to_string())]
        );
    }
}
