use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Envelope, WotApiResponse};

use super::require_clan_id;
use super::traits::ApiRequest;

/// Single entry of a `clans/list` search response.
#[derive(Deserialize, Debug, Clone)]
pub struct ClanCandidate {
    pub clan_id: u64,
    pub name: String,
    pub tag: String,
}

/// Clan info accessors.
#[derive(Debug)]
pub struct ClanApi<T>(Arc<T>);

impl<T: ApiRequest> ClanApi<T> {
    pub fn new(api: Arc<T>) -> Self {
        Self(api)
    }

    /// Resolve a clan name and fetch its detail record, unwrapped from
    /// the envelope. Zero matches fails before the detail fetch.
    pub async fn by_name(&self, name: &str) -> WotApiResponse<Value> {
        tracing::trace!("clan info for {}", name);

        let clan_id = require_clan_id(&*self.0, name).await?;
        let env = self
            .0
            .request("clans/info", &[("clan_id", clan_id.to_string())])
            .await?;
        Ok(env.into_single())
    }

    /// Fetch clan detail by numeric id. Unlike [`ClanApi::by_name`] the
    /// envelope is returned whole, not unwrapped.
    pub async fn by_id(&self, clan_id: u64) -> WotApiResponse<Envelope> {
        tracing::trace!("clan info for id {}", clan_id);

        self.0
            .request("clans/info", &[("clan_id", clan_id.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::api::mock::MockTransport;
    use crate::types::{EntityKind, WotApiError};

    use super::ClanApi;

    #[tokio::test]
    async fn by_name_resolves_then_unwraps() {
        let transport = Arc::new(MockTransport::with_responses(vec![
            Ok(MockTransport::envelope(json!({
                "status": "ok",
                "meta": { "count": 1 },
                "data": [{ "clan_id": 100, "name": "Fear Naught", "tag": "FEAR" }]
            }))),
            Ok(MockTransport::envelope(json!({
                "status": "ok",
                "meta": { "count": 1 },
                "data": { "100": { "tag": "FEAR", "members_count": 72 } }
            }))),
        ]));
        let api = ClanApi::new(Arc::clone(&transport));

        let clan = api.by_name("Fear Naught").await.unwrap();

        assert_eq!(clan, json!({ "tag": "FEAR", "members_count": 72 }));
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "clans/list");
        assert_eq!(
            calls[0].1,
            vec![("search".to_string(), "Fear Naught".to_string())]
        );
        assert_eq!(calls[1].0, "clans/info");
        assert_eq!(calls[1].1, vec![("clan_id".to_string(), "100".to_string())]);
    }

    #[tokio::test]
    async fn by_name_halts_on_zero_matches() {
        let transport = Arc::new(MockTransport::with_responses(vec![Ok(
            MockTransport::envelope(json!({ "status": "ok", "meta": { "count": 0 }, "data": [] })),
        )]));
        let api = ClanApi::new(Arc::clone(&transport));

        let res = api.by_name("Nobody").await;

        assert!(matches!(res, Err(WotApiError::NotFound(EntityKind::Clan))));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn by_id_returns_the_envelope_unmodified() {
        let transport = Arc::new(MockTransport::with_responses(vec![Ok(
            MockTransport::envelope(json!({
                "status": "ok",
                "meta": { "count": 1 },
                "data": { "100": { "tag": "FEAR" } }
            })),
        )]));
        let api = ClanApi::new(Arc::clone(&transport));

        let env = api.by_id(100).await.unwrap();

        assert_eq!(env.status, "ok");
        assert_eq!(env.match_count(), 1);
        assert_eq!(env.data, json!({ "100": { "tag": "FEAR" } }));
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "clans/info");
        assert_eq!(calls[0].1, vec![("clan_id".to_string(), "100".to_string())]);
    }
}
