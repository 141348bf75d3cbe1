use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Which kind of entity a failed name lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Clan,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Account => write!(f, "account"),
            EntityKind::Clan => write!(f, "clan"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WotApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    #[error("decoding raw response error: {0}")]
    Decode(serde_json::Error),

    #[error("no {0} found on this realm")]
    NotFound(EntityKind),
}

/// A call to the Wargaming API either succeeds with the success type or fails with a [`WotApiError`].
pub type WotApiResponse<T> = Result<T, WotApiError>;

/// Generic top-level response shape of the remote API.
///
/// The payload schema belongs to the remote service; `data` is kept as a
/// raw [`Value`] and is either a list (search endpoints) or a mapping
/// keyed by the stringified numeric id (detail endpoints).
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub data: Value,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Meta {
    #[serde(default)]
    pub count: u64,
}

impl Envelope {
    /// Number of matches reported by a search endpoint, 0 when absent.
    pub fn match_count(&self) -> u64 {
        self.meta.map(|m| m.count).unwrap_or(0)
    }

    /// Unwrap a detail envelope: the single value under the first key of
    /// the `data` mapping. An empty mapping (unknown id) or a non-mapping
    /// payload yields [`Value::Null`].
    pub fn into_single(self) -> Value {
        match self.data {
            Value::Object(map) => map.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Decode the `data` list of a search envelope into typed candidates.
    pub fn candidates<T: DeserializeOwned>(&self) -> WotApiResponse<Vec<T>> {
        serde_json::from_value(self.data.clone()).map_err(WotApiError::Decode)
    }
}
