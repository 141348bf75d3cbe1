use std::fmt::Debug;

use async_trait::async_trait;

use crate::types::{Envelope, WotApiResponse};

/// Trait implemented by structures capable of performing raw requests
/// against the Wargaming API.
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    /// Issue a GET for a resource method (e.g. `account/list`) with the
    /// given query parameters and return the decoded response envelope.
    async fn request(&self, method: &str, params: &[(&str, String)]) -> WotApiResponse<Envelope>;
}
