use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::ClientConfig;
use crate::types::{Envelope, WotApiError, WotApiResponse};

use super::metrics::RequestMetrics;
use super::traits::ApiRequest;

/// Low level HTTP transport for the Wargaming API.
#[derive(Debug)]
pub struct ApiClient {
    pub client: reqwest::Client,
    config: ClientConfig,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            metrics: RequestMetrics::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Compose the full request URL for a resource method: the regional
    /// host and api path from the configuration, the credential first,
    /// then the urlencoded parameters in the order given.
    pub fn url_for(&self, method: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "https://{}{}/{}/?application_id={}",
            self.config.region.host(),
            self.config.api_path,
            method,
            self.config.application_id,
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Issue a single GET and decode the response envelope.
    ///
    /// A non-OK status keeps its exact code, a body that is not valid
    /// JSON fails decoding, and connection failures surface as transport
    /// errors. Debug logging never affects control flow.
    pub async fn get(&self, url: &str) -> WotApiResponse<Envelope> {
        self.metrics.inc();

        if self.config.debug {
            tracing::debug!("requesting: {}", url);
        }

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(WotApiError::Transport)?;

        if self.config.debug {
            tracing::debug!("status: {}", res.status());
        }

        match res.status() {
            StatusCode::OK => {
                let body = res.text().await.map_err(WotApiError::Transport)?;
                serde_json::from_str(&body).map_err(WotApiError::Decode)
            }
            status => Err(WotApiError::Status(status)),
        }
    }
}

#[async_trait]
impl ApiRequest for ApiClient {
    async fn request(&self, method: &str, params: &[(&str, String)]) -> WotApiResponse<Envelope> {
        let url = self.url_for(method, params);
        self.get(&url).await
    }
}
