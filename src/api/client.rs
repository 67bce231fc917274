use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;

    async fn ask(&self, request: &QaRequest) -> Result<QaResponse>;

    async fn health(&self) -> Result<HealthResponse>;
}

/// JSON-over-HTTP backend.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> Result<Res>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<Res: DeserializeOwned>(response: reqwest::Response) -> Result<Res> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            debug!("Backend answered {} with {} bytes", status, body.len());
            return Err(Error::Server {
                status: status.as_u16(),
                body,
            });
        }

        // Read as text first so a malformed body is reported as a JSON error
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        debug!(
            "Sending prediction request with {} byte payload",
            request.image_base64.len()
        );
        self.post_json("/predict", request).await
    }

    async fn ask(&self, request: &QaRequest) -> Result<QaResponse> {
        debug!(
            "Sending question (top_k={}, use_llm={})",
            request.top_k, request.use_llm
        );
        self.post_json("/qa", request).await
    }

    async fn health(&self) -> Result<HealthResponse> {
        let url = self.url("/healthz");
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }
}
