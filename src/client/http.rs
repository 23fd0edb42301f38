//! Analysis Service REST Client
//!
//! HTTP client for the four endpoints of the chat analysis service.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::backend::AnalysisBackend;
use super::error::{ClientError, ClientResult};
use crate::model::{
    DateRange, ErrorBody, RangeSummary, RecommendationRequest, StatsResponse, UploadResponse,
};

/// Default origin of the analysis service
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the analysis client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (e.g. "http://127.0.0.1:5000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            // Chart generation on the service side is slow for large chats
            request_timeout_ms: 120_000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// REST client for the analysis service
pub struct AnalyzerClient {
    client: Client,
    base_url: String,
}

impl AnalyzerClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

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

    /// Upload a transcript; the service keeps it for later stats and summaries
    pub async fn analyze(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> ClientResult<UploadResponse> {
        let url = self.url("/analyze");
        let request_id = Uuid::new_v4();
        tracing::info!(
            request_id = %request_id,
            file_name,
            bytes = contents.len(),
            "Uploading chat transcript"
        );

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/plain")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let result: UploadResponse = read_json(request_id, response).await?;
        tracing::info!(request_id = %request_id, users = result.users.len(), "Upload analyzed");
        Ok(result)
    }

    /// Fetch statistics and charts, optionally for a single sender
    pub async fn stats(&self, sender: Option<&str>) -> ClientResult<StatsResponse> {
        let url = match sender {
            Some(s) if !s.is_empty() => {
                format!("{}?sender={}", self.url("/stats"), urlencoding::encode(s))
            }
            _ => self.url("/stats"),
        };
        let request_id = Uuid::new_v4();
        tracing::info!(request_id = %request_id, sender = ?sender, "Fetching stats");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let result: StatsResponse = read_json(request_id, response).await?;
        tracing::debug!(request_id = %request_id, charts = result.charts.len(), "Stats received");
        Ok(result)
    }

    /// Summarize the messages between two dates (inclusive)
    pub async fn summary(&self, range: &DateRange) -> ClientResult<RangeSummary> {
        let url = format!("{}?{}", self.url("/summary"), range.to_query());
        let request_id = Uuid::new_v4();
        tracing::info!(request_id = %request_id, range = %range, "Fetching summary");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        read_json(request_id, response).await
    }

    /// Send free-text feedback to the service
    pub async fn recommend(&self, text: &str) -> ClientResult<()> {
        let url = self.url("/recommendations");
        let request_id = Uuid::new_v4();
        tracing::info!(request_id = %request_id, chars = text.len(), "Sending recommendation");

        let body = RecommendationRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(request_id, response).await)
        }
    }
}

#[async_trait]
impl AnalysisBackend for AnalyzerClient {
    async fn analyze(&self, file_name: &str, contents: Vec<u8>) -> ClientResult<UploadResponse> {
        AnalyzerClient::analyze(self, file_name, contents).await
    }

    async fn stats(&self, sender: Option<&str>) -> ClientResult<StatsResponse> {
        AnalyzerClient::stats(self, sender).await
    }

    async fn summary(&self, range: &DateRange) -> ClientResult<RangeSummary> {
        AnalyzerClient::summary(self, range).await
    }

    async fn recommend(&self, text: &str) -> ClientResult<()> {
        AnalyzerClient::recommend(self, text).await
    }
}

/// Decode a successful reply, or turn a rejected one into an error
async fn read_json<T: DeserializeOwned>(request_id: Uuid, response: Response) -> ClientResult<T> {
    if !response.status().is_success() {
        return Err(error_from_response(request_id, response).await);
    }

    let text = response.text().await.map_err(ClientError::from_transport)?;
    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Malformed response body");
        ClientError::InvalidResponse(e.to_string())
    })
}

async fn error_from_response(request_id: Uuid, response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let err = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { error }) => ClientError::Api {
            status,
            message: error,
        },
        Err(_) => ClientError::Status { status, body },
    };

    tracing::warn!(request_id = %request_id, status, error = %err, "Request rejected");
    err
}
