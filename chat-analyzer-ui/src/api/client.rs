//! HTTP API Client
//!
//! Functions for communicating with the chat analysis service.

use gloo_net::http::{Request, Response};

use crate::state::global::{RangeSummary, StatsResponse};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

const API_URL_KEY: &str = "chat_analyzer_api_url";

/// Trim whitespace and trailing slashes; an empty value means the default
pub fn normalize_api_base(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        url.to_string()
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_default();
    normalize_api_base(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_api_base(url));
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub users: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, serde::Serialize)]
struct RecommendationRequest<'a> {
    text: &'a str,
}

/// A failed call
#[derive(Debug, Clone)]
pub struct RequestError {
    /// Text of the service's `{"error": ...}` body, when it sent one
    pub server_message: Option<String>,
    /// Description for the console
    pub detail: String,
}

impl RequestError {
    fn network(detail: impl std::fmt::Display) -> Self {
        Self {
            server_message: None,
            detail: format!("Network error: {}", detail),
        }
    }

    /// User-visible message: the service's own text, or `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.server_message {
            Some(msg) => write!(f, "{} ({})", msg, self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

async fn rejected(response: Response) -> RequestError {
    let status = response.status();
    let server_message = response.json::<ApiError>().await.ok().map(|e| e.error);
    RequestError {
        server_message,
        detail: format!("HTTP {}", status),
    }
}

async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    if !response.ok() {
        return Err(rejected(response).await);
    }
    response.json().await.map_err(|e| RequestError {
        server_message: None,
        detail: format!("Parse error: {}", e),
    })
}

// ============ API Functions ============

/// Upload a transcript as multipart form data
pub async fn upload_chat(file: &web_sys::File) -> Result<Vec<String>, RequestError> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new().map_err(|e| RequestError::network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| RequestError::network(format!("{:?}", e)))?;

    let response = Request::post(&format!("{}/analyze", api_base))
        .body(form)
        .map_err(|e| RequestError::network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(RequestError::network)?;

    let result: UploadResponse = parse(response).await?;
    Ok(result.users)
}

/// Fetch statistics and charts, for one sender or for everyone
pub async fn fetch_stats(sender: Option<&str>) -> Result<StatsResponse, RequestError> {
    let api_base = get_api_base();

    let url = match sender {
        Some(s) if !s.is_empty() => format!(
            "{}/stats?sender={}",
            api_base,
            String::from(js_sys::encode_uri_component(s))
        ),
        _ => format!("{}/stats", api_base),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(RequestError::network)?;

    parse(response).await
}

/// Summarize the messages between two `YYYY-MM-DD` dates
pub async fn fetch_summary(start: &str, end: &str) -> Result<RangeSummary, RequestError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/summary?start={}&end={}", api_base, start, end))
        .send()
        .await
        .map_err(RequestError::network)?;

    parse(response).await
}

/// Send a free-text recommendation
pub async fn send_recommendation(text: &str) -> Result<(), RequestError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/recommendations", api_base))
        .json(&RecommendationRequest { text })
        .map_err(|e| RequestError::network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(RequestError::network)?;

    if !response.ok() {
        return Err(rejected(response).await);
    }

    Ok(())
}
