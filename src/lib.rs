//! # Chat Analyzer
//!
//! Client side of a chat-transcript analysis service: upload an exported chat,
//! then browse the statistics, charts and date-range summaries the service
//! computes.
//!
//! ## Features
//!
//! - **Typed client**: multipart upload, stats, summary and recommendation calls
//! - **Session model**: the state behind the analyzer page, with chart selection
//! - **Workflows**: request sequencing with a single user-visible error message
//! - **CLI**: run an analysis from the terminal and save the chart images
//!
//! ## Modules
//!
//! - [`model`]: JSON shapes exchanged with the service
//! - [`client`]: HTTP client and the [`AnalysisBackend`] seam
//! - [`session`]: session state, chart selection and workflows
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_analyzer::{session, AnalyzerClient, AnalyzerSession, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyzerClient::new(ClientConfig::new("http://127.0.0.1:5000"))?;
//!     let mut state = AnalyzerSession::new();
//!
//!     let transcript = std::fs::read("chat.txt")?;
//!     session::upload_chat(&client, &mut state, "chat.txt", transcript).await?;
//!
//!     // Narrow the statistics to one participant
//!     if let Some(user) = state.users.first().cloned() {
//!         session::change_user(&client, &mut state, &user).await?;
//!     }
//!
//!     for (_, chart) in state.visible_charts() {
//!         println!("{}", chart.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod model;
pub mod session;

pub use client::{
    AnalysisBackend, AnalyzerClient, ClientConfig, ClientError, ClientResult, DEFAULT_BASE_URL,
};

pub use model::{
    ChartDescriptor, ChatStats, DateRange, DateRangeError, ErrorBody, ImageError, RangeSummary,
    RecommendationRequest, StatsResponse, UploadResponse, ALL_USERS_LABEL,
};

pub use session::{
    AnalyzerSession, ChartSelection, DragKind, LoadingTicker, WorkflowError, WorkflowResult,
};

pub use config::{Config, ConfigError, LoggingConfig, OutputConfig, ServerConfig};
