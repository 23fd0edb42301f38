//! Analysis Service Client
//!
//! Talks to the external chat analysis service. Parsing, statistics and
//! chart generation all happen there; this side only forwards file bytes and
//! query parameters and decodes the JSON replies.
//!
//! ## Endpoints
//!
//! - `POST /analyze`: multipart upload of the transcript
//! - `GET /stats[?sender=..]`: statistics and charts
//! - `GET /summary?start=..&end=..`: date-range summary
//! - `POST /recommendations`: free-text feedback

mod backend;
mod error;
mod http;

pub use backend::AnalysisBackend;
pub use error::{ClientError, ClientResult};
pub use http::{AnalyzerClient, ClientConfig, DEFAULT_BASE_URL};
