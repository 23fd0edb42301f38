use async_trait::async_trait;

use super::error::ClientResult;
use crate::model::{DateRange, RangeSummary, StatsResponse, UploadResponse};

/// Operations offered by the analysis service
///
/// [`AnalyzerClient`](super::AnalyzerClient) implements this over HTTP; the
/// session workflow only depends on the trait.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Upload a transcript and return its participants
    async fn analyze(&self, file_name: &str, contents: Vec<u8>) -> ClientResult<UploadResponse>;

    /// Statistics and charts, for one sender or for everyone
    async fn stats(&self, sender: Option<&str>) -> ClientResult<StatsResponse>;

    /// Summary of an inclusive date range
    async fn summary(&self, range: &DateRange) -> ClientResult<RangeSummary>;

    /// Free-text recommendation
    async fn recommend(&self, text: &str) -> ClientResult<()>;
}
