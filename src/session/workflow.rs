//! Request sequencing
//!
//! Async operations that drive an [`AnalyzerSession`] through a request to
//! the analysis service. Each one flips the loading flag on, performs its
//! requests in order, folds any failure into the session's single error
//! message, and always turns loading off again.

use thiserror::Error;

use crate::client::{AnalysisBackend, ClientError};
use crate::model::DateRangeError;

use super::state::AnalyzerSession;

pub const UPLOAD_FAILED: &str = "Upload failed";
pub const STATS_FAILED: &str = "Failed to load stats";
pub const SUMMARY_FAILED: &str = "Failed to summarize";

pub const RECOMMENDATION_EMPTY: &str = "Please enter a recommendation.";
pub const RECOMMENDATION_SENDING: &str = "Sending...";
pub const RECOMMENDATION_SENT: &str = "Recommendation sent. Thank you!";
pub const RECOMMENDATION_FAILED: &str = "Failed to send recommendation. Try again later.";

/// Why a workflow step did not complete
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    #[error("Recommendation text is empty")]
    EmptyRecommendation,
}

pub type WorkflowResult = Result<(), WorkflowError>;

/// Upload a transcript, then load the statistics for all users
pub async fn upload_chat<B>(
    backend: &B,
    session: &mut AnalyzerSession,
    file_name: &str,
    contents: Vec<u8>,
) -> WorkflowResult
where
    B: AnalysisBackend + ?Sized,
{
    session.begin_upload(file_name);

    let result = async {
        let upload = backend.analyze(file_name, contents).await?;
        session.users_loaded(upload.users);

        let stats = backend.stats(None).await?;
        session.stats_loaded(stats);
        Ok::<_, ClientError>(())
    }
    .await;

    if let Err(e) = &result {
        tracing::warn!(file_name, error = %e, "Upload failed");
        session.fail(e.server_message().unwrap_or(UPLOAD_FAILED));
    }
    session.finish();

    result.map_err(Into::into)
}

/// Reload statistics for one participant; an empty name selects all users
pub async fn change_user<B>(
    backend: &B,
    session: &mut AnalyzerSession,
    user: &str,
) -> WorkflowResult
where
    B: AnalysisBackend + ?Sized,
{
    session.begin_user_change(user);

    let result = backend.stats(session.sender_filter()).await;
    let outcome = match result {
        Ok(stats) => {
            session.stats_loaded(stats);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(user, error = %e, "Failed to load stats");
            session.fail(STATS_FAILED);
            Err(e.into())
        }
    };
    session.finish();

    outcome
}

/// Summarize the session's date range
///
/// Does nothing while either date input is empty.
pub async fn summarize_range<B>(backend: &B, session: &mut AnalyzerSession) -> WorkflowResult
where
    B: AnalysisBackend + ?Sized,
{
    if session.from_date.is_empty() || session.to_date.is_empty() {
        return Ok(());
    }

    session.begin_summary();

    let outcome = match session.date_range() {
        Ok(range) => match backend.summary(&range).await {
            Ok(summary) => {
                session.summary_loaded(summary);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(range = %range, error = %e, "Failed to summarize");
                session.fail(SUMMARY_FAILED);
                Err(e.into())
            }
        },
        Err(e) => {
            session.fail(e.to_string());
            Err(e.into())
        }
    };
    session.finish();

    outcome
}

/// Send the session's recommendation text
///
/// Progress is reported through the recommendation status line only; the
/// loading flag and the error message are left alone.
pub async fn send_recommendation<B>(backend: &B, session: &mut AnalyzerSession) -> WorkflowResult
where
    B: AnalysisBackend + ?Sized,
{
    if session.recommendation_text.trim().is_empty() {
        session.recommendation_status = Some(RECOMMENDATION_EMPTY.to_string());
        return Err(WorkflowError::EmptyRecommendation);
    }

    session.recommendation_status = Some(RECOMMENDATION_SENDING.to_string());

    match backend.recommend(&session.recommendation_text).await {
        Ok(()) => {
            session.recommendation_status = Some(RECOMMENDATION_SENT.to_string());
            session.recommendation_text.clear();
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to send recommendation");
            session.recommendation_status = Some(RECOMMENDATION_FAILED.to_string());
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientResult;
    use crate::model::{
        ChartDescriptor, ChatStats, DateRange, RangeSummary, StatsResponse, UploadResponse,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory backend recording every call
    #[derive(Default)]
    struct FakeBackend {
        fail_upload: Option<ClientError>,
        fail_stats: bool,
        fail_summary: bool,
        fail_recommend: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn stats_for(sender: Option<&str>) -> StatsResponse {
        let charts = if sender.is_some() { 3 } else { 5 };
        StatsResponse {
            stats: ChatStats {
                sender: sender.unwrap_or("All Users").to_string(),
                total_days: 1,
                total_messages: 2,
                total_words: 3,
            },
            charts: (0..charts)
                .map(|i| ChartDescriptor {
                    id: Some(i.to_string()),
                    title: format!("Chart {}", i),
                    img: String::new(),
                })
                .collect(),
        }
    }

    #[async_trait]
    impl AnalysisBackend for FakeBackend {
        async fn analyze(
            &self,
            file_name: &str,
            _contents: Vec<u8>,
        ) -> ClientResult<UploadResponse> {
            self.calls.lock().unwrap().push(format!("analyze:{}", file_name));
            if let Some(ClientError::Api { status, message }) = &self.fail_upload {
                return Err(ClientError::Api {
                    status: *status,
                    message: message.clone(),
                });
            }
            if self.fail_upload.is_some() {
                return Err(ClientError::Unavailable);
            }
            Ok(UploadResponse {
                users: vec!["Alice".into(), "Bob".into()],
            })
        }

        async fn stats(&self, sender: Option<&str>) -> ClientResult<StatsResponse> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("stats:{}", sender.unwrap_or("*")));
            if self.fail_stats {
                return Err(ClientError::Timeout);
            }
            Ok(stats_for(sender))
        }

        async fn summary(&self, range: &DateRange) -> ClientResult<RangeSummary> {
            self.calls.lock().unwrap().push(format!("summary:{}", range.to_query()));
            if self.fail_summary {
                return Err(ClientError::Api {
                    status: 404,
                    message: "No messages found in the given date range".into(),
                });
            }
            Ok(RangeSummary {
                total_messages: 7,
                top_sender: Some("Alice".into()),
                top_sender_count: 4,
                most_active_hour: Some(21),
                top_words: vec!["hello".into()],
            })
        }

        async fn recommend(&self, text: &str) -> ClientResult<()> {
            self.calls.lock().unwrap().push(format!("recommend:{}", text));
            if self.fail_recommend {
                return Err(ClientError::Unavailable);
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_upload_loads_users_then_stats() {
        let backend = FakeBackend::default();
        let mut session = AnalyzerSession::new();

        upload_chat(&backend, &mut session, "chat.txt", b"hi".to_vec())
            .await
            .unwrap();

        assert_eq!(backend.calls(), vec!["analyze:chat.txt", "stats:*"]);
        assert_eq!(session.users, vec!["Alice", "Bob"]);
        assert_eq!(session.charts.len(), 5);
        assert!(session.all_charts_selected());
        assert!(!session.loading);
        assert!(session.error.is_none());
    }

    #[tokio::test]
    async fn test_upload_prefers_server_error_text() {
        let backend = FakeBackend {
            fail_upload: Some(ClientError::Api {
                status: 400,
                message: "No file uploaded".into(),
            }),
            ..Default::default()
        };
        let mut session = AnalyzerSession::new();

        let result = upload_chat(&backend, &mut session, "chat.txt", Vec::new()).await;

        assert!(result.is_err());
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some("No file uploaded"));
        assert_eq!(backend.calls(), vec!["analyze:chat.txt"]);
    }

    #[tokio::test]
    async fn test_upload_falls_back_to_generic_message() {
        let backend = FakeBackend {
            fail_upload: Some(ClientError::Unavailable),
            ..Default::default()
        };
        let mut session = AnalyzerSession::new();

        let _ = upload_chat(&backend, &mut session, "chat.txt", Vec::new()).await;

        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some(UPLOAD_FAILED));
    }

    #[tokio::test]
    async fn test_upload_keeps_users_when_stats_fail() {
        let backend = FakeBackend {
            fail_stats: true,
            ..Default::default()
        };
        let mut session = AnalyzerSession::new();

        let _ = upload_chat(&backend, &mut session, "chat.txt", Vec::new()).await;

        assert!(session.has_chat());
        assert!(session.stats.is_none());
        assert_eq!(session.error.as_deref(), Some(UPLOAD_FAILED));
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_change_user_filters_and_resets_selection() {
        let backend = FakeBackend::default();
        let mut session = AnalyzerSession::new();
        upload_chat(&backend, &mut session, "chat.txt", Vec::new())
            .await
            .unwrap();
        session.set_all_charts(false);

        change_user(&backend, &mut session, "Bob").await.unwrap();

        assert_eq!(backend.calls().last().unwrap(), "stats:Bob");
        assert_eq!(session.stats.as_ref().unwrap().sender, "Bob");
        assert_eq!(session.charts.len(), 3);
        assert!(session.all_charts_selected());

        change_user(&backend, &mut session, "").await.unwrap();
        assert_eq!(backend.calls().last().unwrap(), "stats:*");
    }

    #[tokio::test]
    async fn test_change_user_failure() {
        let backend = FakeBackend {
            fail_stats: true,
            ..Default::default()
        };
        let mut session = AnalyzerSession::new();

        let result = change_user(&backend, &mut session, "Alice").await;

        assert!(matches!(result, Err(WorkflowError::Client(ClientError::Timeout))));
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some(STATS_FAILED));
        assert_eq!(session.selected_user, "Alice");
    }

    #[tokio::test]
    async fn test_summarize_requires_both_dates() {
        let backend = FakeBackend::default();
        let mut session = AnalyzerSession::new();
        session.set_dates("2024-01-01", "");

        summarize_range(&backend, &mut session).await.unwrap();

        assert!(backend.calls().is_empty());
        assert!(session.summary.is_none());
    }

    #[tokio::test]
    async fn test_summarize_success_and_failure() {
        let backend = FakeBackend::default();
        let mut session = AnalyzerSession::new();
        session.set_dates("2024-01-01", "2024-01-31");

        summarize_range(&backend, &mut session).await.unwrap();
        assert_eq!(
            backend.calls(),
            vec!["summary:start=2024-01-01&end=2024-01-31"]
        );
        assert_eq!(session.summary.as_ref().unwrap().top_sender_count, 4);

        let failing = FakeBackend {
            fail_summary: true,
            ..Default::default()
        };
        summarize_range(&failing, &mut session).await.unwrap_err();
        assert!(session.summary.is_none());
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some(SUMMARY_FAILED));
    }

    #[tokio::test]
    async fn test_summarize_rejects_malformed_dates() {
        let backend = FakeBackend::default();
        let mut session = AnalyzerSession::new();
        session.set_dates("01/01/2024", "2024-01-31");

        let result = summarize_range(&backend, &mut session).await;

        assert!(matches!(result, Err(WorkflowError::DateRange(_))));
        assert!(backend.calls().is_empty());
        assert!(!session.loading);
        assert!(session.error.is_some());
    }

    #[tokio::test]
    async fn test_recommendation_flow() {
        let backend = FakeBackend::default();
        let mut session = AnalyzerSession::new();

        session.recommendation_text = "   ".into();
        let result = send_recommendation(&backend, &mut session).await;
        assert!(matches!(result, Err(WorkflowError::EmptyRecommendation)));
        assert_eq!(
            session.recommendation_status.as_deref(),
            Some(RECOMMENDATION_EMPTY)
        );
        assert!(backend.calls().is_empty());

        session.recommendation_text = "Add a sentiment chart".into();
        send_recommendation(&backend, &mut session).await.unwrap();
        assert_eq!(backend.calls(), vec!["recommend:Add a sentiment chart"]);
        assert_eq!(
            session.recommendation_status.as_deref(),
            Some(RECOMMENDATION_SENT)
        );
        assert!(session.recommendation_text.is_empty());
    }

    #[tokio::test]
    async fn test_recommendation_failure_keeps_text() {
        let backend = FakeBackend {
            fail_recommend: true,
            ..Default::default()
        };
        let mut session = AnalyzerSession::new();
        session.recommendation_text = "More emoji stats".into();

        send_recommendation(&backend, &mut session).await.unwrap_err();

        assert_eq!(
            session.recommendation_status.as_deref(),
            Some(RECOMMENDATION_FAILED)
        );
        assert_eq!(session.recommendation_text, "More emoji stats");
        assert!(session.error.is_none());
        assert!(!session.loading);
    }
}
