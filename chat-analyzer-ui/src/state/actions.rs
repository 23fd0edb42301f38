//! User Actions
//!
//! Request sequences triggered by the page. Each one runs on the browser
//! event loop, reports failures through the single error message and turns
//! the loading flag off when done.

use leptos::*;

use super::global::AnalyzerState;
use crate::api::{self, RequestError};

const UPLOAD_FAILED: &str = "Upload failed";
const STATS_FAILED: &str = "Failed to load stats";
const SUMMARY_FAILED: &str = "Failed to summarize";

fn log_failure(context: &str, err: &RequestError) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}

/// Upload a transcript, then load statistics for all users
pub fn upload_chat(state: AnalyzerState, file: web_sys::File) {
    state.begin_upload(file.name());

    spawn_local(async move {
        let result = async {
            let users = api::upload_chat(&file).await?;
            state.users.set(users);
            state.selected_user.set(String::new());

            let stats = api::fetch_stats(None).await?;
            state.set_stats(stats);
            Ok::<_, RequestError>(())
        }
        .await;

        let error = result.err().map(|e| {
            log_failure(UPLOAD_FAILED, &e);
            e.message_or(UPLOAD_FAILED)
        });
        state.settle(error);
    });
}

/// Reload statistics for one participant; empty means all users
pub fn change_user(state: AnalyzerState, user: String) {
    state.selected_user.set(user.clone());
    state.loading.set(true);
    state.error.set(None);
    state.summary.set(None);

    spawn_local(async move {
        let sender = (!user.is_empty()).then_some(user.as_str());
        let error = match api::fetch_stats(sender).await {
            Ok(stats) => {
                state.set_stats(stats);
                None
            }
            Err(e) => {
                log_failure(STATS_FAILED, &e);
                Some(STATS_FAILED.to_string())
            }
        };
        state.settle(error);
    });
}

/// Summarize the selected date range
pub fn summarize_range(state: AnalyzerState) {
    let from = state.from_date.get_untracked();
    let to = state.to_date.get_untracked();
    if from.is_empty() || to.is_empty() {
        return;
    }

    state.loading.set(true);
    state.error.set(None);
    state.summary.set(None);

    spawn_local(async move {
        let error = match api::fetch_summary(&from, &to).await {
            Ok(summary) => {
                state.summary.set(Some(summary));
                None
            }
            Err(e) => {
                log_failure(SUMMARY_FAILED, &e);
                Some(SUMMARY_FAILED.to_string())
            }
        };
        state.settle(error);
    });
}

/// Send the recommendation text; progress goes to the status line only
pub fn send_recommendation(state: AnalyzerState) {
    let text = state.recommendation_text.get_untracked();
    if text.trim().is_empty() {
        state
            .recommendation_status
            .set(Some("Please enter a recommendation.".to_string()));
        return;
    }

    state.recommendation_status.set(Some("Sending...".to_string()));

    spawn_local(async move {
        match api::send_recommendation(&text).await {
            Ok(()) => {
                state
                    .recommendation_status
                    .set(Some("Recommendation sent. Thank you!".to_string()));
                state.recommendation_text.set(String::new());
            }
            Err(e) => {
                log_failure("Recommendation failed", &e);
                state.recommendation_status.set(Some(
                    "Failed to send recommendation. Try again later.".to_string(),
                ));
            }
        }
    });
}
