//! Analyzer session state
//!
//! Ephemeral, UI-only state of one analysis run. Every field is replaced
//! wholesale when a reply arrives; nothing is persisted.

use crate::model::{
    ChartDescriptor, ChatStats, DateRange, DateRangeError, RangeSummary, StatsResponse,
};

use super::loading::LoadingTicker;
use super::selection::ChartSelection;

/// Drag-and-drop events received by the upload area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Enter,
    Over,
    Leave,
}

/// State behind the analyzer page
#[derive(Debug, Clone, Default)]
pub struct AnalyzerSession {
    /// Name of the uploaded transcript
    pub file_name: Option<String>,
    /// Participants reported by the service
    pub users: Vec<String>,
    /// Participant the statistics are filtered by; empty means all users
    pub selected_user: String,
    pub stats: Option<ChatStats>,
    pub charts: Vec<ChartDescriptor>,
    pub selection: ChartSelection,
    pub summary: Option<RangeSummary>,
    /// Raw "From" date input
    pub from_date: String,
    /// Raw "To" date input
    pub to_date: String,
    pub recommendation_text: String,
    pub recommendation_status: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub drag_active: bool,
    /// Image reference shown in the zoom overlay
    pub zoomed: Option<String>,
    pub ticker: LoadingTicker,
}

impl AnalyzerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript was uploaded and its participants are known
    pub fn has_chat(&self) -> bool {
        !self.users.is_empty()
    }

    /// Start uploading a new transcript; previous results are dropped
    pub fn begin_upload(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
        self.loading = true;
        self.error = None;
        self.users.clear();
        self.stats = None;
        self.charts.clear();
        self.selection.clear();
        self.summary = None;
    }

    pub fn users_loaded(&mut self, users: Vec<String>) {
        self.users = users;
        self.selected_user.clear();
    }

    /// Replace statistics and charts; every new chart starts selected
    pub fn stats_loaded(&mut self, response: StatsResponse) {
        self.stats = Some(response.stats);
        self.charts = response.charts;
        self.selection.reset_for(self.charts.len());
    }

    /// Switch the participant filter; an empty name means all users
    pub fn begin_user_change(&mut self, user: impl Into<String>) {
        self.selected_user = user.into();
        self.loading = true;
        self.error = None;
        self.summary = None;
    }

    /// Participant filter as a request parameter
    pub fn sender_filter(&self) -> Option<&str> {
        if self.selected_user.is_empty() {
            None
        } else {
            Some(&self.selected_user)
        }
    }

    pub fn set_dates(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.from_date = from.into();
        self.to_date = to.into();
    }

    /// Summarize button is enabled
    pub fn can_summarize(&self) -> bool {
        !self.loading && !self.from_date.is_empty() && !self.to_date.is_empty()
    }

    pub fn date_range(&self) -> Result<DateRange, DateRangeError> {
        DateRange::parse(&self.from_date, &self.to_date)
    }

    pub fn begin_summary(&mut self) {
        self.loading = true;
        self.error = None;
        self.summary = None;
    }

    pub fn summary_loaded(&mut self, summary: RangeSummary) {
        self.summary = Some(summary);
    }

    /// Surface a failure as the single user-visible message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Request finished, successfully or not
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// "New Chat": forget everything derived from the current transcript
    pub fn reset(&mut self) {
        self.file_name = None;
        self.users.clear();
        self.selected_user.clear();
        self.charts.clear();
        self.stats = None;
        self.error = None;
        self.selection.clear();
        self.summary = None;
        self.from_date.clear();
        self.to_date.clear();
        self.recommendation_text.clear();
        self.recommendation_status = None;
    }

    /// Charts to display under the current selection
    pub fn visible_charts(&self) -> Vec<(usize, &ChartDescriptor)> {
        self.selection.visible(&self.charts)
    }

    pub fn toggle_chart(&mut self, index: usize) {
        self.selection.toggle(index);
    }

    pub fn set_all_charts(&mut self, checked: bool) {
        self.selection.set_all(checked, self.charts.len());
    }

    pub fn all_charts_selected(&self) -> bool {
        self.selection.is_all_selected(self.charts.len())
    }

    pub fn drag_event(&mut self, kind: DragKind) {
        self.drag_active = matches!(kind, DragKind::Enter | DragKind::Over);
    }

    pub fn drop_file(&mut self) {
        self.drag_active = false;
    }

    pub fn zoom(&mut self, img: impl Into<String>) {
        self.zoomed = Some(img.into());
    }

    pub fn close_zoom(&mut self) {
        self.zoomed = None;
    }

    /// Advance the loading message; ignored when nothing is loading
    pub fn tick(&mut self) {
        if self.loading {
            self.ticker.advance();
        }
    }

    /// Loading message to show, if a request is in flight
    pub fn loading_message(&self) -> Option<&'static str> {
        self.loading.then(|| self.ticker.message())
    }
}
