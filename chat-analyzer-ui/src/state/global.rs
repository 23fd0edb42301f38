//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::collections::BTreeSet;

use super::selection;
use crate::api;

/// Messages rotated by the loading overlay
pub const LOADING_MESSAGES: [&str; 10] = [
    "Analyzing every message",
    "Reading your chat history",
    "Counting words and emojis",
    "Generating cool charts",
    "Crunching data bytes",
    "Detecting conversation trends",
    "Mapping user activity",
    "Uncovering chat secrets",
    "Building word clouds",
    "Preparing insights for you",
];

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AnalyzerState {
    /// Name of the uploaded transcript
    pub file_name: RwSignal<Option<String>>,
    /// Participants reported by the service
    pub users: RwSignal<Vec<String>>,
    /// Participant filter; empty means all users
    pub selected_user: RwSignal<String>,
    pub stats: RwSignal<Option<ChatStats>>,
    pub charts: RwSignal<Vec<ChartDescriptor>>,
    /// Ticked chart indices
    pub selected_charts: RwSignal<BTreeSet<usize>>,
    pub summary: RwSignal<Option<RangeSummary>>,
    pub from_date: RwSignal<String>,
    pub to_date: RwSignal<String>,
    pub recommendation_text: RwSignal<String>,
    pub recommendation_status: RwSignal<Option<String>>,
    /// A request is in flight
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// A file is being dragged over the upload area
    pub drag_active: RwSignal<bool>,
    /// Image shown in the zoom overlay
    pub zoomed: RwSignal<Option<String>>,
    /// Index into `LOADING_MESSAGES`
    pub loading_message: RwSignal<usize>,
    /// Bumped on every stats reply so the gallery re-renders replaced images
    pub charts_generation: RwSignal<u64>,
    /// Origin of the analysis service
    pub api_base: RwSignal<String>,
}

/// Key under which the gallery renders one chart
pub type GalleryKey = (u64, usize);

/// Headline statistics from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ChatStats {
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub total_days: u64,
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub total_words: u64,
}

impl ChatStats {
    /// Average words per message, rounded
    pub fn average_words(&self) -> u64 {
        if self.total_messages == 0 {
            0
        } else {
            (self.total_words as f64 / self.total_messages as f64).round() as u64
        }
    }
}

/// A chart image returned by the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ChartDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub img: String,
}

#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct StatsResponse {
    pub stats: ChatStats,
    #[serde(default)]
    pub charts: Vec<ChartDescriptor>,
}

/// Date-range summary
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct RangeSummary {
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub top_sender: Option<String>,
    #[serde(default)]
    pub top_sender_count: u64,
    #[serde(default)]
    pub most_active_hour: Option<u8>,
    #[serde(default)]
    pub top_words: Vec<String>,
}

/// Provide global state to the component tree
pub fn provide_analyzer_state() {
    provide_context(AnalyzerState::new(api::get_api_base()));
}

/// Fetch the state provided by [`provide_analyzer_state`]
pub fn use_analyzer_state() -> AnalyzerState {
    use_context::<AnalyzerState>().expect("AnalyzerState not found")
}

impl AnalyzerState {
    pub fn new(api_base: String) -> Self {
        Self {
            file_name: create_rw_signal(None),
            users: create_rw_signal(Vec::new()),
            selected_user: create_rw_signal(String::new()),
            stats: create_rw_signal(None),
            charts: create_rw_signal(Vec::new()),
            selected_charts: create_rw_signal(BTreeSet::new()),
            summary: create_rw_signal(None),
            from_date: create_rw_signal(String::new()),
            to_date: create_rw_signal(String::new()),
            recommendation_text: create_rw_signal(String::new()),
            recommendation_status: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            drag_active: create_rw_signal(false),
            zoomed: create_rw_signal(None),
            loading_message: create_rw_signal(0),
            charts_generation: create_rw_signal(0),
            api_base: create_rw_signal(api_base),
        }
    }

    /// A transcript has been analyzed
    pub fn has_chat(&self) -> bool {
        !self.users.get().is_empty()
    }

    /// Replace statistics and charts; every new chart starts ticked
    pub fn set_stats(&self, response: StatsResponse) {
        let count = response.charts.len();
        self.stats.set(Some(response.stats));
        self.charts.set(response.charts);
        self.selected_charts.set(selection::all(count));
        self.charts_generation.update(|g| *g = g.wrapping_add(1));
    }

    /// Drop the results of the previous transcript before a new upload
    pub fn begin_upload(&self, file_name: String) {
        self.file_name.set(Some(file_name));
        self.loading.set(true);
        self.error.set(None);
        self.users.set(Vec::new());
        self.stats.set(None);
        self.charts.set(Vec::new());
        self.selected_charts.set(BTreeSet::new());
        self.summary.set(None);
    }

    /// "New Chat"
    pub fn reset(&self) {
        self.file_name.set(None);
        self.users.set(Vec::new());
        self.selected_user.set(String::new());
        self.charts.set(Vec::new());
        self.stats.set(None);
        self.error.set(None);
        self.selected_charts.set(BTreeSet::new());
        self.summary.set(None);
        self.from_date.set(String::new());
        self.to_date.set(String::new());
        self.recommendation_text.set(String::new());
        self.recommendation_status.set(None);
    }

    pub fn toggle_chart(&self, index: usize) {
        self.selected_charts.update(|s| selection::toggle(s, index));
    }

    /// Handler of the "All Charts" checkbox
    pub fn set_all_charts(&self, checked: bool) {
        if checked {
            let count = self.charts.with(|c| c.len());
            self.selected_charts.set(selection::all(count));
        } else {
            self.selected_charts.set(BTreeSet::new());
        }
    }

    pub fn all_charts_selected(&self) -> bool {
        let count = self.charts.with(|c| c.len());
        self.selected_charts
            .with(|s| selection::is_all_selected(s, count))
    }

    /// Charts to display with their index
    pub fn visible_charts(&self) -> Vec<(usize, ChartDescriptor)> {
        let charts = self.charts.get();
        let indices = self
            .selected_charts
            .with(|s| selection::visible_indices(s, charts.len()));
        indices
            .into_iter()
            .filter_map(|i| charts.get(i).cloned().map(|c| (i, c)))
            .collect()
    }

    /// Visible charts keyed by stats reply and index
    pub fn gallery_items(&self) -> Vec<(GalleryKey, ChartDescriptor)> {
        let generation = self.charts_generation.get();
        self.visible_charts()
            .into_iter()
            .map(|(index, chart)| ((generation, index), chart))
            .collect()
    }

    /// Inputs and buttons are locked while a request is in flight
    pub fn controls_disabled(&self) -> bool {
        self.loading.get()
    }

    pub fn can_summarize(&self) -> bool {
        !self.controls_disabled()
            && !self.from_date.get().is_empty()
            && !self.to_date.get().is_empty()
    }

    pub fn current_loading_message(&self) -> &'static str {
        LOADING_MESSAGES[self.loading_message.get() % LOADING_MESSAGES.len()]
    }

    pub fn advance_loading_message(&self) {
        self.loading_message
            .update(|i| *i = (*i + 1) % LOADING_MESSAGES.len());
    }

    /// End a request; a failure leaves its message behind
    pub fn settle(&self, error: Option<String>) {
        if let Some(message) = error {
            self.error.set(Some(message));
        }
        self.loading.set(false);
    }

    /// Point the page at another service origin
    pub fn set_api_base(&self, url: &str) {
        self.api_base.set(api::normalize_api_base(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(title: &str, img: &str) -> ChartDescriptor {
        ChartDescriptor {
            id: None,
            title: title.to_string(),
            img: img.to_string(),
        }
    }

    fn stats_reply(sender: Option<&str>, imgs: &[&str]) -> StatsResponse {
        let titles = [
            "Messages per Day",
            "Messages per Month",
            "Messages by Hour",
            "Messages by Day of Week",
        ];
        StatsResponse {
            stats: ChatStats {
                sender: sender.map(str::to_string),
                total_days: 3,
                total_messages: 30,
                total_words: 95,
            },
            charts: imgs
                .iter()
                .enumerate()
                .map(|(i, img)| chart(titles[i % titles.len()], img))
                .collect(),
        }
    }

    /// Run `f` against fresh state inside a reactive runtime
    fn with_state(f: impl FnOnce(AnalyzerState)) {
        let runtime = create_runtime();
        f(AnalyzerState::new(crate::api::DEFAULT_API_BASE.to_string()));
        runtime.dispose();
    }

    #[test]
    fn test_average_words() {
        let stats = ChatStats {
            sender: None,
            total_days: 1,
            total_messages: 3,
            total_words: 10,
        };
        assert_eq!(stats.average_words(), 3);
    }

    #[test]
    fn test_stats_response_parses() {
        let json = r#"{
            "stats": {"sender": "Bob", "total_days": 1, "total_messages": 2, "total_words": 9},
            "charts": [{"title": "Heatmap", "img": "data:image/png;base64,AA=="}]
        }"#;
        let resp: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.stats.sender.as_deref(), Some("Bob"));
        assert!(resp.charts[0].id.is_none());
    }

    #[test]
    fn test_set_stats_selects_every_chart() {
        with_state(|state| {
            state.set_stats(stats_reply(None, &["a", "b", "c"]));
            assert!(state.all_charts_selected());
            assert_eq!(state.selected_charts.get_untracked().len(), 3);
        });
    }

    #[test]
    fn test_all_charts_toggle() {
        with_state(|state| {
            state.set_stats(stats_reply(None, &["a", "b", "c"]));

            state.set_all_charts(false);
            assert!(state.selected_charts.get_untracked().is_empty());
            assert!(!state.all_charts_selected());

            state.set_all_charts(true);
            assert_eq!(
                state.selected_charts.get_untracked().into_iter().collect::<Vec<_>>(),
                vec![0, 1, 2]
            );
        });
    }

    #[test]
    fn test_empty_selection_shows_all_charts() {
        with_state(|state| {
            state.set_stats(stats_reply(None, &["a", "b", "c"]));
            state.set_all_charts(false);

            let visible: Vec<_> = state.visible_charts().into_iter().map(|(i, _)| i).collect();
            assert_eq!(visible, vec![0, 1, 2]);

            state.toggle_chart(1);
            let visible: Vec<_> = state.visible_charts().into_iter().map(|(i, _)| i).collect();
            assert_eq!(visible, vec![1]);
        });
    }

    #[test]
    fn test_gallery_keys_change_with_each_stats_reply() {
        with_state(|state| {
            state.set_stats(stats_reply(None, &["all-0", "all-1"]));
            let before = state.gallery_items();

            // Same indices and titles, different images
            state.set_stats(stats_reply(Some("Alice"), &["alice-0", "alice-1"]));
            let after = state.gallery_items();

            assert_eq!(before[0].1.title, after[0].1.title);
            assert_ne!(before[0].0, after[0].0);
            assert_ne!(before[1].0, after[1].0);
            assert_eq!(after[0].1.img, "alice-0");
        });
    }

    #[test]
    fn test_begin_upload_drops_previous_results() {
        with_state(|state| {
            state.users.set(vec!["Ana".into()]);
            state.set_stats(stats_reply(None, &["a"]));
            state.error.set(Some("Upload failed".into()));

            state.begin_upload("next.txt".into());

            assert!(state.loading.get_untracked());
            assert!(state.controls_disabled());
            assert!(state.error.get_untracked().is_none());
            assert!(state.users.get_untracked().is_empty());
            assert!(state.stats.get_untracked().is_none());
            assert!(state.charts.get_untracked().is_empty());
            assert_eq!(state.file_name.get_untracked().as_deref(), Some("next.txt"));
        });
    }

    #[test]
    fn test_reset_clears_everything_but_loading() {
        with_state(|state| {
            state.file_name.set(Some("chat.txt".into()));
            state.users.set(vec!["Ana".into(), "Bo".into()]);
            state.selected_user.set("Ana".into());
            state.set_stats(stats_reply(Some("Ana"), &["a", "b"]));
            state.summary.set(Some(RangeSummary {
                total_messages: 4,
                top_sender: Some("Ana".into()),
                top_sender_count: 3,
                most_active_hour: Some(20),
                top_words: vec!["hi".into()],
            }));
            state.from_date.set("2024-01-01".into());
            state.to_date.set("2024-01-31".into());
            state.recommendation_text.set("More charts".into());
            state.recommendation_status.set(Some("Sending...".into()));
            state.error.set(Some("Failed to summarize".into()));
            state.loading.set(true);

            state.reset();

            assert!(state.file_name.get_untracked().is_none());
            assert!(state.users.get_untracked().is_empty());
            assert!(state.selected_user.get_untracked().is_empty());
            assert!(state.stats.get_untracked().is_none());
            assert!(state.charts.get_untracked().is_empty());
            assert!(state.selected_charts.get_untracked().is_empty());
            assert!(state.summary.get_untracked().is_none());
            assert!(state.from_date.get_untracked().is_empty());
            assert!(state.to_date.get_untracked().is_empty());
            assert!(state.recommendation_text.get_untracked().is_empty());
            assert!(state.recommendation_status.get_untracked().is_none());
            assert!(state.error.get_untracked().is_none());
            assert!(!state.has_chat());
            assert!(state.loading.get_untracked());
        });
    }

    #[test]
    fn test_failed_request_settles_with_message() {
        with_state(|state| {
            state.begin_upload("chat.txt".into());
            state.settle(Some("Upload failed".into()));

            assert!(!state.loading.get_untracked());
            assert!(!state.controls_disabled());
            assert_eq!(state.error.get_untracked().as_deref(), Some("Upload failed"));
        });
    }

    #[test]
    fn test_successful_request_settles_without_message() {
        with_state(|state| {
            state.loading.set(true);
            state.settle(None);

            assert!(!state.loading.get_untracked());
            assert!(state.error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_summarize_needs_both_dates_and_idle() {
        with_state(|state| {
            assert!(!state.can_summarize());

            state.from_date.set("2024-01-01".into());
            state.to_date.set("2024-01-31".into());
            assert!(state.can_summarize());

            state.loading.set(true);
            assert!(!state.can_summarize());
        });
    }

    #[test]
    fn test_api_base_is_normalized() {
        with_state(|state| {
            assert_eq!(state.api_base.get_untracked(), crate::api::DEFAULT_API_BASE);

            state.set_api_base("http://10.0.0.2:5000/");
            assert_eq!(state.api_base.get_untracked(), "http://10.0.0.2:5000");
        });
    }

    #[test]
    fn test_loading_message_wraps() {
        with_state(|state| {
            for _ in 0..LOADING_MESSAGES.len() {
                state.advance_loading_message();
            }
            assert_eq!(state.current_loading_message(), LOADING_MESSAGES[0]);
        });
    }
}
