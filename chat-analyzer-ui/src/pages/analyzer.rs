//! Analyzer Page
//!
//! Controls on the left (the upload area until a transcript is loaded),
//! results on the right.

use leptos::*;

use crate::components::{
    ChartGallery, ChartPicker, DateRangeForm, ErrorBanner, RecommendationBox, ResetButton,
    StatsPanel, SummaryCard, UploadArea, UserSelect,
};
use crate::state::use_analyzer_state;

#[component]
pub fn Analyzer() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Chat Analyzer"</h1>
                <p class="text-gray-400 mt-1">"Upload an exported chat to see who talks, when and about what"</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                <aside class="bg-gray-800 rounded-xl p-4 space-y-6 lg:col-span-1">
                    <Show
                        when=move || state.has_chat()
                        fallback=|| view! { <UploadArea /> }
                    >
                        <UserSelect />
                        <ChartPicker />
                        <DateRangeForm />
                        <RecommendationBox />
                        <ResetButton />
                    </Show>
                    <ErrorBanner />
                </aside>
                <div class="space-y-6 lg:col-span-3">
                    <StatsPanel />
                    <SummaryCard />
                    <ChartGallery />
                </div>
            </div>
        </div>
    }
}
