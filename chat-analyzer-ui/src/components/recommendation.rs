//! Recommendation Component

use leptos::*;

use crate::state::{actions, use_analyzer_state};

/// Free-text feedback box with its status line
#[component]
pub fn RecommendationBox() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold">"Recommendations"</h2>
            <textarea
                rows="4"
                placeholder="Suggest a chart or feature..."
                class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none resize-none"
                disabled=move || state.controls_disabled()
                prop:value=move || state.recommendation_text.get()
                on:input=move |ev| state.recommendation_text.set(event_target_value(&ev))
            />
            <button
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                       rounded-lg font-medium transition-colors"
                disabled=move || state.controls_disabled()
                on:click=move |_| actions::send_recommendation(state)
            >
                "Send"
            </button>
            {move || state.recommendation_status.get().map(|status| view! {
                <p class="text-sm text-gray-400">{status}</p>
            })}
        </section>
    }
}
