//! Error Banner Component
//!
//! Shows the single user-visible error message.

use leptos::*;

use crate::state::use_analyzer_state;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        {move || {
            state.error.get().map(|msg| view! {
                <div class="mt-4 flex items-center space-x-3 bg-red-600/90 text-white px-4 py-3 rounded-lg">
                    <span class="text-lg">"✕"</span>
                    <span class="text-sm font-medium">{msg}</span>
                </div>
            })
        }}
    }
}
