//! Loading Component
//!
//! Full-screen overlay with rotating status messages.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::use_analyzer_state;

/// Milliseconds each loading message stays on screen
const MESSAGE_INTERVAL_MS: u32 = 3000;

/// Overlay shown while a request is in flight
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = use_analyzer_state();

    // Rotate messages while loading; dropping the interval stops it
    create_effect(move |_| {
        if state.loading.get() {
            Some(Interval::new(MESSAGE_INTERVAL_MS, move || {
                state.advance_loading_message();
            }))
        } else {
            None
        }
    });

    view! {
        <Show when=move || state.loading.get()>
            <div
                class="fixed inset-0 z-40 bg-gray-900/80 flex items-center justify-center"
                aria-live="polite"
                aria-busy="true"
                role="alert"
            >
                <div class="flex flex-col items-center space-y-4">
                    <div class="loading-spinner w-10 h-10" />
                    <div class="text-lg text-gray-200">
                        {move || state.current_loading_message()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
