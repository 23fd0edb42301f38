//! Control Components
//!
//! Participant filter, chart picker, date range and the reset button.

use leptos::*;

use crate::state::{actions, use_analyzer_state};

const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-2 \
                           border border-gray-600 focus:border-primary-500 focus:outline-none";

/// Participant filter
#[component]
pub fn UserSelect() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"User"</label>
            <select
                class=INPUT_CLASS
                disabled=move || state.controls_disabled()
                prop:value=move || state.selected_user.get()
                on:change=move |ev| actions::change_user(state, event_target_value(&ev))
            >
                <option value="">"All Users"</option>
                {move || state.users.get().into_iter().map(|user| {
                    let value = user.clone();
                    view! { <option value=value>{user}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

/// "All Charts" plus one checkbox per chart
#[component]
pub fn ChartPicker() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <div>
            <span class="block text-sm text-gray-400 mb-2">"Charts"</span>
            <label class="flex items-center space-x-2 font-medium">
                <input
                    type="checkbox"
                    disabled=move || state.controls_disabled()
                    prop:checked=move || state.all_charts_selected()
                    on:change=move |ev| state.set_all_charts(event_target_checked(&ev))
                />
                <span>"All Charts"</span>
            </label>
            <div class="mt-2 space-y-1 max-h-64 overflow-y-auto">
                {move || state.charts.get().into_iter().enumerate().map(|(index, chart)| {
                    view! {
                        <label class="flex items-center space-x-2 text-sm text-gray-300">
                            <input
                                type="checkbox"
                                disabled=move || state.controls_disabled()
                                prop:checked=move || {
                                    state.selected_charts.with(|s| s.contains(&index))
                                }
                                on:change=move |_| state.toggle_chart(index)
                            />
                            <span>{chart.title}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// From/To inputs and the Summarize button
#[component]
pub fn DateRangeForm() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <div class="space-y-2">
            <span class="block text-sm text-gray-400">"Summary"</span>
            <div class="grid grid-cols-2 gap-2">
                <input
                    type="date"
                    aria-label="From"
                    class=INPUT_CLASS
                    disabled=move || state.controls_disabled()
                    prop:value=move || state.from_date.get()
                    on:input=move |ev| state.from_date.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    aria-label="To"
                    class=INPUT_CLASS
                    disabled=move || state.controls_disabled()
                    prop:value=move || state.to_date.get()
                    on:input=move |ev| state.to_date.set(event_target_value(&ev))
                />
            </div>
            <button
                class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                       rounded-lg font-medium transition-colors"
                disabled=move || !state.can_summarize()
                on:click=move |_| actions::summarize_range(state)
            >
                "Summarize"
            </button>
        </div>
    }
}

/// "New Chat"
#[component]
pub fn ResetButton() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <button
            class="w-full px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                   rounded-lg font-medium transition-colors"
            disabled=move || state.controls_disabled()
            on:click=move |_| state.reset()
        >
            "🔄 New Chat"
        </button>
    }
}
