//! Settings Page
//!
//! Where the analysis service lives.

use leptos::*;

use crate::api;
use crate::state::use_analyzer_state;

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Point the analyzer at your analysis service"</p>
            </div>

            <ApiSettings />
        </div>
    }
}

#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_analyzer_state();
    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());
    let (saved, set_saved) = create_signal(false);

    let save_url = move |_| {
        let url = api_url.get_untracked();
        api::set_api_base(&url);
        state.set_api_base(&url);
        set_api_url.set(state.api_base.get_untracked());
        set_saved.set(true);
    };

    let restore_default = move |_| {
        api::set_api_base(api::DEFAULT_API_BASE);
        state.set_api_base(api::DEFAULT_API_BASE);
        set_api_url.set(api::DEFAULT_API_BASE.to_string());
        set_saved.set(true);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <label class="block text-sm text-gray-400 mb-2">"Analysis API URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| {
                        set_saved.set(false);
                        set_api_url.set(event_target_value(&ev));
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=restore_default
                    class="px-4 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                >
                    "Default"
                </button>
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
            <Show when=move || saved.get()>
                <p class="text-sm text-green-400 mt-2">"✓ Saved"</p>
            </Show>
        </section>
    }
}
