//! Upload Area Component
//!
//! Drop zone and file picker for the chat transcript.

use leptos::*;
use wasm_bindgen::JsCast;

use super::loading::InlineLoading;
use crate::state::{actions, use_analyzer_state};

#[component]
pub fn UploadArea() -> impl IntoView {
    let state = use_analyzer_state();

    let on_drag = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let active = matches!(ev.type_().as_str(), "dragenter" | "dragover");
        state.drag_active.set(active);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        state.drag_active.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            actions::upload_chat(state, file);
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            actions::upload_chat(state, file);
        }
    };

    view! {
        <section
            class=move || {
                let base = "flex flex-col items-center justify-center h-48 rounded-xl \
                            border-2 border-dashed transition-colors";
                if state.drag_active.get() {
                    format!("{} border-primary-500 bg-gray-700", base)
                } else {
                    format!("{} border-gray-600 bg-gray-800 hover:border-primary-500", base)
                }
            }
            on:dragenter=on_drag
            on:dragover=on_drag
            on:dragleave=on_drag
            on:drop=on_drop
        >
            {move || if state.loading.get() {
                view! {
                    <p class="flex items-center gap-2 text-gray-300">
                        <InlineLoading />
                        "Processing…"
                    </p>
                }.into_view()
            } else {
                view! {
                    <input
                        id="file-upload"
                        type="file"
                        accept=".txt"
                        class="hidden"
                        on:change=on_file_change
                    />
                    <label for="file-upload" class="cursor-pointer text-lg text-gray-200">
                        {move || match state.file_name.get() {
                            Some(name) => format!("📄 {}", name),
                            None => "📁 Upload Chat (.txt)".to_string(),
                        }}
                    </label>
                    <p class="text-sm text-gray-500 mt-2">"or drop the exported file here"</p>
                }.into_view()
            }}
        </section>
    }
}
