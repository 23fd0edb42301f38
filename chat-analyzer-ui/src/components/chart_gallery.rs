//! Chart Gallery Component
//!
//! Grid of the selected chart images with click-to-zoom.

use leptos::*;

use crate::state::use_analyzer_state;

#[component]
pub fn ChartGallery() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <section class="grid grid-cols-1 lg:grid-cols-2 gap-4">
            <For
                each=move || state.gallery_items()
                key=|(key, _)| *key
                children=move |(_, chart)| {
                    let img = chart.img.clone();
                    view! {
                        <figure class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                            <figcaption class="text-sm font-medium text-gray-300 mb-2">
                                {chart.title.clone()}
                            </figcaption>
                            <img
                                src=chart.img
                                alt=chart.title
                                class="w-full rounded cursor-zoom-in"
                                on:click=move |_| state.zoomed.set(Some(img.clone()))
                            />
                        </figure>
                    }
                }
            />
        </section>
        <ZoomOverlay />
    }
}

/// Enlarged chart; any click closes it
#[component]
fn ZoomOverlay() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        {move || state.zoomed.get().map(|src| view! {
            <div
                class="fixed inset-0 z-50 bg-black/80 flex items-center justify-center cursor-zoom-out"
                on:click=move |_| state.zoomed.set(None)
            >
                <img src=src alt="Zoomed chart" class="max-w-[95vw] max-h-[95vh]" />
            </div>
        })}
    }
}
