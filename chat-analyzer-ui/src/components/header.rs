//! Header Component
//!
//! Top bar with the brand and the page links.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💬"</span>
                        <span class="text-xl font-bold text-white">"Chat Analyzer"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <HeaderLink href="/" label="Analyzer" />
                        <HeaderLink href="/settings" label="Settings" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn HeaderLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
