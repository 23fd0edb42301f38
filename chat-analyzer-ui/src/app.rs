//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Header, LoadingOverlay};
use crate::pages::{Analyzer, Settings};
use crate::state::{provide_analyzer_state, use_analyzer_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_analyzer_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Header />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Analyzer />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
                <LoadingOverlay />
            </div>
        </Router>
    }
}

/// Footer showing the service address and the loaded file
#[component]
fn Footer() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || state.file_name.get()
                        .map(|name| format!("📄 {}", name))
                        .unwrap_or_else(|| "No chat loaded".to_string())}
                </div>

                <div class="text-gray-500">{move || state.api_base.get()}</div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Analyzer"
            </A>
        </div>
    }
}
