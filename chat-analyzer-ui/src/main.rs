//! Chat Analyzer
//!
//! Single-page chat transcript analyzer built with Leptos (WASM).
//!
//! # Features
//!
//! - Drag-and-drop upload of exported chat transcripts
//! - Per-participant statistics
//! - Chart gallery with selection and zoom
//! - Date-range summaries
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All analysis happens in the remote analysis service, reached
//! over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
