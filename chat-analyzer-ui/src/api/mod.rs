//! API Access
//!
//! HTTP calls to the chat analysis service.

pub mod client;

pub use client::{
    fetch_stats, fetch_summary, get_api_base, normalize_api_base, send_recommendation, set_api_base,
    upload_chat, RequestError, DEFAULT_API_BASE,
};
