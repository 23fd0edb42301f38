//! State Management
//!
//! Global analyzer state, chart selection helpers and the actions that
//! talk to the API.

pub mod actions;
pub mod global;
pub mod selection;

pub use global::{provide_analyzer_state, use_analyzer_state, AnalyzerState};
