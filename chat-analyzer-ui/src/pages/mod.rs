//! Pages
//!
//! Top-level page components for each route.

pub mod analyzer;
pub mod settings;

pub use analyzer::Analyzer;
pub use settings::Settings;
