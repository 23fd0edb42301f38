//! UI Components
//!
//! Leptos components for the analyzer page.

pub mod chart_gallery;
pub mod controls;
pub mod error_banner;
pub mod header;
pub mod loading;
pub mod recommendation;
pub mod stats_panel;
pub mod upload_area;

pub use chart_gallery::ChartGallery;
pub use controls::{ChartPicker, DateRangeForm, ResetButton, UserSelect};
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use loading::LoadingOverlay;
pub use recommendation::RecommendationBox;
pub use stats_panel::{StatsPanel, SummaryCard};
pub use upload_area::UploadArea;
