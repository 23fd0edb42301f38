//! Data model
//!
//! Typed views of the JSON exchanged with the analysis service.
//!
//! ## Shapes
//!
//! - `POST /analyze` → [`UploadResponse`]
//! - `GET /stats` → [`StatsResponse`] ([`ChatStats`] + [`ChartDescriptor`]s)
//! - `GET /summary` → [`RangeSummary`]
//! - `POST /recommendations` ← [`RecommendationRequest`]
//! - any failure → [`ErrorBody`]

mod error;
mod types;

pub use error::{DateRangeError, ImageError};
pub use types::{
    ChartDescriptor, ChatStats, DateRange, ErrorBody, RangeSummary, RecommendationRequest,
    StatsResponse, UploadResponse, ALL_USERS_LABEL, DATE_FORMAT,
};
