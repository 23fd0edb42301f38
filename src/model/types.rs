//! Response and request types exchanged with the analysis service
//!
//! This module defines the JSON shapes the service produces and consumes:
//! - `UploadResponse`: participants found in an uploaded transcript
//! - `StatsResponse`: statistics plus chart descriptors
//! - `RangeSummary`: the date-range summary
//! - `DateRange`: validated start/end dates for summary queries

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{DateRangeError, ImageError};

/// Label the service uses when statistics cover every participant
pub const ALL_USERS_LABEL: &str = "All Users";

/// Date format for summary query parameters and form inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reply of the upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Participant names, sorted by the service
    #[serde(default)]
    pub users: Vec<String>,
}

/// Headline statistics for one participant or the whole chat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatStats {
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default)]
    pub total_days: u64,
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub total_words: u64,
}

fn default_sender() -> String {
    ALL_USERS_LABEL.to_string()
}

impl ChatStats {
    /// Average words per message, rounded to the nearest integer
    pub fn average_words(&self) -> u64 {
        if self.total_messages == 0 {
            return 0;
        }
        (self.total_words as f64 / self.total_messages as f64).round() as u64
    }
}

/// A chart produced by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDescriptor {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    /// Image reference, usually a `data:image/png;base64,...` URL
    pub img: String,
}

impl ChartDescriptor {
    /// Decode the embedded image of a base64 data URL
    pub fn image_bytes(&self) -> Result<Vec<u8>, ImageError> {
        let rest = self
            .img
            .strip_prefix("data:")
            .ok_or(ImageError::NotDataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(ImageError::NotDataUrl)?;
        if !header.ends_with(";base64") {
            return Err(ImageError::NotBase64);
        }
        STANDARD
            .decode(payload.trim())
            .map_err(|e| ImageError::Decode(e.to_string()))
    }

    /// Media type declared by a data URL, e.g. `image/png`
    pub fn media_type(&self) -> Option<&str> {
        let rest = self.img.strip_prefix("data:")?;
        let header = rest.split_once(',')?.0;
        header.split(';').next().filter(|m| !m.is_empty())
    }

    /// Filesystem-safe name derived from the title
    pub fn file_stem(&self) -> String {
        let mut stem = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                stem.push(c.to_ascii_lowercase());
            } else if !stem.ends_with('_') {
                stem.push('_');
            }
        }
        let stem = stem.trim_matches('_');
        if stem.is_empty() {
            "chart".to_string()
        } else {
            stem.to_string()
        }
    }
}

/// Reply of the stats endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsResponse {
    pub stats: ChatStats,
    #[serde(default)]
    pub charts: Vec<ChartDescriptor>,
}

/// Reply of the summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeSummary {
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub top_sender: Option<String>,
    #[serde(default)]
    pub top_sender_count: u64,
    /// Hour of day (0-23) with the most messages
    #[serde(default)]
    pub most_active_hour: Option<u8>,
    #[serde(default)]
    pub top_words: Vec<String>,
}

/// Body of the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub text: String,
}

/// Error payload returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Inclusive date range for summary queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse the two date inputs of the summary form
    ///
    /// Both sides must be present. The order is not checked; the service
    /// reports an empty range on its own.
    pub fn parse(from: &str, to: &str) -> Result<Self, DateRangeError> {
        let from = from.trim();
        let to = to.trim();
        if from.is_empty() || to.is_empty() {
            return Err(DateRangeError::Missing);
        }

        let parse = |s: &str| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map_err(|_| DateRangeError::Invalid(s.to_string()))
        };

        Ok(Self::new(parse(from)?, parse(to)?))
    }

    /// Query string for the summary endpoint
    pub fn to_query(&self) -> String {
        format!(
            "start={}&end={}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} – {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}
