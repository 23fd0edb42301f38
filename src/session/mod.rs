//! Analyzer Session
//!
//! The state behind one analysis run and the request sequences that update
//! it.
//!
//! ## Architecture
//!
//! - **AnalyzerSession**: ephemeral UI state (users, stats, charts, summary)
//! - **ChartSelection**: which charts are ticked, and which are visible
//! - **LoadingTicker**: rotating messages while a request is pending
//! - **workflow**: upload, user change, summary and recommendation flows
//!
//! ## Data Flow
//!
//! 1. The transcript is uploaded and the participant list comes back
//! 2. Statistics and charts for all users are fetched right after
//! 3. Picking a participant refetches statistics filtered by sender
//! 4. A date range can be summarized independently of the filter

mod loading;
mod selection;
mod state;
pub mod workflow;

pub use loading::{LoadingTicker, LOADING_MESSAGES, LOADING_MESSAGE_INTERVAL};
pub use selection::ChartSelection;
pub use state::{AnalyzerSession, DragKind};
pub use workflow::{
    change_user, send_recommendation, summarize_range, upload_chat, WorkflowError,
    WorkflowResult,
};
