//! # rw-models
//!
//! Data models for the RhymeWatch analysis service.
//!
//! This crate holds the raw `/analyze` response exactly as the service sends
//! it, the display-ready [`AnalysisView`] derived from it, and the small
//! payloads returned by the health and banner endpoints.
//!
//! ## Usage
//!
//! ```ignore
//! use rw_models::{derive_view_model, RawAnalysisResponse};
//!
//! let raw: RawAnalysisResponse = serde_json::from_str(&response_json)?;
//! let view = derive_view_model(&raw);
//! println!("{} -> {:?}", view.symbol, view.recommendation);
//! ```

#![warn(clippy::all)]

pub mod analysis;
pub mod derive;
pub mod service;
pub mod view;

pub use analysis::{RawAnalysisResponse, RawNewsItem, SentimentCounts};
pub use derive::{derive_view_model, summarize_headline, SUMMARY_CHARS};
pub use service::{HealthStatus, ServiceInfo};
pub use view::{AnalysisView, NewsItemView, Recommendation, Sentiment};
