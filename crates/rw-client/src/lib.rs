//! # rw-client
//!
//! Client for the RhymeWatch sentiment analysis service.
//!
//! ## Features
//!
//! - **Single request contract**: one `GET /analyze` per analysis, no retries
//! - **Typed errors**: HTTP, network and parse failures are distinct variants
//! - **Pluggable**: the [`AnalysisClient`] trait lets tests swap in a stub
//! - **Session**: [`AnalysisSession`] tracks the dashboard state and drops
//!   responses that arrive after a newer request was issued
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rw_client::{AnalysisSession, Outcome, RhymeWatchClient};
//! use rw_core::{Config, TimeRange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let session = AnalysisSession::new(RhymeWatchClient::new(config)?, TimeRange::SixMonths);
//!
//!     if session.analyze_symbol("aapl").await == Outcome::Applied {
//!         let snapshot = session.snapshot().await;
//!         println!("{:?}", snapshot.view.map(|v| v.recommendation));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, rw_core::Error>`.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod session;
pub mod transport;

// Re-export the main client and common types
pub use client::{AnalysisClient, RhymeWatchClient};
pub use rw_core::{Config, Error, Result};
pub use rw_models::*;
pub use session::{AnalysisSession, Outcome, RequestTicket, SessionSnapshot};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{analysis::AnalysisEndpoints, service::ServiceEndpoints};
