pub mod config;
pub mod error;
pub mod range;
pub mod symbol;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use range::{resolve_days, TimeRange, DEFAULT_DAYS};
pub use symbol::normalize_symbol;

/// Paths exposed by the RhymeWatch analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// Sentiment and price analysis for one symbol
  Analyze,
  /// Liveness probe
  Health,
  /// Service banner with name and version
  Root,
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::Analyze => write!(f, "analyze"),
      Endpoint::Health => write!(f, "health"),
      Endpoint::Root => write!(f, ""),
    }
  }
}

/// Base URL of a locally running analysis service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("rw-client/", env!("CARGO_PKG_VERSION"));
