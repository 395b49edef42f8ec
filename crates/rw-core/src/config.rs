//! Configuration management for the RhymeWatch client

use crate::error::{Error, Result};
use crate::range::TimeRange;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the RhymeWatch client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL of the analysis service
  pub base_url: String,

  /// Request timeout in seconds; `None` keeps the HTTP client's default
  pub timeout_secs: Option<u64>,

  /// Range selected when a session starts
  pub default_range: TimeRange,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build configuration from an arbitrary key lookup.
  ///
  /// Reads `RW_API_URL`, `RW_TIMEOUT_SECS` and `RW_DEFAULT_RANGE`.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url = lookup("RW_API_URL").unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());
    let base_url = validate_base_url(&base_url)?;

    let timeout_secs = match lookup("RW_TIMEOUT_SECS") {
      Some(raw) => match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => return Err(Error::Config(format!("Invalid RW_TIMEOUT_SECS: {raw}"))),
      },
      None => None,
    };

    let default_range = match lookup("RW_DEFAULT_RANGE") {
      Some(raw) => TimeRange::parse(raw.trim())
        .ok_or_else(|| Error::Config(format!("Invalid RW_DEFAULT_RANGE: {raw}")))?,
      None => TimeRange::default(),
    };

    Ok(Config { base_url, timeout_secs, default_range })
  }

  /// Create a config pointing at the given service (for testing)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config { base_url: base_url.into(), timeout_secs: None, default_range: TimeRange::default() }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::with_base_url(crate::DEFAULT_BASE_URL)
  }
}

fn validate_base_url(raw: &str) -> Result<String> {
  let trimmed = raw.trim().trim_end_matches('/');
  let url = Url::parse(trimmed).map_err(|e| Error::Config(format!("Invalid RW_API_URL {raw}: {e}")))?;
  match url.scheme() {
    "http" | "https" => Ok(trimmed.to_string()),
    other => Err(Error::Config(format!("Unsupported RW_API_URL scheme: {other}"))),
  }
}
