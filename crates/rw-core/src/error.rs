use thiserror::Error;

/// The main error type for rw-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Ticker was blank after trimming, no request was issued
  #[error("Invalid symbol: {0:?}")]
  InvalidSymbol(String),

  /// Non-2xx response from the analysis service
  #[error("HTTP {status}: {status_text}")]
  Http {
    status: u16,
    status_text: String,
    /// `detail` field of the error body, when the service sent one
    detail: Option<String>,
  },

  /// Transport failure: DNS, connection refused, timeout, truncated body
  #[error("Network error: {0}")]
  Network(String),

  /// Response body was not the expected JSON
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// Status code for `Http` errors
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Http { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Single line shown to the user in place of a result.
  ///
  /// Falls back to the `Display` text, but prefers the service's own
  /// explanation for HTTP errors since it names the symbol that failed.
  pub fn user_message(&self) -> String {
    match self {
      Error::Http { detail: Some(detail), .. } => format!("{self} ({detail})"),
      _ => self.to_string(),
    }
  }
}

/// Result type alias for rw-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_http_error_message_format() {
    let err = Error::Http { status: 404, status_text: "Not Found".to_string(), detail: None };
    assert_eq!(err.to_string(), "HTTP 404: Not Found");
    assert_eq!(err.status(), Some(404));
  }

  #[test]
  fn test_user_message_includes_detail() {
    let err = Error::Http {
      status: 404,
      status_text: "Not Found".to_string(),
      detail: Some("No news found for ZZZZ. Try a different stock symbol.".to_string()),
    };
    assert_eq!(
      err.user_message(),
      "HTTP 404: Not Found (No news found for ZZZZ. Try a different stock symbol.)"
    );
  }

  #[test]
  fn test_non_http_errors_have_no_status() {
    assert_eq!(Error::Network("connection refused".to_string()).status(), None);
    assert_eq!(Error::Parse("expected value".to_string()).user_message(), "Parse error: expected value");
  }
}
