pub mod analyze;
pub mod health;
pub mod interactive;
pub mod ranges;

use indicatif::{ProgressBar, ProgressStyle};
use rw_core::TimeRange;
use std::time::Duration;

/// clap value parser for range labels
pub fn parse_range(label: &str) -> Result<TimeRange, String> {
  TimeRange::parse(label).ok_or_else(|| {
    let known: Vec<&str> = TimeRange::ALL.iter().map(|r| r.label()).collect();
    format!("unknown range '{}', expected one of {}", label, known.join(", "))
  })
}

/// Spinner shown while a request is in flight
pub fn spinner(message: String) -> ProgressBar {
  let pb = ProgressBar::new_spinner();
  pb.set_style(
    ProgressStyle::default_spinner()
      .template("{spinner:.cyan} {msg} [{elapsed}]")
      .expect("Invalid spinner template"),
  );
  pb.set_message(message);
  pb.enable_steady_tick(Duration::from_millis(100));
  pb
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_range() {
    assert_eq!(parse_range("3M"), Ok(TimeRange::ThreeMonths));
    let err = parse_range("3m").unwrap_err();
    assert!(err.contains("1M, 3M, 6M, 1Y, 5Y"));
  }
}
