//! Lookback windows offered by the range selector

use serde::{Deserialize, Serialize};

/// Day count used when a label is not in the table
pub const DEFAULT_DAYS: u32 = 180;

/// Time range offered to the user, mapped to a day count for the backend query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
  #[serde(rename = "1M")]
  OneMonth,
  #[serde(rename = "3M")]
  ThreeMonths,
  #[default]
  #[serde(rename = "6M")]
  SixMonths,
  #[serde(rename = "1Y")]
  OneYear,
  #[serde(rename = "5Y")]
  FiveYears,
}

impl TimeRange {
  /// Every range in selector order
  pub const ALL: [TimeRange; 5] = [
    TimeRange::OneMonth,
    TimeRange::ThreeMonths,
    TimeRange::SixMonths,
    TimeRange::OneYear,
    TimeRange::FiveYears,
  ];

  /// Exact, case-sensitive match against the short labels
  pub fn parse(label: &str) -> Option<Self> {
    match label {
      "1M" => Some(TimeRange::OneMonth),
      "3M" => Some(TimeRange::ThreeMonths),
      "6M" => Some(TimeRange::SixMonths),
      "1Y" => Some(TimeRange::OneYear),
      "5Y" => Some(TimeRange::FiveYears),
      _ => None,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      TimeRange::OneMonth => "1M",
      TimeRange::ThreeMonths => "3M",
      TimeRange::SixMonths => "6M",
      TimeRange::OneYear => "1Y",
      TimeRange::FiveYears => "5Y",
    }
  }

  /// Human readable name shown next to the label
  pub fn description(&self) -> &'static str {
    match self {
      TimeRange::OneMonth => "1 Month",
      TimeRange::ThreeMonths => "3 Months",
      TimeRange::SixMonths => "6 Months",
      TimeRange::OneYear => "1 Year",
      TimeRange::FiveYears => "5 Years",
    }
  }

  pub fn days(&self) -> u32 {
    match self {
      TimeRange::OneMonth => 30,
      TimeRange::ThreeMonths => 90,
      TimeRange::SixMonths => 180,
      TimeRange::OneYear => 365,
      TimeRange::FiveYears => 1825,
    }
  }
}

impl std::fmt::Display for TimeRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.label())
  }
}

/// Map a range label to the number of days to look back.
///
/// Unknown labels resolve to [`DEFAULT_DAYS`]; this never fails.
pub fn resolve_days(label: &str) -> u32 {
  TimeRange::parse(label).map(|range| range.days()).unwrap_or(DEFAULT_DAYS)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_days_table() {
    assert_eq!(resolve_days("1M"), 30);
    assert_eq!(resolve_days("3M"), 90);
    assert_eq!(resolve_days("6M"), 180);
    assert_eq!(resolve_days("1Y"), 365);
    assert_eq!(resolve_days("5Y"), 1825);
  }

  #[test]
  fn test_resolve_days_fallback() {
    assert_eq!(resolve_days(""), DEFAULT_DAYS);
    assert_eq!(resolve_days("2W"), DEFAULT_DAYS);
    assert_eq!(resolve_days("1 Week"), DEFAULT_DAYS);
  }

  #[test]
  fn test_resolve_days_is_case_sensitive() {
    assert_eq!(resolve_days("1y"), DEFAULT_DAYS);
    assert_eq!(resolve_days(" 1Y"), DEFAULT_DAYS);
  }

  #[test]
  fn test_labels_round_trip_through_parse() {
    for range in TimeRange::ALL {
      assert_eq!(TimeRange::parse(range.label()), Some(range));
      assert_eq!(resolve_days(range.label()), range.days());
    }
  }

  #[test]
  fn test_default_is_six_months() {
    assert_eq!(TimeRange::default(), TimeRange::SixMonths);
    assert_eq!(TimeRange::default().days(), DEFAULT_DAYS);
  }
}
