//! Raw `/analyze` response models

use crate::view::Sentiment;
use serde::{Deserialize, Deserializer, Serialize};

/// Analysis response as produced by the service.
///
/// Nothing here is validated: missing collections decode as empty and missing
/// counters as zero, so the deriver has to cope with any combination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnalysisResponse {
    /// Symbol the service analyzed (already uppercased by the service)
    pub symbol: String,

    /// Lookback window the service actually used
    pub days_analyzed: Option<u32>,

    /// Headline tally by sentiment
    #[serde(rename = "sentimentCounts")]
    pub sentiment_counts: SentimentCounts,

    /// Number of headlines analyzed; not checked against `sentiment_counts`
    pub total_headlines: u32,

    /// Closing prices, oldest first
    #[serde(rename = "priceHistory")]
    pub price_history: Vec<f64>,

    /// Traded volume, aligned with `price_history`
    #[serde(rename = "volumeHistory")]
    pub volume_history: Vec<f64>,

    /// Direction of the next session, `None` when the service had too little data
    #[serde(rename = "nextDayUp", deserialize_with = "deserialize_direction")]
    pub next_day_up: Option<bool>,

    /// Headlines with their classified sentiment
    pub news: Vec<RawNewsItem>,
}

/// Number of headlines per sentiment class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentCounts {
    pub fn new(positive: u32, neutral: u32, negative: u32) -> Self {
        Self { positive, neutral, negative }
    }

    /// Sum of all three classes
    pub fn total(&self) -> u64 {
        u64::from(self.positive) + u64::from(self.neutral) + u64::from(self.negative)
    }
}

/// One headline as returned by the service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNewsItem {
    pub headline: String,

    /// ISO-like timestamp, left as sent
    pub date: String,

    pub sentiment: Sentiment,
}

/// The service's classifier emits `0`/`1`, older builds a JSON boolean.
fn deserialize_direction<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Direction {
        Flag(bool),
        Class(i64),
    }

    let direction: Option<Direction> = Option::deserialize(deserializer)?;
    Ok(direction.map(|d| match d {
        Direction::Flag(up) => up,
        Direction::Class(class) => class > 0,
    }))
}
