//! Display-ready models derived from an analysis response

use crate::analysis::SentimentCounts;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Sentiment class of a headline or of the whole response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    /// Also absorbs labels the service may add later
    #[default]
    #[serde(other)]
    Neutral,
}

impl Sentiment {
    /// Compare positive against negative counts; ties are neutral
    pub fn from_counts(counts: &SentimentCounts) -> Self {
        if counts.positive > counts.negative {
            Sentiment::Positive
        } else if counts.negative > counts.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Uppercase label used for display
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Investment action implied by the sentiment balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Avoid,
}

impl Recommendation {
    /// Same comparison as [`Sentiment::from_counts`], expressed as an action.
    ///
    /// Returns `None` when no headline was classified at all.
    pub fn from_counts(counts: &SentimentCounts) -> Option<Self> {
        if counts.total() == 0 {
            return None;
        }
        Some(match Sentiment::from_counts(counts) {
            Sentiment::Positive => Recommendation::Buy,
            Sentiment::Negative => Recommendation::Avoid,
            Sentiment::Neutral => Recommendation::Hold,
        })
    }

    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Avoid => "Avoid",
        }
    }

    /// Badge color as a `#rrggbb` hex string
    pub fn color(&self) -> &'static str {
        match self {
            Recommendation::Buy => "#22c55e",
            Recommendation::Hold => "#6b7280",
            Recommendation::Avoid => "#ef4444",
        }
    }

    /// Badge color as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Recommendation::Buy => (0x22, 0xc5, 0x5e),
            Recommendation::Hold => (0x6b, 0x72, 0x80),
            Recommendation::Avoid => (0xef, 0x44, 0x44),
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Everything the renderer needs for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisView {
    pub symbol: String,
    pub days_analyzed: Option<u32>,
    pub sentiment_counts: SentimentCounts,
    pub total_headlines: u32,

    pub overall_sentiment: Sentiment,
    /// `(positive - negative) / total_headlines`, `None` without headlines
    pub average_score: Option<f64>,
    pub recommendation: Option<Recommendation>,

    pub next_day_up: Option<bool>,
    /// Latest close, `0.0` without price history
    pub current_price: f64,
    pub predicted_price: Option<f64>,
    pub predicted_change_pct: Option<f64>,
    pub confidence: f64,

    pub year_high: Option<f64>,
    pub year_low: Option<f64>,
    pub latest_volume: Option<f64>,

    pub news: Vec<NewsItemView>,
}

impl AnalysisView {
    /// Whether the service produced a directional prediction
    pub fn has_prediction(&self) -> bool {
        self.next_day_up.is_some()
    }
}

/// A headline reshaped for the news list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItemView {
    pub headline: String,
    /// Date string as sent by the service
    pub date: String,
    /// `date` parsed, when it was in a recognized format
    pub published: Option<NaiveDateTime>,
    pub summary: String,
    /// Uppercased sentiment label
    pub sentiment: String,
}
