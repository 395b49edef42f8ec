/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Derivation of the display view from a raw analysis response.
//!
//! The price prediction here is a fixed placeholder agreed with the service:
//! the service only says up or down, and the client turns that into a +/-2%
//! move with one of two confidence constants.

use crate::analysis::{RawAnalysisResponse, RawNewsItem};
use crate::view::{AnalysisView, NewsItemView, Recommendation, Sentiment};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Number of headline characters kept in a news summary
pub const SUMMARY_CHARS: usize = 150;

const SUMMARY_SUFFIX: &str = "...";
const UP_FACTOR: f64 = 1.02;
const DOWN_FACTOR: f64 = 0.98;
const PREDICTED_CHANGE_PCT: f64 = 2.0;
const CONFIDENCE_WITH_PREDICTION: f64 = 0.75;
const CONFIDENCE_WITHOUT_PREDICTION: f64 = 0.5;

/// Build the view for one analysis run. Pure; `raw` is left untouched.
pub fn derive_view_model(raw: &RawAnalysisResponse) -> AnalysisView {
    let counts = raw.sentiment_counts;

    let average_score = if raw.total_headlines == 0 {
        None
    } else {
        let balance = i64::from(counts.positive) - i64::from(counts.negative);
        Some(balance as f64 / f64::from(raw.total_headlines))
    };

    let current_price = raw.price_history.last().copied().unwrap_or(0.0);
    let (predicted_price, predicted_change_pct) = match raw.next_day_up {
        Some(true) => (Some(current_price * UP_FACTOR), Some(PREDICTED_CHANGE_PCT)),
        Some(false) => (Some(current_price * DOWN_FACTOR), Some(-PREDICTED_CHANGE_PCT)),
        None => (None, None),
    };
    let confidence = if raw.next_day_up.is_some() {
        CONFIDENCE_WITH_PREDICTION
    } else {
        CONFIDENCE_WITHOUT_PREDICTION
    };

    AnalysisView {
        symbol: raw.symbol.clone(),
        days_analyzed: raw.days_analyzed,
        sentiment_counts: counts,
        total_headlines: raw.total_headlines,
        overall_sentiment: Sentiment::from_counts(&counts),
        average_score,
        recommendation: Recommendation::from_counts(&counts),
        next_day_up: raw.next_day_up,
        current_price,
        predicted_price,
        predicted_change_pct,
        confidence,
        year_high: raw.price_history.iter().copied().reduce(f64::max),
        year_low: raw.price_history.iter().copied().reduce(f64::min),
        latest_volume: raw.volume_history.last().copied(),
        news: raw.news.iter().map(news_item_view).collect(),
    }
}

/// First [`SUMMARY_CHARS`] characters of the headline followed by `...`.
///
/// The suffix is appended even when nothing was cut.
pub fn summarize_headline(headline: &str) -> String {
    let mut summary: String = headline.chars().take(SUMMARY_CHARS).collect();
    summary.push_str(SUMMARY_SUFFIX);
    summary
}

fn news_item_view(item: &RawNewsItem) -> NewsItemView {
    NewsItemView {
        headline: item.headline.clone(),
        date: item.date.clone(),
        published: parse_published(&item.date),
        summary: summarize_headline(&item.headline),
        sentiment: item.sentiment.label().to_string(),
    }
}

// Accepts RFC 3339, naive ISO timestamps and bare dates.
fn parse_published(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}
