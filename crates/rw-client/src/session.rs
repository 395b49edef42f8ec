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

//! Interactive analysis session
//!
//! Holds the state behind the dashboard: the ticker being typed, the selected
//! range, whether a request is in flight, and the latest result or error.
//!
//! Every request carries a [`RequestTicket`] stamped with a generation number.
//! A response is applied only if its ticket is still the newest one issued, so
//! a slow response for an old selection can never overwrite a newer one.

use crate::client::AnalysisClient;
use rw_core::{normalize_symbol, TimeRange};
use rw_models::{derive_view_model, AnalysisView};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Identity of one issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
  pub generation: u64,
  pub symbol: String,
  pub range: TimeRange,
}

/// What happened to an analyze or range-change action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  /// The response was derived and is now the current view
  Applied,
  /// The request failed; the message is also stored in the session
  Failed(String),
  /// A newer request was issued while this one was in flight; its response was dropped
  Stale,
  /// A request is already pending, nothing was started
  Busy,
  /// No request was needed (blank ticker, or range changed before any result)
  Ignored,
}

/// Point-in-time copy of the session for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
  pub ticker: String,
  pub range: TimeRange,
  pub pending: bool,
  pub view: Option<AnalysisView>,
  pub error: Option<String>,
  /// Request that produced `view`, or that is in flight when `pending`
  pub request: Option<RequestTicket>,
}

#[derive(Debug, Default)]
struct SessionState {
  ticker: String,
  range: TimeRange,
  pending: bool,
  view: Option<AnalysisView>,
  error: Option<String>,
  generation: u64,
  request: Option<RequestTicket>,
}

impl SessionState {
  fn begin(&mut self, symbol: String) -> RequestTicket {
    self.generation += 1;
    self.pending = true;
    self.error = None;

    let ticket = RequestTicket { generation: self.generation, symbol, range: self.range };
    self.request = Some(ticket.clone());
    ticket
  }
}

/// Dashboard state driven by user actions
pub struct AnalysisSession<C> {
  client: C,
  state: Mutex<SessionState>,
}

impl<C> AnalysisSession<C>
where
  C: AnalysisClient,
{
  pub fn new(client: C, range: TimeRange) -> Self {
    Self { client, state: Mutex::new(SessionState { range, ..SessionState::default() }) }
  }

  /// Replace the ticker input; uppercased as typed
  pub async fn set_ticker(&self, input: &str) {
    self.state.lock().await.ticker = input.to_uppercase();
  }

  /// Run an analysis for the current ticker and range.
  ///
  /// Does nothing for a blank ticker, and reports [`Outcome::Busy`] while
  /// another request is pending.
  pub async fn analyze(&self) -> Outcome {
    let ticket = {
      let mut state = self.state.lock().await;
      if state.pending {
        debug!("Analyze ignored, request {} still pending", state.generation);
        return Outcome::Busy;
      }
      let Some(symbol) = normalize_symbol(&state.ticker) else {
        return Outcome::Ignored;
      };
      state.begin(symbol)
    };

    self.run(ticket).await
  }

  /// Set the ticker and analyze it
  pub async fn analyze_symbol(&self, input: &str) -> Outcome {
    self.set_ticker(input).await;
    self.analyze().await
  }

  /// Change the selected range.
  ///
  /// Re-runs the analysis only when a result is already on screen; the new
  /// request supersedes any request still in flight.
  pub async fn select_range(&self, range: TimeRange) -> Outcome {
    let ticket = {
      let mut state = self.state.lock().await;
      state.range = range;
      if state.view.is_none() {
        return Outcome::Ignored;
      }
      let Some(symbol) = normalize_symbol(&state.ticker) else {
        return Outcome::Ignored;
      };
      state.begin(symbol)
    };

    self.run(ticket).await
  }

  pub async fn snapshot(&self) -> SessionSnapshot {
    let state = self.state.lock().await;
    SessionSnapshot {
      ticker: state.ticker.clone(),
      range: state.range,
      pending: state.pending,
      view: state.view.clone(),
      error: state.error.clone(),
      request: state.request.clone(),
    }
  }

  async fn run(&self, ticket: RequestTicket) -> Outcome {
    info!("Analyzing {} over {} ({} days)", ticket.symbol, ticket.range, ticket.range.days());

    // the lock is released while the request is in flight
    let result = self
      .client
      .fetch_analysis(&ticket.symbol, ticket.range.days())
      .await
      .map(|raw| derive_view_model(&raw));

    let mut state = self.state.lock().await;
    if state.generation != ticket.generation {
      debug!(
        "Dropping response for {} ({}), superseded by request {}",
        ticket.symbol, ticket.range, state.generation
      );
      return Outcome::Stale;
    }

    state.pending = false;
    match result {
      Ok(view) => {
        state.view = Some(view);
        Outcome::Applied
      }
      Err(e) => {
        warn!("Analysis request failed: {}", e);
        let message = e.user_message();
        state.view = None;
        state.error = Some(message.clone());
        Outcome::Failed(message)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use rw_core::{Error, Result};
  use rw_models::{RawAnalysisResponse, SentimentCounts};
  use std::collections::HashMap;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;
  use tokio::sync::Notify;

  struct Gate {
    started: Notify,
    release: Notify,
  }

  /// Answers by day count; a gated day count blocks until released
  #[derive(Default)]
  struct StubClient {
    failures: HashMap<u32, u16>,
    gates: HashMap<u32, Arc<Gate>>,
    calls: AtomicUsize,
  }

  impl StubClient {
    fn gate(&mut self, days: u32) -> Arc<Gate> {
      let gate = Arc::new(Gate { started: Notify::new(), release: Notify::new() });
      self.gates.insert(days, gate.clone());
      gate
    }
  }

  #[async_trait]
  impl AnalysisClient for StubClient {
    async fn fetch_analysis(&self, symbol: &str, days: u32) -> Result<RawAnalysisResponse> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if let Some(gate) = self.gates.get(&days) {
        gate.started.notify_one();
        gate.release.notified().await;
      }
      if let Some(status) = self.failures.get(&days) {
        return Err(Error::Http { status: *status, status_text: "Not Found".to_string(), detail: None });
      }
      Ok(RawAnalysisResponse {
        symbol: symbol.to_string(),
        days_analyzed: Some(days),
        sentiment_counts: SentimentCounts::new(5, 3, 2),
        total_headlines: 10,
        price_history: vec![100.0, 105.0, 98.0],
        volume_history: vec![1.0, 2.0, 3.0],
        next_day_up: Some(true),
        news: vec![],
      })
    }
  }

  #[tokio::test]
  async fn test_analyze_applies_result() {
    let session = AnalysisSession::new(StubClient::default(), TimeRange::SixMonths);

    assert_eq!(session.analyze_symbol(" aapl ").await, Outcome::Applied);

    let snapshot = session.snapshot().await;
    let view = snapshot.view.unwrap();
    assert_eq!(view.symbol, "AAPL");
    assert_eq!(view.days_analyzed, Some(180));
    assert!(!snapshot.pending);
    assert_eq!(snapshot.error, None);
    assert_eq!(snapshot.request.unwrap().generation, 1);
  }

  #[tokio::test]
  async fn test_blank_ticker_issues_no_request() {
    let client = Arc::new(StubClient::default());
    let session = AnalysisSession::new(client.clone(), TimeRange::default());

    assert_eq!(session.analyze_symbol("   ").await, Outcome::Ignored);
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_range_change_without_result_only_stores_range() {
    let client = Arc::new(StubClient::default());
    let session = AnalysisSession::new(client.clone(), TimeRange::default());
    session.set_ticker("msft").await;

    assert_eq!(session.select_range(TimeRange::OneYear).await, Outcome::Ignored);
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.ticker, "MSFT");
    assert_eq!(snapshot.range, TimeRange::OneYear);
  }

  #[tokio::test]
  async fn test_range_change_with_result_refetches() {
    let session = AnalysisSession::new(StubClient::default(), TimeRange::SixMonths);
    session.analyze_symbol("AAPL").await;

    assert_eq!(session.select_range(TimeRange::FiveYears).await, Outcome::Applied);
    let view = session.snapshot().await.view.unwrap();
    assert_eq!(view.days_analyzed, Some(1825));
  }

  #[tokio::test]
  async fn test_failure_resets_to_empty_state() {
    let mut client = StubClient::default();
    client.failures.insert(365, 404);
    let session = AnalysisSession::new(client, TimeRange::SixMonths);
    session.analyze_symbol("AAPL").await;

    let outcome = session.select_range(TimeRange::OneYear).await;
    assert_eq!(outcome, Outcome::Failed("HTTP 404: Not Found".to_string()));

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.view, None);
    assert_eq!(snapshot.error.as_deref(), Some("HTTP 404: Not Found"));
    assert!(!snapshot.pending);

    // another attempt is allowed and clears the error
    session.select_range(TimeRange::SixMonths).await;
    assert_eq!(session.analyze().await, Outcome::Applied);
    assert_eq!(session.snapshot().await.error, None);
  }

  #[tokio::test]
  async fn test_analyze_while_pending_is_busy() {
    let mut client = StubClient::default();
    let gate = client.gate(180);
    let session = AnalysisSession::new(client, TimeRange::SixMonths);
    session.set_ticker("AAPL").await;

    let (first, second) = tokio::join!(session.analyze(), async {
      gate.started.notified().await;
      assert!(session.snapshot().await.pending);
      let outcome = session.analyze().await;
      gate.release.notify_one();
      outcome
    });

    assert_eq!(first, Outcome::Applied);
    assert_eq!(second, Outcome::Busy);
  }

  #[tokio::test]
  async fn test_stale_response_does_not_overwrite_newer_selection() {
    let mut client = StubClient::default();
    let slow = client.gate(365);
    let session = AnalysisSession::new(client, TimeRange::SixMonths);
    session.analyze_symbol("AAPL").await;

    let (stale, fresh) = tokio::join!(session.select_range(TimeRange::OneYear), async {
      slow.started.notified().await;
      let outcome = session.select_range(TimeRange::ThreeMonths).await;
      slow.release.notify_one();
      outcome
    });

    assert_eq!(fresh, Outcome::Applied);
    assert_eq!(stale, Outcome::Stale);

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.range, TimeRange::ThreeMonths);
    assert_eq!(snapshot.view.unwrap().days_analyzed, Some(90));
    assert_eq!(snapshot.request.unwrap().range, TimeRange::ThreeMonths);
    assert!(!snapshot.pending);
  }
}
