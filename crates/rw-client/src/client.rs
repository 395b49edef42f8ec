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

use crate::endpoints::{analysis::AnalysisEndpoints, service::ServiceEndpoints};
use crate::transport::Transport;
use async_trait::async_trait;
use rw_core::{Config, Result};
use rw_models::RawAnalysisResponse;
use std::sync::Arc;

/// Capability to fetch one analysis from the service.
///
/// The session and the CLI only depend on this trait so tests can substitute
/// a stub for the HTTP client.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
  /// Fetch the raw analysis for `symbol` over the last `days` days
  async fn fetch_analysis(&self, symbol: &str, days: u32) -> Result<RawAnalysisResponse>;
}

#[async_trait]
impl<T> AnalysisClient for Arc<T>
where
  T: AnalysisClient + ?Sized,
{
  async fn fetch_analysis(&self, symbol: &str, days: u32) -> Result<RawAnalysisResponse> {
    (**self).fetch_analysis(symbol, days).await
  }
}

/// Main RhymeWatch service client
///
/// Provides access to the service endpoints through organized endpoint modules.
///
/// # Examples
///
/// ```rust,no_run
/// use rw_client::RhymeWatchClient;
/// use rw_core::{Config, TimeRange};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = RhymeWatchClient::new(config)?;
///
///     let view = client.analysis().view("AAPL", TimeRange::SixMonths).await?;
///     println!("{}: {:?}", view.symbol, view.recommendation);
///
///     Ok(())
/// }
/// ```
pub struct RhymeWatchClient {
  transport: Arc<Transport>,
}

impl RhymeWatchClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport })
  }

  /// Get access to the analysis endpoint
  pub fn analysis(&self) -> AnalysisEndpoints {
    AnalysisEndpoints::new(self.transport.clone())
  }

  /// Get access to the health and banner endpoints
  pub fn service(&self) -> ServiceEndpoints {
    ServiceEndpoints::new(self.transport.clone())
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

#[async_trait]
impl AnalysisClient for RhymeWatchClient {
  async fn fetch_analysis(&self, symbol: &str, days: u32) -> Result<RawAnalysisResponse> {
    self.analysis().fetch(symbol, days).await
  }
}

impl std::fmt::Debug for RhymeWatchClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RhymeWatchClient").field("transport", &self.transport).finish()
  }
}
