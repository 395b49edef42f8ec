//! Sentiment and price analysis endpoint
//!
//! `GET /analyze?symbol=<TICKER>&days=<N>` returns headline sentiment counts,
//! price and volume history, and the service's next-day direction call.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use rw_core::{normalize_symbol, Endpoint, Error, Result, TimeRange};
use rw_models::{derive_view_model, AnalysisView, RawAnalysisResponse};
use std::sync::Arc;
use tracing::instrument;

/// Analysis endpoints
pub struct AnalysisEndpoints {
    transport: Arc<Transport>,
}

impl AnalysisEndpoints {
    /// Create a new analysis endpoints instance
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the raw analysis for a symbol over the last `days` days.
    ///
    /// The symbol is trimmed and uppercased; a blank symbol fails with
    /// [`Error::InvalidSymbol`] before any request is made.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use rw_client::RhymeWatchClient;
    /// # use rw_core::Config;
    /// # async fn run() -> rw_core::Result<()> {
    /// let client = RhymeWatchClient::new(Config::default())?;
    /// let raw = client.analysis().fetch("AAPL", 180).await?;
    /// println!("{} headlines", raw.total_headlines);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn fetch(&self, symbol: &str, days: u32) -> Result<RawAnalysisResponse> {
        let symbol = normalize_symbol(symbol).ok_or_else(|| Error::InvalidSymbol(symbol.to_string()))?;

        let params = [("symbol", symbol), ("days", days.to_string())];
        self.transport().get(Endpoint::Analyze, &params).await
    }

    /// Fetch and derive the display view for a symbol and range
    #[instrument(skip(self), fields(range = %range))]
    pub async fn view(&self, symbol: &str, range: TimeRange) -> Result<AnalysisView> {
        let raw = self.fetch(symbol, range.days()).await?;
        Ok(derive_view_model(&raw))
    }
}

impl_endpoint_base!(AnalysisEndpoints);

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_endpoints() -> AnalysisEndpoints {
        AnalysisEndpoints::new(Arc::new(Transport::new_mock()))
    }

    #[tokio::test]
    async fn test_blank_symbol_is_rejected_without_request() {
        let endpoints = create_test_endpoints();
        let result = endpoints.fetch("   ", 180).await;
        assert!(matches!(result, Err(Error::InvalidSymbol(_))));
    }
}
