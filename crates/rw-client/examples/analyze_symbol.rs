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

//! Analyze one symbol over every supported range
//!
//! ```text
//! RW_API_URL=http://localhost:8000 cargo run -p rw-client --example analyze_symbol -- AAPL
//! ```

use rw_client::RhymeWatchClient;
use rw_core::{Config, Error, TimeRange};

#[tokio::main]
async fn main() -> Result<(), Error> {
  let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
  let client = RhymeWatchClient::new(Config::from_env()?)?;

  let health = client.service().health().await?;
  println!("{} is {}", health.service, health.status);

  for range in TimeRange::ALL {
    match client.analysis().view(&symbol, range).await {
      Ok(view) => println!(
        "{:>3}  {:<8} {:<5} score {:>6}  next day {:>8}",
        range.label(),
        view.overall_sentiment.label(),
        view.recommendation.map(|r| r.text()).unwrap_or("-"),
        view.average_score.map(|s| format!("{:+.2}", s)).unwrap_or_else(|| "n/a".to_string()),
        view.predicted_price.map(|p| format!("${:.2}", p)).unwrap_or_else(|| "n/a".to_string()),
      ),
      Err(e) => println!("{:>3}  {}", range.label(), e.user_message()),
    }
  }

  Ok(())
}
