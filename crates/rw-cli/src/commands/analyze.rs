use crate::commands::{parse_range, spinner};
use crate::render::{render_view, DEFAULT_NEWS_LIMIT};
use anyhow::{Context, Result};
use clap::Args;
use rw_client::RhymeWatchClient;
use rw_core::{Config, TimeRange};
use tracing::{error, info};

#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
  /// Ticker symbol, e.g. AAPL
  pub symbol: String,

  /// Lookback range (1M, 3M, 6M, 1Y, 5Y); defaults to RW_DEFAULT_RANGE or 6M
  #[arg(short, long, value_parser = parse_range)]
  pub range: Option<TimeRange>,

  /// Print the derived view as JSON instead of the formatted report
  #[arg(long)]
  pub json: bool,

  /// Number of headlines to list
  #[arg(short = 'n', long, default_value_t = DEFAULT_NEWS_LIMIT)]
  pub news_limit: usize,
}

pub async fn execute(args: AnalyzeArgs, config: Config) -> Result<()> {
  let range = args.range.unwrap_or(config.default_range);
  let client = RhymeWatchClient::new(config).context("Failed to create analysis client")?;

  info!("Requesting analysis for {} over {} from {}", args.symbol, range, client.base_url());

  let pb = (!args.json).then(|| spinner(format!("Analyzing {}...", args.symbol.trim().to_uppercase())));
  let result = client.analysis().view(&args.symbol, range).await;
  if let Some(pb) = pb {
    pb.finish_and_clear();
  }

  let view = result.map_err(|e| {
    error!("Analysis failed: {}", e);
    anyhow::anyhow!(e.user_message())
  })?;

  if args.json {
    println!("{}", serde_json::to_string_pretty(&view)?);
  } else {
    println!("{}", render_view(&view, args.news_limit));
  }

  Ok(())
}
