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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{analyze::AnalyzeArgs, interactive::InteractiveArgs};

mod config;
mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "rw")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Analysis service base URL (overrides RW_API_URL)
  #[arg(long, global = true)]
  api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Analyze one symbol and print the result
  Analyze(AnalyzeArgs),
  /// Line-oriented dashboard: pick tickers and ranges repeatedly
  Interactive(InteractiveArgs),
  /// Check that the analysis service is up
  Health,
  /// List the supported lookback ranges
  Ranges,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging; stdout is reserved for rendered output
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  // Load configuration
  let config = config::load(cli.api_url)?;

  // Execute command
  match cli.command {
    Commands::Analyze(args) => commands::analyze::execute(args, config).await?,
    Commands::Interactive(args) => commands::interactive::execute(args, config).await?,
    Commands::Health => commands::health::execute(config).await?,
    Commands::Ranges => commands::ranges::execute(),
  }

  Ok(())
}
