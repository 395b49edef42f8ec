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

use crate::commands::{parse_range, spinner};
use crate::render::{render_snapshot, DEFAULT_NEWS_LIMIT};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rw_client::{AnalysisClient, AnalysisSession, Outcome, RhymeWatchClient};
use rw_core::{Config, TimeRange};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Args, Clone, Debug)]
pub struct InteractiveArgs {
  /// Initial lookback range; defaults to RW_DEFAULT_RANGE or 6M
  #[arg(short, long, value_parser = parse_range)]
  pub range: Option<TimeRange>,

  /// Number of headlines to list
  #[arg(short = 'n', long, default_value_t = DEFAULT_NEWS_LIMIT)]
  pub news_limit: usize,
}

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
enum Action {
  Analyze(Option<String>),
  Ticker(String),
  Range(TimeRange),
  Show,
  Help,
  Quit,
  Nothing,
}

const HELP: &str = "\
Commands:
  analyze [SYMBOL]   analyze SYMBOL, or the current ticker
  ticker SYMBOL      set the ticker without analyzing
  range LABEL        select 1M, 3M, 6M, 1Y or 5Y (re-runs a shown analysis)
  show               print the current state
  help               this text
  quit               leave";

fn parse_action(line: &str) -> Result<Action, String> {
  let mut parts = line.split_whitespace();
  let Some(command) = parts.next() else {
    return Ok(Action::Nothing);
  };
  let argument = parts.next().map(str::to_string);
  if let Some(extra) = parts.next() {
    return Err(format!("unexpected argument '{}'", extra));
  }

  match command.to_lowercase().as_str() {
    "analyze" | "a" => Ok(Action::Analyze(argument)),
    "ticker" | "t" => argument.map(Action::Ticker).ok_or_else(|| "ticker needs a SYMBOL".to_string()),
    "range" | "r" => {
      let label = argument.ok_or_else(|| "range needs a LABEL".to_string())?;
      parse_range(&label).map(Action::Range)
    }
    "show" | "s" => Ok(Action::Show),
    "help" | "?" => Ok(Action::Help),
    "quit" | "exit" | "q" => Ok(Action::Quit),
    other => Err(format!("unknown command '{}', type `help`", other)),
  }
}

pub async fn execute(args: InteractiveArgs, config: Config) -> Result<()> {
  let range = args.range.unwrap_or(config.default_range);
  let client = RhymeWatchClient::new(config).context("Failed to create analysis client")?;
  println!("RhymeWatch dashboard connected to {}. Type `help` for commands.", client.base_url());

  let session = AnalysisSession::new(client, range);
  let mut lines = BufReader::new(tokio::io::stdin()).lines();

  loop {
    print!("rw> ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let Some(line) = lines.next_line().await.context("Failed to read input")? else {
      break;
    };

    let action = match parse_action(&line) {
      Ok(action) => action,
      Err(message) => {
        println!("{}", message.yellow());
        continue;
      }
    };

    if !apply(&session, action, args.news_limit).await {
      break;
    }
  }

  Ok(())
}

/// Run one action against the session; returns `false` when the user quits
async fn apply<C: AnalysisClient>(session: &AnalysisSession<C>, action: Action, news_limit: usize) -> bool {
  let mut range_change = None;
  let outcome = match action {
    Action::Quit => return false,
    Action::Nothing => return true,
    Action::Help => {
      println!("{}", HELP);
      return true;
    }
    Action::Show => {
      println!("{}", render_snapshot(&session.snapshot().await, news_limit));
      return true;
    }
    Action::Ticker(symbol) => {
      session.set_ticker(&symbol).await;
      return true;
    }
    Action::Analyze(symbol) => {
      if let Some(symbol) = symbol {
        session.set_ticker(&symbol).await;
      }
      let pb = spinner("Analyzing...".to_string());
      let outcome = session.analyze().await;
      pb.finish_and_clear();
      outcome
    }
    Action::Range(range) => {
      range_change = Some(range);
      let pb = spinner(format!("Switching to {}...", range.description()));
      let outcome = session.select_range(range).await;
      pb.finish_and_clear();
      outcome
    }
  };

  debug!("Action finished with {:?}", outcome);
  match outcome {
    Outcome::Applied | Outcome::Failed(_) => {
      println!("{}", render_snapshot(&session.snapshot().await, news_limit))
    }
    Outcome::Stale => debug!("Response superseded by a newer request"),
    other => {
      if let Some(message) = notice(&other, range_change) {
        println!("{}", message.yellow());
      }
    }
  }
  true
}

/// Status line for outcomes that leave the rendered view unchanged
fn notice(outcome: &Outcome, range_change: Option<TimeRange>) -> Option<String> {
  match (outcome, range_change) {
    (Outcome::Ignored, Some(range)) => Some(format!("Range set to {} ({}).", range, range.description())),
    (Outcome::Ignored, None) => Some("Enter a ticker first, e.g. `analyze AAPL`.".to_string()),
    (Outcome::Busy, _) => Some("An analysis is already running.".to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_actions() {
    assert_eq!(parse_action("analyze aapl"), Ok(Action::Analyze(Some("aapl".to_string()))));
    assert_eq!(parse_action("A"), Ok(Action::Analyze(None)));
    assert_eq!(parse_action("ticker msft"), Ok(Action::Ticker("msft".to_string())));
    assert_eq!(parse_action("range 1Y"), Ok(Action::Range(TimeRange::OneYear)));
    assert_eq!(parse_action("  "), Ok(Action::Nothing));
    assert_eq!(parse_action("quit"), Ok(Action::Quit));
    assert_eq!(parse_action("?"), Ok(Action::Help));
  }

  #[test]
  fn test_parse_action_errors() {
    assert!(parse_action("range").is_err());
    assert!(parse_action("range 2W").is_err());
    assert!(parse_action("ticker").is_err());
    assert!(parse_action("analyze a b").is_err());
    assert!(parse_action("buy AAPL").is_err());
  }

  #[test]
  fn test_range_change_without_result_reports_range() {
    let message = notice(&Outcome::Ignored, Some(TimeRange::OneYear)).unwrap();
    assert_eq!(message, "Range set to 1Y (1 Year).");
    assert!(notice(&Outcome::Ignored, None).unwrap().contains("Enter a ticker first"));
    assert!(notice(&Outcome::Busy, Some(TimeRange::OneMonth)).unwrap().contains("already running"));
    assert_eq!(notice(&Outcome::Applied, None), None);
  }
}
