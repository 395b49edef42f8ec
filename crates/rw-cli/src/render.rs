//! Terminal rendering of analysis results

use colored::Colorize;
use rw_client::SessionSnapshot;
use rw_core::{TimeRange, DEFAULT_DAYS};
use rw_models::{AnalysisView, Sentiment};

/// Headlines shown by default, matching the dashboard's news list
pub const DEFAULT_NEWS_LIMIT: usize = 10;

pub fn render_view(view: &AnalysisView, news_limit: usize) -> String {
  let mut lines = Vec::new();

  let window = view.days_analyzed.map(|d| format!(" ({} days)", d)).unwrap_or_default();
  lines.push(format!("\n📊 Analysis Results for {}{}", view.symbol.bold(), window));
  lines.push("═".repeat(44));

  lines.push("Sentiment Distribution".bold().to_string());
  let counts = &view.sentiment_counts;
  lines.push(format!("   {:<10} {}", "Positive:", counts.positive.to_string().green()));
  lines.push(format!("   {:<10} {}", "Neutral:", counts.neutral.to_string().dimmed()));
  lines.push(format!("   {:<10} {}", "Negative:", counts.negative.to_string().red()));
  lines.push(format!(
    "   Overall: {} (score {}, {} headlines)",
    sentiment_colored(view.overall_sentiment),
    format_score(view.average_score),
    view.total_headlines
  ));

  if let Some(rec) = view.recommendation {
    let (r, g, b) = rec.rgb();
    lines.push(String::new());
    lines.push("Investment Recommendation".bold().to_string());
    lines.push(format!("   {}", rec.text().truecolor(r, g, b).bold()));
  }

  lines.push(String::new());
  lines.push("Next Day Prediction".bold().to_string());
  match (view.next_day_up, view.predicted_price, view.predicted_change_pct) {
    (Some(up), Some(price), Some(pct)) => {
      let badge = if up { "📈 Up".green() } else { "📉 Down".red() };
      lines.push(format!(
        "   {}  {} → {} ({:+.1}%, confidence {:.0}%)",
        badge,
        format_price(view.current_price),
        format_price(price),
        pct,
        view.confidence * 100.0
      ));
    }
    _ => lines.push(format!(
      "   {} (confidence {:.0}%)",
      "No prediction available".dimmed(),
      view.confidence * 100.0
    )),
  }

  lines.push(String::new());
  lines.push("Price Summary".bold().to_string());
  lines.push(format!("   Current:  {}", format_price(view.current_price)));
  lines.push(format!("   High:     {}", format_optional_price(view.year_high)));
  lines.push(format!("   Low:      {}", format_optional_price(view.year_low)));
  lines.push(format!("   Volume:   {}", format_volume(view.latest_volume)));

  if !view.news.is_empty() {
    lines.push(String::new());
    lines.push(format!("Recent News Headlines ({})", view.news.len()).bold().to_string());
    for item in view.news.iter().take(news_limit) {
      let date = item
        .published
        .map(|p| p.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| item.date.clone());
      lines.push(format!("   • {}", item.summary));
      lines.push(format!("     {}  {}", date.dimmed(), label_colored(&item.sentiment)));
    }
    if view.news.len() > news_limit {
      lines.push(format!("   … {} more", view.news.len() - news_limit).dimmed().to_string());
    }
  }

  lines.join("\n")
}

/// Render the whole session: pending banner, error banner, or the current view
pub fn render_snapshot(snapshot: &SessionSnapshot, news_limit: usize) -> String {
  let mut lines = Vec::new();

  let ticker = if snapshot.ticker.trim().is_empty() { "-" } else { snapshot.ticker.trim() };
  lines.push(format!("Ticker: {}   Range: {} ({})", ticker, snapshot.range, snapshot.range.description()));

  if snapshot.pending {
    lines.push("Analyzing...".yellow().to_string());
  }
  if let Some(error) = &snapshot.error {
    lines.push(format!("❌ Error: {}", error).red().to_string());
  }
  match &snapshot.view {
    Some(view) => lines.push(render_view(view, news_limit)),
    None if snapshot.error.is_none() && !snapshot.pending => {
      lines.push("No analysis yet. Type `analyze SYMBOL`.".dimmed().to_string())
    }
    None => {}
  }

  lines.join("\n")
}

pub fn render_ranges() -> String {
  let mut lines = vec![format!("{:<6}{:<12}{:>6}", "Label", "Window", "Days")];
  for range in TimeRange::ALL {
    lines.push(format!("{:<6}{:<12}{:>6}", range.label(), range.description(), range.days()));
  }
  lines.push(format!("Unrecognized labels fall back to {} days.", DEFAULT_DAYS));
  lines.join("\n")
}

fn sentiment_colored(sentiment: Sentiment) -> colored::ColoredString {
  match sentiment {
    Sentiment::Positive => sentiment.label().green(),
    Sentiment::Negative => sentiment.label().red(),
    Sentiment::Neutral => sentiment.label().normal(),
  }
}

fn label_colored(label: &str) -> colored::ColoredString {
  match label {
    "POSITIVE" => label.green(),
    "NEGATIVE" => label.red(),
    _ => label.dimmed(),
  }
}

fn format_price(price: f64) -> String {
  format!("${:.2}", price)
}

fn format_optional_price(price: Option<f64>) -> String {
  price.map(format_price).unwrap_or_else(|| "n/a".to_string())
}

fn format_score(score: Option<f64>) -> String {
  score.map(|s| format!("{:+.2}", s)).unwrap_or_else(|| "n/a".to_string())
}

fn format_volume(volume: Option<f64>) -> String {
  match volume {
    Some(v) if v >= 1_000_000.0 => format!("{:.2}M", v / 1_000_000.0),
    Some(v) if v >= 1_000.0 => format!("{:.1}K", v / 1_000.0),
    Some(v) => format!("{:.0}", v),
    None => "n/a".to_string(),
  }
}
