use anyhow::{bail, Context, Result};
use colored::Colorize;
use rw_client::RhymeWatchClient;
use rw_core::Config;
use tracing::warn;

pub async fn execute(config: Config) -> Result<()> {
  let client = RhymeWatchClient::new(config).context("Failed to create analysis client")?;
  let service = client.service();

  let health = service
    .health()
    .await
    .with_context(|| format!("Analysis service at {} is unreachable", client.base_url()))?;

  // the banner is informational, a failure here does not make the service unhealthy
  let version = match service.info().await {
    Ok(info) => info.version,
    Err(e) => {
      warn!("Could not read service banner: {}", e);
      "unknown".to_string()
    }
  };

  if !health.is_healthy() {
    bail!("{} reported status '{}'", health.service, health.status);
  }

  println!("{} {} v{} at {}", "✅".green(), health.service, version, client.base_url());
  Ok(())
}
