use anyhow::{Context, Result};
use rw_core::Config;
use std::env;

/// Load the client configuration, letting `--api-url` take precedence over `RW_API_URL`
pub fn load(api_url: Option<String>) -> Result<Config> {
  load_with(api_url, |key| env::var(key).ok())
}

fn load_with<F>(api_url: Option<String>, lookup: F) -> Result<Config>
where
  F: Fn(&str) -> Option<String>,
{
  Config::from_lookup(|key| match key {
    "RW_API_URL" if api_url.is_some() => api_url.clone(),
    _ => lookup(key),
  })
  .context("Failed to load RhymeWatch configuration")
}
