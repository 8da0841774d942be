// src/config.rs

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// The page listing every MCC/MNC pair.
pub const DEFAULT_URL: &str = "http://mcc-mnc.com/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("mccscraper/", env!("CARGO_PKG_VERSION"));

/// Compiled-in run settings. There are no flags or config files.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::for_url(DEFAULT_URL)
    }

    pub fn for_url(url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("parsing source URL {}", url))?;
        Ok(Self {
            url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.url.as_str(), DEFAULT_URL);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
        assert!(cfg.user_agent.starts_with("mccscraper/"));
    }

    #[test]
    fn test_rejects_bad_url() {
        assert!(Config::for_url("not a url").is_err());
    }
}
