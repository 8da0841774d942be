// src/fetch.rs

use reqwest::blocking::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Blocking HTTP client with the configured timeout and user agent.
pub fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|source| Error::Network {
            url: config.url.to_string(),
            source,
        })
}

/// Single GET of `url`, returning the whole body as text. No retries.
#[instrument(level = "debug", skip(client, url), fields(url = %url))]
pub fn fetch(client: &Client, url: &Url) -> Result<String> {
    let network = |source: reqwest::Error| Error::Network {
        url: url.to_string(),
        source,
    };

    debug!("Fetching text from {}", url);
    let body = client
        .get(url.clone())
        .send()
        .map_err(network)?
        .error_for_status()
        .map_err(network)?
        .text()
        .map_err(network)?;
    debug!(bytes = body.len(), "Fetched body");
    Ok(body)
}
