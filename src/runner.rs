// src/runner.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::io::Write;
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::extract::extract_table;
use crate::fetch;

/// Fetch, extract and write the table to `out`, returning the entry count.
///
/// Nothing reaches `out` until the page is fetched and fully extracted, so a
/// network or parse failure leaves it untouched.
pub fn run<W: Write>(config: &Config, out: W) -> Result<usize> {
    let client = fetch::build_client(config)?;
    run_with_client(&client, &config.url, out)
}

pub fn run_with_client<W: Write>(client: &Client, url: &Url, mut out: W) -> Result<usize> {
    let html = fetch::fetch(client, url)?;
    let table = extract_table(&html)?;
    info!(entries = table.len(), url = %url, "extracted MCC table");

    table.write_to(&mut out).context("writing table")?;
    out.flush().context("flushing output")?;
    Ok(table.len())
}
