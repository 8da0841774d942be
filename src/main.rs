use anyhow::Result;
use mccscraper::{run, Config};
use std::io::{self, BufWriter};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout is the table) ───────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) fetch → extract → render to stdout ───────────────────────
    let config = Config::load()?;
    let stdout = io::stdout();
    run(&config, BufWriter::new(stdout.lock()))?;

    Ok(())
}
