//! # Headline Digest
//!
//! Scrapes a handful of headlines from several news front pages and mails
//! each subscriber a digest of the sites they follow.
//!
//! ## Usage
//!
//! ```sh
//! SMTP_PASSWORD=... headline_digest -c subscribers.yaml
//! headline_digest -c subscribers.yaml -o ./digests
//! ```
//!
//! ## Architecture
//!
//! Every run is a fresh, stateless pass in two phases:
//! 1. **Aggregate**: Fetch every registered front page and extract at most
//!    five unique headlines per site
//! 2. **Fan-out**: For each subscriber, take the requested number of
//!    headlines from each requested site, render the digest and deliver it
//!
//! A failing site only removes that site from the run; a failing delivery
//! only affects that subscriber.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod aggregate;
mod cli;
mod config;
mod delivery;
mod error;
mod fanout;
mod fetcher;
mod models;
mod outputs;
mod scrapers;
mod utils;

use aggregate::build_aggregate;
use cli::Cli;
use config::AppConfig;
use delivery::{deliver_all, AnyChannel, FileChannel, SmtpChannel};
use fetcher::{default_headers, HttpFetcher};
use outputs::html::HtmlRenderer;
use outputs::{json, markdown};
use utils::{ensure_writable_dir, truncate_for_log};

/// Pick the delivery channel and make sure it can work before any scraping.
#[instrument(level = "info", skip_all)]
async fn open_channel(args: &Cli, config: &AppConfig) -> Result<AnyChannel, Box<dyn Error>> {
    if let Some(dir) = &args.output_dir {
        ensure_writable_dir(dir).await?;
        info!(dir = %dir.display(), "Digests will be written to files");
        return Ok(AnyChannel::File(FileChannel::new(dir)));
    }

    if config.mail.server.trim().is_empty() || config.mail.sender.trim().is_empty() {
        return Err("mail.server and mail.sender must be configured (or pass --output-dir)".into());
    }
    let password = args
        .smtp_password
        .clone()
        .ok_or("SMTP password missing: set SMTP_PASSWORD or pass --output-dir")?;
    let user = args
        .smtp_user
        .clone()
        .unwrap_or_else(|| config.mail.sender.clone());

    let channel = SmtpChannel::new(&config.mail, user, password)?;
    info!(server = %config.mail.server, port = config.mail.port, "Digests will be sent by mail");
    Ok(AnyChannel::Smtp(channel))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_digest starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.output_dir, ?args.json_output, "Parsed CLI arguments");

    // ---- Configuration ----
    let mut config = match AppConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %args.config.display(), error = %e, "Cannot load configuration");
            return Err(e.into());
        }
    };
    if let Some(max_candidates) = args.max_candidates {
        config.limits.max_candidates = max_candidates;
    }
    if let Some(max_headlines) = args.max_headlines {
        config.limits.max_records = max_headlines;
    }

    config.warn_unknown_sites();
    let preferences = config.preferences();
    if preferences.is_empty() {
        warn!("No subscribers configured; headlines will only be scraped");
    }

    let channel = open_channel(&args, &config).await?;

    // ---- Phase 1: aggregate ----
    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let aggregate = build_aggregate(
        &scrapers::REGISTRY,
        &fetcher,
        &default_headers(),
        &config.limits,
        args.fetch_concurrency,
    )
    .await;

    if aggregate.is_empty() {
        warn!("No site produced any headlines this run");
    }

    if !args.no_preview {
        println!("{}", markdown::aggregate_to_markdown(&aggregate));
    }

    let today = Local::now().date_naive();
    if let Some(path) = &args.json_output {
        if let Err(e) = json::write_snapshot(&aggregate, today, path).await {
            error!(path = %path.display(), error = %e, "Failed to write JSON snapshot");
        }
    }

    // ---- Phase 2: fan-out and delivery ----
    let renderer = HtmlRenderer::new(&config.mail, today);
    let report = deliver_all(&preferences, &aggregate, &renderer, &channel).await;

    for (subscriber, reason) in &report.failed {
        warn!(%subscriber, reason = %truncate_for_log(reason, 300), "Subscriber did not receive a digest");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        sites = aggregate.len(),
        headlines = aggregate.headline_count(),
        sent = report.sent,
        skipped = report.skipped,
        failed = report.failed.len(),
        "Execution complete"
    );

    Ok(())
}
