//! # News Clipping
//!
//! Collects Naver news search results for a keyword, works out the real
//! publisher and the editorial PICK flag of every article, sorts publishers
//! into editorial groups and exports the clipping as an HTML table, a
//! formatted spreadsheet and JSON.
//!
//! ## Usage
//!
//! ```sh
//! NAVER_CLIENT_ID=... NAVER_CLIENT_SECRET=... news_clipping "패션 트렌드" -d 3 -o ./out
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Search**: Page the Naver news search API for the last N days
//! 2. **Enrichment**: Fetch each Naver article page (10 at a time) for the
//!    publisher name and PICK flag, falling back to URL-only resolution
//! 3. **Assembly**: Classify publishers into groups, keep input order
//! 4. **Output**: Filter, then write the HTML table, spreadsheet and JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod assembler;
mod classifier;
mod cli;
mod config;
mod coordinator;
mod enricher;
mod models;
mod outputs;
mod resolver;
mod search;
mod tables;
#[cfg(test)]
mod test_support;
mod utils;

use assembler::{assemble, summarize};
use cli::Cli;
use config::{FileConfig, Settings};
use coordinator::enrich_batch;
use enricher::HttpFetcher;
use models::Clipping;
use outputs::{html, json, xlsx};
use utils::{ensure_writable_dir, export_file_stem, now_kst};

/// Every this many completions, enrichment progress is logged at info level.
const PROGRESS_LOG_EVERY: usize = 10;

#[tokio::main]
#[instrument]
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
    info!("news_clipping starting up");

    // Parse CLI and merge with config file
    let args = Cli::parse();
    let file_config = match args.config.as_deref() {
        Some(path) => config::load_config(path)?,
        None => FileConfig::default(),
    };
    let settings = match Settings::resolve(args, file_config) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Invalid settings");
            return Err(e.into());
        }
    };
    debug!(?settings, "Resolved settings");

    // Early check: ensure output dir is writable
    if let Err(e) = ensure_writable_dir(&settings.output_dir).await {
        error!(
            path = %settings.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Search ----
    let now = now_kst();
    let search_client = reqwest::Client::new();
    let raw_articles = match search::collect_articles(
        &search_client,
        search::SEARCH_ENDPOINT,
        &settings.credentials,
        &settings.query,
        settings.days,
        now,
    )
    .await
    {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, query = %settings.query, "Search failed");
            return Err(e.into());
        }
    };

    if raw_articles.is_empty() {
        warn!(query = %settings.query, days = settings.days, "No search results; nothing to export");
        return Ok(());
    }
    info!(
        count = raw_articles.len(),
        "Collected articles; resolving publishers and PICK flags"
    );

    // ---- Enrich articles in parallel ----
    let fetcher = HttpFetcher::new(settings.request_timeout, &settings.user_agent)?;
    let enrichment = enrich_batch(
        &fetcher,
        &raw_articles,
        settings.concurrency,
        |done, total| {
            if done == total || done % PROGRESS_LOG_EVERY == 0 {
                info!(done, total, "Enrichment progress");
            } else {
                debug!(done, total, "Enrichment progress");
            }
        },
    )
    .await;

    // ---- Assemble & filter ----
    let records = assemble(&raw_articles, &enrichment);
    let summary = summarize(&records);
    info!(
        total = summary.total,
        group_a = summary.group_a,
        group_b = summary.group_b,
        group_c = summary.group_c,
        unclassified = summary.unclassified,
        picks = summary.picks,
        "Clipping summary"
    );

    let filtered = settings.filter.apply(&records);
    info!(kept = filtered.len(), total = records.len(), filter = ?settings.filter, "Applied filters");

    // ---- Outputs ----
    let file_stem = export_file_stem(&settings.query, &now);

    if settings.outputs.html {
        if let Err(e) = html::write_table(
            &settings.query,
            &summary,
            &filtered,
            &settings.output_dir,
            &file_stem,
        )
        .await
        {
            error!(error = %e, "Failed to write HTML table");
        }
    }

    if settings.outputs.xlsx {
        if let Err(e) = xlsx::write_workbook(&filtered, &settings.output_dir, &file_stem).await {
            error!(error = %e, "Failed to write spreadsheet");
        }
    }

    if settings.outputs.json {
        let clipping = Clipping {
            query: settings.query.clone(),
            days: settings.days,
            generated_at: now.to_rfc3339(),
            summary: summarize(&filtered),
            records: filtered,
        };
        if let Err(e) = json::write_clipping(&clipping, &settings.output_dir, &file_stem).await {
            error!(error = %e, "Failed to write JSON");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
