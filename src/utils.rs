//! Utility functions for time zones, string handling and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - The fixed KST offset all timestamps are expressed in
//! - String truncation for logging and file-name sanitizing for exports
//! - File system validation for the output directory

use chrono::{DateTime, FixedOffset, Utc};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Korea Standard Time, UTC+9 with no daylight saving.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
}

/// Current time in KST.
pub fn now_kst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&kst())
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the dropped bytes appended. Cuts always land on a character boundary.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Make a search query safe to embed in a file name.
///
/// Whitespace and characters that are special in paths become `_`; other
/// characters (including Hangul) are kept.
pub fn sanitize_for_filename(s: &str) -> String {
    let cleaned: String = s
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    if cleaned.is_empty() {
        "query".to_string()
    } else {
        cleaned
    }
}

/// File stem shared by all exports of one run:
/// `naver_news_<query>_<YYYYmmdd_HHMMSS>`.
pub fn export_file_stem(query: &str, generated_at: &DateTime<FixedOffset>) -> String {
    format!(
        "naver_news_{}_{}",
        sanitize_for_filename(query),
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Create the export directory if needed and check that files can be written
/// into it, so a bad `--output-dir` fails before any network work starts.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let marker = Path::new(path).join(".news_clipping_write_check");
    fs::write(&marker, b"").await?;
    fs::remove_file(&marker).await?;
    info!("Output directory is writable");
    Ok(())
}
