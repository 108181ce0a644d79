//! Naver news search API client.
//!
//! Collects up to 200 of the most recent articles for a keyword by walking
//! two 100-item pages of the date-sorted search results. Collection stops at
//! the first article older than the requested window, or at an empty page.
//!
//! Unlike the enrichment core, failures here are a hard stop for the run:
//! a bad status, a transport error or an unparseable item all surface as
//! [`SearchError`].

use crate::models::RawArticle;
use crate::utils::{kst, truncate_for_log};
use chrono::{DateTime, Duration as ChronoDuration, FixedOffset};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use scraper::Html;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

/// Production Naver news search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://openapi.naver.com/v1/search/news.json";

const PAGE_SIZE: u32 = 100;
const PAGE_STARTS: [u32; 2] = [1, 101];
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_PAUSE: Duration = Duration::from_millis(200);

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Caller-supplied Naver API credentials, passed through as request headers.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Naver API returned HTTP {0}; check the client ID and secret")]
    Status(u16),

    #[error("Naver API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unparseable pubDate {value:?}: {source}")]
    PubDate {
        value: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(rename = "pubDate")]
    pub_date: String,
}

/// Collect recent articles for `query` from `endpoint`, newest first,
/// de-duplicated by link.
///
/// Only articles published within `days` days before `now` are kept. Items
/// without a link are dropped.
#[instrument(level = "info", skip(client, credentials, now))]
pub async fn collect_articles(
    client: &reqwest::Client,
    endpoint: &str,
    credentials: &Credentials,
    query: &str,
    days: u32,
    now: DateTime<FixedOffset>,
) -> Result<Vec<RawArticle>, SearchError> {
    let since = now - ChronoDuration::days(i64::from(days));
    let mut articles = Vec::new();

    for (page, start) in PAGE_STARTS.into_iter().enumerate() {
        if page > 0 {
            sleep(PAGE_PAUSE).await;
        }

        let items = fetch_page(client, endpoint, credentials, query, start).await?;
        if items.is_empty() {
            debug!(start, "Empty result page; stopping");
            break;
        }

        let (recent, reached_cutoff) = take_recent(items, since)?;
        articles.extend(recent);
        if reached_cutoff {
            debug!(start, %since, "Reached articles older than the window; stopping");
            break;
        }
    }

    let articles = dedupe_by_link(articles);
    info!(count = articles.len(), %since, "Collected search results");
    Ok(articles)
}

#[instrument(level = "debug", skip(client, credentials))]
async fn fetch_page(
    client: &reqwest::Client,
    endpoint: &str,
    credentials: &Credentials,
    query: &str,
    start: u32,
) -> Result<Vec<SearchItem>, SearchError> {
    let url = format!(
        "{endpoint}?query={}&display={PAGE_SIZE}&start={start}&sort=date",
        urlencoding::encode(query)
    );
    let res = client
        .get(&url)
        .header("X-Naver-Client-Id", &credentials.client_id)
        .header("X-Naver-Client-Secret", &credentials.client_secret)
        .timeout(SEARCH_TIMEOUT)
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        error!(
            status = status.as_u16(),
            body = %truncate_for_log(&body, 300),
            "Naver search API rejected the request"
        );
        return Err(SearchError::Status(status.as_u16()));
    }

    let response: SearchResponse = res.json().await?;
    debug!(count = response.items.len(), "Fetched result page");
    Ok(response.items)
}

/// Convert a page of items, stopping at the first one published before `since`.
///
/// Returns the converted articles and whether the cutoff was reached.
fn take_recent(
    items: Vec<SearchItem>,
    since: DateTime<FixedOffset>,
) -> Result<(Vec<RawArticle>, bool), SearchError> {
    let mut recent = Vec::with_capacity(items.len());
    for item in items {
        let published_at = DateTime::parse_from_rfc2822(&item.pub_date)
            .map_err(|source| SearchError::PubDate {
                value: item.pub_date.clone(),
                source,
            })?
            .with_timezone(&kst());
        if published_at < since {
            return Ok((recent, true));
        }
        if item.link.trim().is_empty() {
            debug!(title = %item.title, "Search item has no link; skipping");
            continue;
        }
        recent.push(RawArticle {
            link: item.link,
            title: clean_html_text(&item.title),
            published_at,
        });
    }
    Ok((recent, false))
}

/// Keep the first occurrence of every link, preserving order.
fn dedupe_by_link(articles: Vec<RawArticle>) -> Vec<RawArticle> {
    articles
        .into_iter()
        .unique_by(|article| article.link.clone())
        .collect()
}

/// Turn an API title into plain text.
///
/// Entities are decoded, markup (including markup that was entity-encoded)
/// is removed and double quotes become single quotes.
pub fn clean_html_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let unescaped: String = Html::parse_fragment(text).root_element().text().collect();
    TAG_RE.replace_all(&unescaped, "").replace('"', "'")
}
