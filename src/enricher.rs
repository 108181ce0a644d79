//! Per-article enrichment from the Naver article page.
//!
//! For links on the aggregator, the rendered article page carries a more
//! precise publisher name than the URL and tells whether the article was
//! picked by the editors. Everything here degrades to the URL-only
//! [`resolver::resolve`] verdict instead of failing.
//!
//! # Architecture
//!
//! - [`PageFetcher`]: the network seam, one GET per article
//! - [`HttpFetcher`]: `reqwest` implementation with timeout and browser UA
//! - [`parse_article_page`]: pure HTML extraction, independent of transport
//! - [`enrich`]: ties the three together with the fallback policy
//!
//! # Publisher extraction order
//!
//! 1. `alt` of the masthead logo image (`a.press_logo img`, `.media_end_head_top a img`)
//! 2. `<meta property="og:article:author">`
//! 3. The "linked more" byline (`.media_end_linked_more_point`)
//!
//! # PICK detection
//!
//! A `.is_pick` / `.media_end_head_journalist_edit_label` element, or else the
//! literal text `PICK` anywhere in the body. The text match is a loose
//! heuristic and can fire on unrelated page content.

use crate::models::{EnrichmentResult, PICK_LABEL};
use crate::resolver::{self, is_aggregator_link};
use scraper::{Html, Selector};
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Default per-request timeout for article pages.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// Desktop Chrome user agent; Naver serves the full article markup to it.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const LOGO_SELECTOR: &str = "a.press_logo img, .media_end_head_top a img";
const AUTHOR_META_SELECTOR: &str = r#"meta[property="og:article:author"]"#;
const LINKED_MORE_SELECTOR: &str = ".media_end_linked_more_point";
const PICK_SELECTOR: &str = ".is_pick, .media_end_head_journalist_edit_label";

/// Status and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// Trait for fetching a single article page.
///
/// Implementors perform exactly one request per call, with no retries.
pub trait PageFetcher {
    /// Fetch `url`, returning its status and body.
    ///
    /// Transport failures and timeouts are errors; non-200 statuses are not.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, Box<dyn Error>>;
}

/// [`PageFetcher`] backed by a shared `reqwest::Client`.
///
/// The client has no cookie store, so nothing persists between calls.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given per-request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<FetchedPage, Box<dyn Error>> {
        let t0 = Instant::now();
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = if status == 200 {
            res.text().await?
        } else {
            String::new()
        };
        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched article page"
        );
        Ok(FetchedPage { status, body })
    }
}

/// Signals recovered from an article page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDetails {
    /// Publisher name, if any extraction strategy found one.
    pub publisher: Option<String>,
    pub is_pick: bool,
}

/// Enrich one article link. Never fails.
///
/// Off-platform links are resolved from the URL alone without touching the
/// network. On-platform links get one fetch; any failure or non-200 status
/// falls back to the URL-only result.
#[instrument(level = "debug", skip(fetcher))]
pub async fn enrich<F: PageFetcher>(fetcher: &F, link: &str) -> EnrichmentResult {
    let fallback = EnrichmentResult::unpicked(resolver::resolve(link));
    if !is_aggregator_link(link) {
        return fallback;
    }

    let page = match fetcher.fetch(link).await {
        Ok(page) if page.status == 200 => page,
        Ok(page) => {
            debug!(status = page.status, publisher = %fallback.publisher, "Non-200 article page; using URL fallback");
            return fallback;
        }
        Err(e) => {
            warn!(error = %e, publisher = %fallback.publisher, "Article fetch failed; using URL fallback");
            return fallback;
        }
    };

    let details = parse_article_page(&page.body);
    let result = EnrichmentResult {
        publisher: details.publisher.unwrap_or(fallback.publisher),
        is_pick: details.is_pick,
    };
    debug!(publisher = %result.publisher, pick = result.pick_label(), "Enriched article");
    result
}

/// Extract the publisher name and PICK flag from an article page body.
pub fn parse_article_page(body: &str) -> PageDetails {
    let document = Html::parse_document(body);

    let publisher = logo_alt(&document)
        .or_else(|| author_meta(&document))
        .or_else(|| linked_more_byline(&document));

    let is_pick = has_match(&document, PICK_SELECTOR) || body.contains(PICK_LABEL);

    PageDetails { publisher, is_pick }
}

fn logo_alt(document: &Html) -> Option<String> {
    let selector = Selector::parse(LOGO_SELECTOR).ok()?;
    let alt = document.select(&selector).next()?.value().attr("alt")?;
    non_empty(alt)
}

fn author_meta(document: &Html) -> Option<String> {
    let selector = Selector::parse(AUTHOR_META_SELECTOR).ok()?;
    let content = document.select(&selector).next()?.value().attr("content")?;
    non_empty(content)
}

fn linked_more_byline(document: &Html) -> Option<String> {
    let selector = Selector::parse(LINKED_MORE_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().map(str::trim).collect();
    non_empty(&text)
}

fn has_match(document: &Html, selector: &str) -> bool {
    Selector::parse(selector)
        .map(|selector| document.select(&selector).next().is_some())
        .unwrap_or(false)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeFetcher, LocalServer, article_page};

    const NAVER_LINK: &str = "https://n.news.naver.com/mnews/article/001/0015000001";

    #[test]
    fn test_parse_logo_alt_wins() {
        let html = r#"<html><head>
            <meta property="og:article:author" content="메타매체">
            </head><body>
            <div class="media_end_head_top"><a href="/"><img alt=" 로고매체 " src="x.png"></a></div>
            <em class="media_end_linked_more_point">바이라인매체</em>
            </body></html>"#;
        let details = parse_article_page(html);
        assert_eq!(details.publisher.as_deref(), Some("로고매체"));
        assert!(!details.is_pick);
    }

    #[test]
    fn test_parse_press_logo_anchor() {
        let html = r#"<a class="press_logo" href="/"><img alt="한겨레"></a>"#;
        assert_eq!(parse_article_page(html).publisher.as_deref(), Some("한겨레"));
    }

    #[test]
    fn test_parse_falls_back_to_author_meta() {
        let html = r#"<html><head>
            <meta property="og:article:author" content="메타매체 | 네이버">
            </head><body>
            <div class="media_end_head_top"><a href="/"><img alt="" src="x.png"></a></div>
            </body></html>"#;
        assert_eq!(
            parse_article_page(html).publisher.as_deref(),
            Some("메타매체 | 네이버")
        );
    }

    #[test]
    fn test_parse_falls_back_to_linked_more() {
        let html = r#"<body><em class="media_end_linked_more_point"> 바이라인<b>매체</b> </em></body>"#;
        assert_eq!(parse_article_page(html).publisher.as_deref(), Some("바이라인매체"));
    }

    #[test]
    fn test_parse_nothing_found() {
        let details = parse_article_page("<html><body><p>본문</p></body></html>");
        assert_eq!(details, PageDetails::default());
    }

    #[test]
    fn test_pick_from_element() {
        let html = r#"<body><span class="media_end_head_journalist_edit_label">언론사 픽</span></body>"#;
        assert!(parse_article_page(html).is_pick);
        let html = r#"<body><div class="is_pick"></div></body>"#;
        assert!(parse_article_page(html).is_pick);
    }

    #[test]
    fn test_pick_from_marker_text() {
        let html = r#"<body><script>var flags = ["PICK"];</script></body>"#;
        assert!(parse_article_page(html).is_pick);
    }

    #[tokio::test]
    async fn test_enrich_uses_page() {
        let fetcher = FakeFetcher::new().with_page(NAVER_LINK, article_page("조선일보", true));
        let result = enrich(&fetcher, NAVER_LINK).await;
        assert_eq!(result.publisher, "조선일보");
        assert_eq!(result.pick_label(), "PICK");
    }

    #[tokio::test]
    async fn test_enrich_page_without_signals() {
        let fetcher = FakeFetcher::new().with_page(NAVER_LINK, "<html><body>본문</body></html>");
        let result = enrich(&fetcher, NAVER_LINK).await;
        assert_eq!(result.publisher, "연합뉴스");
        assert_eq!(result.pick_label(), "");
    }

    #[tokio::test]
    async fn test_enrich_off_platform_skips_network() {
        let fetcher = FakeFetcher::new();
        let link = "https://www.cctimes.kr/news/articleView.html?idxno=1";
        let result = enrich(&fetcher, link).await;
        assert_eq!(result, EnrichmentResult::unpicked(resolver::resolve(link)));
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_enrich_fetch_error_falls_back() {
        let fetcher = FakeFetcher::new();
        let result = enrich(&fetcher, NAVER_LINK).await;
        assert_eq!(result, EnrichmentResult::unpicked("연합뉴스"));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_enrich_non_200_falls_back() {
        let fetcher = FakeFetcher::new().with_status(NAVER_LINK, 404, article_page("조선일보", true));
        let result = enrich(&fetcher, NAVER_LINK).await;
        assert_eq!(result, EnrichmentResult::unpicked("연합뉴스"));
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new(DEFAULT_REQUEST_TIMEOUT, BROWSER_USER_AGENT).is_ok());
    }

    #[tokio::test]
    async fn test_http_fetcher_reads_ok_body_with_browser_agent() {
        let server = LocalServer::serving(vec![(200, article_page("한겨레", false))]).await;
        let fetcher = HttpFetcher::new(DEFAULT_REQUEST_TIMEOUT, BROWSER_USER_AGENT).unwrap();

        let page = fetcher.fetch(&server.url).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(parse_article_page(&page.body).publisher.as_deref(), Some("한겨레"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].to_lowercase().contains("user-agent: mozilla/5.0 (windows nt 10.0; win64; x64)"));
        assert!(requests[0].contains("Chrome/124.0.0.0"));
    }

    #[tokio::test]
    async fn test_http_fetcher_skips_non_200_body() {
        let server = LocalServer::serving(vec![(404, "not here".to_string())]).await;
        let fetcher = HttpFetcher::new(DEFAULT_REQUEST_TIMEOUT, BROWSER_USER_AGENT).unwrap();

        let page = fetcher.fetch(&server.url).await.unwrap();
        assert_eq!(
            page,
            FetchedPage {
                status: 404,
                body: String::new()
            }
        );
    }

    #[tokio::test]
    async fn test_http_fetcher_times_out_on_hung_server() {
        let server = LocalServer::hanging().await;
        let fetcher = HttpFetcher::new(Duration::from_millis(300), BROWSER_USER_AGENT).unwrap();

        let t0 = Instant::now();
        let result = fetcher.fetch(&server.url).await;
        assert!(result.is_err());
        assert!(t0.elapsed() < Duration::from_secs(3));
    }
}
