//! In-memory [`PageFetcher`], a loopback HTTP server and fixtures for tests.

use crate::enricher::{FetchedPage, PageFetcher};
use crate::models::RawArticle;
use chrono::{FixedOffset, TimeZone};
use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Serves canned pages by URL.
///
/// Unknown URLs fail like a transport error. Optional per-URL delays let tests
/// scramble completion order, and URLs containing the panic marker panic.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, FetchedPage>,
    delays: HashMap<String, Duration>,
    panic_marker: Option<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, body: impl Into<String>) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn panicking_on(mut self, marker: &str) -> Self {
        self.panic_marker = Some(marker.to_string());
        self
    }

    /// Number of fetches performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, Box<dyn Error>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.get(url).copied().unwrap_or(Duration::from_millis(1));
        tokio::time::sleep(delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(marker) = &self.panic_marker {
            if url.contains(marker.as_str()) {
                panic!("fetcher exploded on {url}");
            }
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("connection refused: {url}").into())
    }
}

/// Minimal Naver article page naming `publisher` in the masthead.
pub fn article_page(publisher: &str, pick: bool) -> String {
    let pick_label = if pick {
        r#"<span class="media_end_head_journalist_edit_label">언론사 픽</span>"#
    } else {
        ""
    };
    format!(
        r#"<html><head><title>기사</title></head><body>
        <div class="media_end_head_top"><a href="/press"><img alt="{publisher}" src="logo.png"></a></div>
        {pick_label}
        <article>본문</article>
        </body></html>"#
    )
}

/// Naver article link for press ID `oid` and article number `n`.
pub fn naver_link(oid: &str, n: usize) -> String {
    format!("https://n.news.naver.com/mnews/article/{oid}/{n:010}")
}

/// Raw article published `minutes_ago` minutes before 2025-05-06 12:00 KST.
pub fn raw_article(link: &str, title: &str, minutes_ago: i64) -> RawArticle {
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    let noon = kst.with_ymd_and_hms(2025, 5, 6, 12, 0, 0).unwrap();
    RawArticle {
        link: link.to_string(),
        title: title.to_string(),
        published_at: noon - chrono::Duration::minutes(minutes_ago),
    }
}

/// One-connection-per-request HTTP/1.1 server on 127.0.0.1.
///
/// Canned `(status, body)` responses are served in order; once they run out
/// the last one repeats. Request heads are recorded for inspection.
pub struct LocalServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl LocalServer {
    pub async fn serving(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            let mut served = 0;
            while let Ok((mut stream, _)) = listener.accept().await {
                let head = read_request_head(&mut stream).await;
                seen.lock().unwrap().push(head);
                let (status, body) = responses
                    .get(served)
                    .or(responses.last())
                    .cloned()
                    .unwrap_or((404, String::new()));
                served += 1;
                let reply = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json; charset=utf-8\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(reply.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { url, requests }
    }

    /// Accepts connections and never answers them.
    pub async fn hanging() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        Self { url, requests }
    }

    /// Request heads received so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
