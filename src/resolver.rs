//! URL-only publisher resolution.
//!
//! Derives a publisher display name from an article link without any network
//! access. This is the fallback used whenever a page cannot be fetched or
//! parsed, so it must always produce a non-empty name.
//!
//! # Resolution order
//!
//! 1. Naver article links (`.../article/<oid>/<aid>`): look the zero-padded
//!    press ID up in [`tables::OID_PUBLISHERS`].
//! 2. Lower-case the host, strip one common subdomain prefix (`www.`, `n.`,
//!    `news.`, `m.`, `blog.`, `sports.`) and match it against
//!    [`tables::DOMAIN_FRAGMENTS`] in table order.
//! 3. Upper-case the first label of the normalized host (`m.foo.co.kr` -> `FOO`).
//! 4. Anything unparseable becomes [`UNKNOWN_PUBLISHER`].

use crate::models::UNKNOWN_PUBLISHER;
use crate::tables;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;
use url::Url;

/// Domain of the aggregator whose article pages can be enriched.
pub const AGGREGATOR_DOMAIN: &str = "naver.com";

static ARTICLE_OID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"article/(\d+)/").unwrap());

static SUBDOMAIN_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(www\.|n\.|news\.|m\.|blog\.|sports\.)").unwrap());

/// Whether `link` points at the aggregator (`naver.com` or any subdomain).
pub fn is_aggregator_link(link: &str) -> bool {
    Url::parse(link)
        .ok()
        .and_then(|url| {
            url.host_str().map(|host| {
                let host = host.to_ascii_lowercase();
                host == AGGREGATOR_DOMAIN || host.ends_with(&format!(".{AGGREGATOR_DOMAIN}"))
            })
        })
        .unwrap_or(false)
}

/// Resolve a publisher name from a link alone. Never fails.
pub fn resolve(link: &str) -> String {
    if is_aggregator_link(link) {
        if let Some(name) = publisher_from_oid(link) {
            trace!(%link, publisher = name, "Resolved publisher from press ID");
            return name.to_string();
        }
    }

    let Some(domain) = normalized_domain(link) else {
        return UNKNOWN_PUBLISHER.to_string();
    };

    if let Some(name) = tables::publisher_for_domain(&domain) {
        trace!(%link, %domain, publisher = name, "Resolved publisher from domain table");
        return name.to_string();
    }

    match domain.split('.').next() {
        Some(label) if !label.is_empty() => label.to_uppercase(),
        _ => UNKNOWN_PUBLISHER.to_string(),
    }
}

fn publisher_from_oid(link: &str) -> Option<&'static str> {
    let digits = ARTICLE_OID_RE.captures(link)?.get(1)?.as_str();
    tables::publisher_for_oid(&format!("{digits:0>3}"))
}

/// Host part of `link`, lower-cased and with one common prefix removed.
fn normalized_domain(link: &str) -> Option<String> {
    let rest = link.rsplit("//").next()?;
    let host = rest.split(['/', '?', '#']).next()?.to_lowercase();
    let domain = SUBDOMAIN_PREFIX_RE.replace(&host, "").into_owned();
    (!domain.is_empty()).then_some(domain)
}
