//! Standalone HTML table of the clipping.
//!
//! One row per record, coloured by group, with a group badge, the publisher,
//! the title linking to the article, a red PICK label and the publication
//! time. The summary counts sit above the table.

use crate::models::{EnrichedRecord, Group, Summary, group_color, group_label};
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const TABLE_STYLE: &str = r#"
    body { font-family: sans-serif; margin: 1.5rem; }
    .summary span { margin-right: 1.2rem; }
    .clip-table { width:100%; border-collapse:collapse; font-size:0.9rem; }
    .clip-table th { background:#2C3E50; color:#fff; padding:8px 10px; text-align:left; position:sticky; top:0; }
    .clip-table td { padding:6px 10px; border-bottom:1px solid #eee; }
    .clip-table tr:hover { filter: brightness(0.96); }
    .nowrap { white-space:nowrap; }
    .pick { color:#e74c3c; font-weight:bold; }
    .date { color:#666; font-size:0.85em; }
    a { text-decoration:none; color:#1a73e8; }
"#;

fn badge_style(group: Option<Group>) -> &'static str {
    match group {
        Some(Group::A) => "background:#D5F5E3; color:#1e7e34; padding:2px 8px; border-radius:4px; font-weight:bold;",
        Some(Group::B) => "background:#FEF9E7; color:#856404; padding:2px 8px; border-radius:4px; font-weight:bold;",
        Some(Group::C) => "background:#FDEBD0; color:#c05621; padding:2px 8px; border-radius:4px; font-weight:bold;",
        None => "color:#999; padding:2px 8px;",
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the table rows only.
pub fn render_rows(records: &[EnrichedRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        let pick = if record.is_pick {
            r#"<span class="pick">PICK</span>"#
        } else {
            ""
        };
        // Writing to a String cannot fail.
        let _ = write!(
            rows,
            r#"
      <tr style="background:{bg};">
        <td class="nowrap"><span style="{badge}">{group}</span></td>
        <td class="nowrap" style="font-weight:500;">{publisher}</td>
        <td><a href="{link}" target="_blank" rel="noopener">{title}</a></td>
        <td style="text-align:center;">{pick}</td>
        <td class="nowrap date">{date}</td>
      </tr>"#,
            bg = group_color(record.group),
            badge = badge_style(record.group),
            group = group_label(record.group),
            publisher = escape_html(&record.publisher),
            link = escape_html(&record.link),
            title = escape_html(&record.title),
            date = record.published_display(),
        );
    }
    rows
}

/// Render a complete HTML document.
///
/// `summary` describes the whole clipping while `records` may be a filtered
/// subset of it.
pub fn render_document(query: &str, summary: &Summary, records: &[EnrichedRecord]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="utf-8">
  <title>네이버 뉴스 클리핑 - {query}</title>
  <style>{style}</style>
</head>
<body>
  <h1>네이버 뉴스 클리핑: {query}</h1>
  <p class="summary">
    <span>전체 {total}건</span><span>그룹 A {a}건</span><span>그룹 B {b}건</span>
    <span>그룹 C {c}건</span><span>미분류 {none}건</span><span>PICK {picks}건</span>
  </p>
  <p class="date">필터 결과: {shown}건</p>
  <div style="overflow-x:auto;">
  <table class="clip-table">
    <thead>
      <tr><th>그룹</th><th>매체명</th><th>제목</th><th>PICK</th><th>게시일</th></tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
  </div>
</body>
</html>
"#,
        query = escape_html(query),
        style = TABLE_STYLE,
        total = summary.total,
        a = summary.group_a,
        b = summary.group_b,
        c = summary.group_c,
        none = summary.unclassified,
        picks = summary.picks,
        shown = records.len(),
        rows = render_rows(records),
    )
}

/// Write the HTML document to `{output_dir}/{file_stem}.html`.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir, file_stem = %file_stem))]
pub async fn write_table(
    query: &str,
    summary: &Summary,
    records: &[EnrichedRecord],
    output_dir: &str,
    file_stem: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(output_dir).await?;
    let path = Path::new(output_dir).join(format!("{file_stem}.html"));
    fs::write(&path, render_document(query, summary, records)).await?;
    info!(path = %path.display(), rows = records.len(), "Wrote HTML table");
    Ok(path)
}
