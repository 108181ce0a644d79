//! JSON output of a whole run.
//!
//! The file holds the query, the collection window, the generation time, the
//! summary counts and every record, e.g.
//!
//! ```text
//! {
//!   "query": "패션",
//!   "days": 7,
//!   "generated_at": "2025-05-06T09:05:07+09:00",
//!   "summary": { "total": 2, "group_a": 1, ... },
//!   "records": [ { "group": "A", "publisher": "연합뉴스", "pick": "PICK", ... } ]
//! }
//! ```

use crate::models::Clipping;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`Clipping`] to `{output_dir}/{file_stem}.json`.
///
/// # Returns
///
/// The path written, or an error if directory creation or file writing fails.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir, file_stem = %file_stem))]
pub async fn write_clipping(
    clipping: &Clipping,
    output_dir: &str,
    file_stem: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(clipping)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = Path::new(output_dir).join(format!("{file_stem}.json"));
    fs::write(&path, json).await?;
    info!(path = %path.display(), records = clipping.records.len(), "Wrote JSON file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::{assemble, summarize};
    use crate::models::EnrichmentResult;
    use crate::test_support::{naver_link, raw_article};

    #[tokio::test]
    async fn test_write_clipping() {
        let items = vec![raw_article(&naver_link("001", 1), "제목", 0)];
        let records = assemble(&items, &[EnrichmentResult::unpicked("연합뉴스")]);
        let clipping = Clipping {
            query: "패션".to_string(),
            days: 7,
            generated_at: "2025-05-06T12:00:00+09:00".to_string(),
            summary: summarize(&records),
            records,
        };

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("json");
        let path = write_clipping(&clipping, dir.to_str().unwrap(), "naver_news_패션_20250506_120000")
            .await
            .unwrap();

        assert!(path.ends_with("naver_news_패션_20250506_120000.json"));
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["query"], "패션");
        assert_eq!(value["summary"]["group_a"], 1);
        assert_eq!(value["records"][0]["publisher"], "연합뉴스");
        assert_eq!(value["records"][0]["group"], "A");
        assert_eq!(value["records"][0]["pick"], "");
    }
}
