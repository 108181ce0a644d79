//! Command-line interface definitions for the news clipping tool.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials can come from flags, environment variables or the config file;
//! see [`crate::config`] for how the sources are merged.

use crate::assembler::GroupFilter;
use clap::Parser;

/// Command-line arguments for the news clipping tool.
///
/// # Examples
///
/// ```sh
/// # Last 7 days of "패션 트렌드", credentials from the environment
/// NAVER_CLIENT_ID=... NAVER_CLIENT_SECRET=... news_clipping "패션 트렌드"
///
/// # Last 3 days, group A and unclassified PICK articles only
/// news_clipping "반도체" --days 3 --group a --group none --pick-only -o ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search keyword
    pub query: String,

    /// Collect articles from the last N days (1-7)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=7))]
    pub days: Option<u32>,

    /// Naver API client ID
    #[arg(long, env = "NAVER_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Naver API client secret
    #[arg(long, env = "NAVER_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Maximum number of article pages fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-article request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output directory for the table, spreadsheet and JSON files
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Optional path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only keep these groups (repeatable: a, b, c, none)
    #[arg(short, long = "group", value_enum)]
    pub groups: Vec<GroupFilter>,

    /// Only keep PICK articles
    #[arg(long)]
    pub pick_only: bool,

    /// Only keep articles whose title contains this text (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Skip the spreadsheet output
    #[arg(long)]
    pub no_xlsx: bool,

    /// Skip the HTML table output
    #[arg(long)]
    pub no_html: bool,

    /// Skip the JSON output
    #[arg(long)]
    pub no_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_clipping",
            "패션 트렌드",
            "--days",
            "3",
            "--output-dir",
            "./out",
        ]);

        assert_eq!(cli.query, "패션 트렌드");
        assert_eq!(cli.days, Some(3));
        assert_eq!(cli.output_dir.as_deref(), Some("./out"));
        assert!(cli.groups.is_empty());
        assert!(!cli.pick_only);
    }

    #[test]
    fn test_cli_filters() {
        let cli = Cli::parse_from([
            "news_clipping",
            "반도체",
            "-g",
            "a",
            "--group",
            "none",
            "--pick-only",
            "-k",
            "수출",
        ]);

        assert_eq!(cli.groups, vec![GroupFilter::A, GroupFilter::Unclassified]);
        assert!(cli.pick_only);
        assert_eq!(cli.keyword.as_deref(), Some("수출"));
    }

    #[test]
    fn test_cli_rejects_days_out_of_range() {
        assert!(Cli::try_parse_from(["news_clipping", "q", "--days", "8"]).is_err());
        assert!(Cli::try_parse_from(["news_clipping", "q", "--days", "0"]).is_err());
    }

    #[test]
    fn test_cli_requires_query() {
        assert!(Cli::try_parse_from(["news_clipping"]).is_err());
    }
}
