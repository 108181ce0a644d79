//! Run settings merged from the CLI, an optional YAML file and defaults.
//!
//! Precedence is CLI flag (or its environment variable) > config file >
//! built-in default. A config file looks like:
//!
//! ```yaml
//! naver:
//!   client_id: "YOUR_CLIENT_ID"
//!   client_secret: "YOUR_CLIENT_SECRET"
//! days: 7
//! concurrency: 10
//! request_timeout_secs: 6
//! output_dir: ./clippings
//! ```

use crate::assembler::{GroupFilter, RecordFilter};
use crate::cli::Cli;
use crate::coordinator::DEFAULT_CONCURRENCY;
use crate::enricher::{BROWSER_USER_AGENT, DEFAULT_REQUEST_TIMEOUT};
use crate::search::Credentials;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_DAYS: u32 = 7;
pub const MAX_DAYS: u32 = 7;
pub const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Search keyword is empty")]
    EmptyQuery,

    #[error(
        "Naver API credentials are missing; pass --client-id/--client-secret, set NAVER_CLIENT_ID/NAVER_CLIENT_SECRET or add them to the config file"
    )]
    MissingCredentials,

    #[error("days must be between 1 and 7, got {0}")]
    DaysOutOfRange(u32),

    #[error("request timeout must be at least 1 second")]
    ZeroTimeout,
}

/// Naver credentials section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NaverSection {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Contents of config.yaml. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub naver: NaverSection,
    pub days: Option<u32>,
    pub concurrency: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub output_dir: Option<String>,
}

/// Which output files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSelection {
    pub html: bool,
    pub xlsx: bool,
    pub json: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub query: String,
    pub days: u32,
    pub credentials: Credentials,
    pub concurrency: usize,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub output_dir: String,
    pub filter: RecordFilter,
    pub outputs: OutputSelection,
}

/// Parse YAML config text.
pub fn parse_config(text: &str, path: PathBuf) -> Result<FileConfig, ConfigError> {
    if text.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    serde_yaml::from_str(text).map_err(|source| ConfigError::Parse { path, source })
}

/// Load the config file at `path`.
#[instrument(level = "info")]
pub fn load_config(path: &str) -> Result<FileConfig, ConfigError> {
    let path = PathBuf::from(path);
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&text, path)?;
    debug!(?config.days, ?config.concurrency, ?config.output_dir, "Loaded config file");
    Ok(config)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Settings {
    /// Merge CLI arguments over the config file and defaults.
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let query = cli.query.trim().to_string();
        if query.is_empty() {
            return Err(ConfigError::EmptyQuery);
        }

        let days = cli.days.or(file.days).unwrap_or(DEFAULT_DAYS);
        if !(1..=MAX_DAYS).contains(&days) {
            return Err(ConfigError::DaysOutOfRange(days));
        }

        let client_id = non_blank(cli.client_id).or_else(|| non_blank(file.naver.client_id));
        let client_secret =
            non_blank(cli.client_secret).or_else(|| non_blank(file.naver.client_secret));
        let credentials = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Credentials {
                client_id,
                client_secret,
            },
            _ => return Err(ConfigError::MissingCredentials),
        };

        let concurrency = cli
            .concurrency
            .or(file.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY)
            .max(1);
        let request_timeout = match cli.timeout_secs.or(file.request_timeout_secs) {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let groups = if cli.groups.is_empty() {
            GroupFilter::ALL.to_vec()
        } else {
            cli.groups
        };

        Ok(Self {
            query,
            days,
            credentials,
            concurrency,
            request_timeout,
            user_agent: file
                .user_agent
                .unwrap_or_else(|| BROWSER_USER_AGENT.to_string()),
            output_dir: cli
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            filter: RecordFilter {
                groups,
                pick_only: cli.pick_only,
                keyword: non_blank(cli.keyword),
            },
            outputs: OutputSelection {
                html: !cli.no_html,
                xlsx: !cli.no_xlsx,
                json: !cli.no_json,
            },
        })
    }
}
